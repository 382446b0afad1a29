mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use kata::ExerciseConfig;

#[derive(Parser)]
#[command(name = "kata")]
#[command(about = "Build and check interactive exercise catalogs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a catalog JSON from a directory of exercise files
    Catalog {
        /// Directory holding source, solution and test files
        dir: PathBuf,

        /// JSON file with the site metadata (testTemplate, juniper)
        #[arg(long)]
        site: PathBuf,
    },

    /// Show which fragments an exercise resolves to
    Resolve {
        /// Catalog JSON file
        #[arg(long)]
        catalog: PathBuf,

        #[command(flatten)]
        exercise: ExerciseArgs,
    },

    /// Print the test program for a solution
    Submit {
        /// Catalog JSON file
        #[arg(long)]
        catalog: PathBuf,

        #[command(flatten)]
        exercise: ExerciseArgs,

        /// File with the code to submit
        solution_file: PathBuf,
    },

    /// Report exercises with missing fragments and template problems
    Check {
        /// Catalog JSON file
        #[arg(long)]
        catalog: PathBuf,
    },
}

#[derive(Args)]
struct ExerciseArgs {
    /// Exercise id, default identifiers are `<ID>_source`, `<ID>_solution`, `<ID>_test`
    id: String,

    /// Override the source identifier
    #[arg(long)]
    source: Option<String>,

    /// Override the solution identifier
    #[arg(long)]
    solution: Option<String>,

    /// Override the test identifier
    #[arg(long)]
    test: Option<String>,

    /// `false` disables Run and Submit
    #[arg(long)]
    executable: Option<String>,
}

impl From<ExerciseArgs> for ExerciseConfig {
    fn from(args: ExerciseArgs) -> Self {
        ExerciseConfig {
            id: args.id,
            source: args.source,
            solution: args.solution,
            test: args.test,
            executable: args.executable,
        }
    }
}

fn main() -> Result<()> {
    // Ambiguous fragment matches are reported as warnings, keep them visible by default.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Catalog { dir, site } => {
            commands::catalog::run(&dir, &site)?;
        }

        Commands::Resolve { catalog, exercise } => {
            commands::resolve::run(&catalog, exercise.into())?;
        }

        Commands::Submit {
            catalog,
            exercise,
            solution_file,
        } => {
            commands::submit::run(&catalog, exercise.into(), &solution_file)?;
        }

        Commands::Check { catalog } => {
            commands::check::run(&catalog)?;
        }
    }

    Ok(())
}
