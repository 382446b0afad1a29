use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use kata::{Exercise, ExerciseConfig};

use super::load_catalog;

pub fn run(catalog: &Path, config: ExerciseConfig, solution_file: &Path) -> Result<()> {
    let catalog = load_catalog(catalog)?;
    let solution = fs::read_to_string(solution_file)
        .context(format!("Failed to read solution: {}", solution_file.display()))?;

    let exercise = Exercise::new(&catalog, config);
    let Some(program) = exercise.submission(&solution) else {
        anyhow::bail!(
            "Exercise `{}` has no test fragment matching `{}`",
            exercise.id(),
            exercise.identifiers().test
        );
    };
    if !exercise.config().is_executable() {
        log::warn!("Exercise `{}` is not executable, Submit is hidden on the page", exercise.id());
    }
    println!("{program}");
    Ok(())
}
