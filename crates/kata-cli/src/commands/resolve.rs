use std::path::Path;

use anyhow::Result;
use kata::{Exercise, ExerciseConfig};

use super::load_catalog;

pub fn run(catalog: &Path, config: ExerciseConfig) -> Result<()> {
    let catalog = load_catalog(catalog)?;
    let exercise = Exercise::new(&catalog, config);
    println!("{}", serde_json::to_string_pretty(&describe(&exercise))?);
    Ok(())
}

fn describe(exercise: &Exercise) -> serde_json::Value {
    let ids = exercise.identifiers();
    let files = exercise.files();
    let controls = exercise.controls();
    serde_json::json!({
        "id": exercise.id(),
        "identifiers": {
            "source": ids.source,
            "solution": ids.solution,
            "test": ids.test,
        },
        "sourceFile": files.source_file,
        "solutionFile": files.solution_file,
        "testFile": files.test_file,
        "controls": {
            "run": controls.run,
            "submit": controls.submit,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use kata::{CatalogQuery, CellSettings, CodeFragment, SiteMetadata};

    #[test]
    fn describes_resolution() {
        let site = SiteMetadata {
            test_template: "${solution}\n${test}".to_owned(),
            juniper: CellSettings::default(),
        };
        let catalog = CatalogQuery::new(
            site,
            [
                CodeFragment::new("lessons", "ex1_source", "x = ___"),
                CodeFragment::new("lessons", "ex1_solution", "x = 1"),
            ],
        );
        let value = describe(&Exercise::new(&catalog, ExerciseConfig::new("ex1")));
        assert_eq!(value["identifiers"]["test"], "ex1_test");
        assert_eq!(value["sourceFile"], "x = ___");
        assert_eq!(value["solutionFile"], "x = 1");
        assert!(value["testFile"].is_null());
        assert_eq!(value["controls"]["run"], true);
        assert_eq!(value["controls"]["submit"], false);
    }
}
