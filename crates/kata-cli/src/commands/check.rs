use std::fmt;
use std::path::Path;

use anyhow::Result;
use kata::{CatalogQuery, Exercise, ExerciseConfig, TestTemplate};

use super::load_catalog;

const SOURCE_SUFFIX: &str = "_source";

#[derive(Debug, PartialEq, Eq)]
pub enum Problem {
    MissingSolution { id: String, identifier: String },
    MissingTest { id: String, identifier: String },
    TemplatePlaceholder(&'static str),
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::MissingSolution { id, identifier } => {
                write!(f, "{id}: no fragment matches solution `{identifier}`, Show solution shows nothing")
            }
            Problem::MissingTest { id, identifier } => {
                write!(f, "{id}: no fragment matches test `{identifier}`, Submit is hidden")
            }
            Problem::TemplatePlaceholder(placeholder) => {
                write!(f, "testTemplate never mentions {placeholder}")
            }
        }
    }
}

pub fn run(catalog: &Path) -> Result<()> {
    let catalog = load_catalog(catalog)?;
    let ids = exercise_ids(&catalog);
    let problems = find_problems(&catalog);

    for problem in &problems {
        println!("{problem}");
    }
    if !problems.is_empty() {
        anyhow::bail!("{} problem(s) in {} exercise(s)", problems.len(), ids.len());
    }
    println!("{} exercise(s) OK", ids.len());
    Ok(())
}

/// Exercise ids implied by `<id>_source` fragment names, in catalog order.
pub fn exercise_ids(catalog: &CatalogQuery) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    for fragment in catalog.fragments() {
        if let Some(id) = fragment.name.strip_suffix(SOURCE_SUFFIX) {
            if !id.is_empty() && !ids.iter().any(|known| known == id) {
                ids.push(id.to_owned());
            }
        }
    }
    ids
}

pub fn find_problems(catalog: &CatalogQuery) -> Vec<Problem> {
    let mut problems: Vec<Problem> = TestTemplate::new(catalog.test_template())
        .missing_placeholders()
        .into_iter()
        .map(Problem::TemplatePlaceholder)
        .collect();

    for id in exercise_ids(catalog) {
        let exercise = Exercise::new(catalog, ExerciseConfig::new(id.clone()));
        let identifiers = exercise.identifiers();
        let files = exercise.files();
        if files.solution_file.is_none() {
            problems.push(Problem::MissingSolution {
                id: id.clone(),
                identifier: identifiers.solution.clone(),
            });
        }
        if files.test_file.is_none() {
            problems.push(Problem::MissingTest {
                id,
                identifier: identifiers.test.clone(),
            });
        }
    }
    problems
}
