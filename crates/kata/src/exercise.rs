use crate::catalog::CatalogQuery;
use crate::config::{CellSettings, ExerciseConfig, Identifiers};
use crate::resolver::{ResolvedFiles, resolve};
use crate::state::ExerciseState;
use crate::template::TestTemplate;

/// Which cell actions an exercise exposes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellControls {
    pub run: bool,
    pub submit: bool,
}

/// Everything an exercise block needs from the catalog, resolved once.
#[derive(Debug, Clone)]
pub struct Exercise {
    config: ExerciseConfig,
    identifiers: Identifiers,
    files: ResolvedFiles,
    template: TestTemplate,
    cell_settings: CellSettings,
}

impl Exercise {
    pub fn new(catalog: &CatalogQuery, config: ExerciseConfig) -> Self {
        let identifiers = config.identifiers();
        let files = resolve(catalog.fragments(), &identifiers);
        if files.source_file.is_none() {
            log::debug!("Exercise `{}` has no fragment matching `{}`", config.id, identifiers.source);
        }
        Self {
            config,
            identifiers,
            files,
            template: TestTemplate::new(catalog.test_template()),
            cell_settings: catalog.cell_settings().clone(),
        }
    }

    pub fn id(&self) -> &str {
        &self.config.id
    }

    pub fn config(&self) -> &ExerciseConfig {
        &self.config
    }

    pub fn identifiers(&self) -> &Identifiers {
        &self.identifiers
    }

    pub fn files(&self) -> &ResolvedFiles {
        &self.files
    }

    pub fn cell_settings(&self) -> &CellSettings {
        &self.cell_settings
    }

    pub fn displayed_code(&self, state: &ExerciseState) -> Option<&str> {
        self.files.displayed(state.is_solution_shown())
    }

    pub fn controls(&self) -> CellControls {
        let run = self.config.is_executable();
        CellControls {
            run,
            submit: run && self.files.test_file.is_some(),
        }
    }

    /// The test program for `editor_content`, if the exercise has a test.
    pub fn submission(&self, editor_content: &str) -> Option<String> {
        let test_file = self.files.test_file.as_deref()?;
        Some(self.template.assemble(test_file, editor_content))
    }
}
