use serde::{Deserialize, Serialize};

use crate::error::ExerciseError;

/// Site-wide settings shared by every exercise block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteMetadata {
    /// Program template used when a solution is submitted, see [`crate::template`].
    #[serde(rename = "testTemplate")]
    pub test_template: String,
    /// Execution backend settings handed to the executable cell.
    pub juniper: CellSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSettings {
    pub repo: String,
    pub branch: String,
    #[serde(rename = "kernelType")]
    pub kernel_type: String,
    pub lang: String,
    #[serde(default)]
    pub debug: bool,
}

/// Options of a single exercise block, as written in lesson markup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseConfig {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test: Option<String>,
    /// Only the exact string `"false"` disables Run and Submit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executable: Option<String>,
}

impl ExerciseConfig {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Build from `key="value"` attributes. Unknown attributes are ignored.
    pub fn from_attributes<K, V>(attributes: impl IntoIterator<Item = (K, V)>) -> Result<Self, ExerciseError>
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut id = None;
        let mut config = Self::default();
        for (key, value) in attributes {
            match key.as_ref() {
                "id" => id = Some(value.into()),
                "source" => config.source = Some(value.into()),
                "solution" => config.solution = Some(value.into()),
                "test" => config.test = Some(value.into()),
                "executable" => config.executable = Some(value.into()),
                _ => {}
            }
        }
        config.id = id.ok_or(ExerciseError::MissingId)?;
        Ok(config)
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn solution(mut self, solution: impl Into<String>) -> Self {
        self.solution = Some(solution.into());
        self
    }

    pub fn test(mut self, test: impl Into<String>) -> Self {
        self.test = Some(test.into());
        self
    }

    pub fn executable(mut self, executable: impl Into<String>) -> Self {
        self.executable = Some(executable.into());
        self
    }

    pub fn is_executable(&self) -> bool {
        self.executable.as_deref() != Some("false")
    }

    /// Explicit overrides win; empty overrides fall back to `{id}_source` etc.
    pub fn identifiers(&self) -> Identifiers {
        let pick = |explicit: &Option<String>, suffix: &str| match explicit.as_deref() {
            Some(explicit) if !explicit.is_empty() => explicit.to_owned(),
            _ => format!("{}_{suffix}", self.id),
        };
        Identifiers {
            source: pick(&self.source, "source"),
            solution: pick(&self.solution, "solution"),
            test: pick(&self.test, "test"),
        }
    }
}

/// Substrings matched against fragment identities.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifiers {
    pub source: String,
    pub solution: String,
    pub test: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_identifiers_derive_from_id() {
        let ids = ExerciseConfig::new("ex1").identifiers();
        assert_eq!(ids.source, "ex1_source");
        assert_eq!(ids.solution, "ex1_solution");
        assert_eq!(ids.test, "ex1_test");
    }

    #[test]
    fn overrides_replace_defaults() {
        let ids = ExerciseConfig::new("ex1")
            .source("exc_01_02")
            .solution("")
            .test("test_01_02")
            .identifiers();
        assert_eq!(ids.source, "exc_01_02");
        assert_eq!(ids.solution, "ex1_solution");
        assert_eq!(ids.test, "test_01_02");
    }

    #[test]
    fn only_literal_false_disables_execution() {
        assert!(ExerciseConfig::new("a").is_executable());
        assert!(ExerciseConfig::new("a").executable("true").is_executable());
        assert!(ExerciseConfig::new("a").executable("no").is_executable());
        assert!(ExerciseConfig::new("a").executable("False").is_executable());
        assert!(!ExerciseConfig::new("a").executable("false").is_executable());
    }

    #[test]
    fn from_attributes() {
        let config = ExerciseConfig::from_attributes([
            ("id", "01_03"),
            ("source", "exc_01_03"),
            ("executable", "false"),
            ("title", "ignored"),
        ])
        .unwrap();
        assert_eq!(config, ExerciseConfig::new("01_03").source("exc_01_03").executable("false"));

        let error = ExerciseConfig::from_attributes([("source", "exc_01_03")]).unwrap_err();
        assert!(matches!(error, ExerciseError::MissingId));
    }
}
