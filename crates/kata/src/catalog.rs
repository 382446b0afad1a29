//! The catalog query result: site metadata plus every code fragment the
//! site knows about.
//!
//! The JSON shape mirrors the site's data layer and must stay exactly as it
//! is, the resolver and the code block both read it:
//!
//! ```json
//! {
//!   "site": { "siteMetadata": { "testTemplate": "...", "juniper": { ... } } },
//!   "allCode": { "edges": [ { "node": { "dir": "...", "name": "...", "code": "..." } } ] }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::{CellSettings, SiteMetadata};
use crate::error::ExerciseError;

/// One labeled unit of stored code text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeFragment {
    pub dir: String,
    pub name: String,
    pub code: String,
}

impl CodeFragment {
    pub fn new(dir: impl Into<String>, name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            name: name.into(),
            code: code.into(),
        }
    }

    /// `dir + "/" + name`, the string exercise identifiers are matched against.
    pub fn identity(&self) -> String {
        format!("{}/{}", self.dir, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogQuery {
    pub site: Site,
    #[serde(rename = "allCode")]
    pub all_code: AllCode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    #[serde(rename = "siteMetadata")]
    pub site_metadata: SiteMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllCode {
    pub edges: Vec<Edge>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub node: CodeFragment,
}

impl CatalogQuery {
    pub fn new(site_metadata: SiteMetadata, fragments: impl IntoIterator<Item = CodeFragment>) -> Self {
        Self {
            site: Site { site_metadata },
            all_code: AllCode {
                edges: fragments.into_iter().map(|node| Edge { node }).collect(),
            },
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ExerciseError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ExerciseError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String, ExerciseError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Fragments in catalog order.
    pub fn fragments(&self) -> impl Iterator<Item = &CodeFragment> {
        self.all_code.edges.iter().map(|edge| &edge.node)
    }

    pub fn site_metadata(&self) -> &SiteMetadata {
        &self.site.site_metadata
    }

    pub fn test_template(&self) -> &str {
        &self.site.site_metadata.test_template
    }

    pub fn cell_settings(&self) -> &CellSettings {
        &self.site.site_metadata.juniper
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUERY_JSON: &str = r#"{
        "site": {
            "siteMetadata": {
                "testTemplate": "${solution}\n${test}",
                "juniper": {
                    "repo": "ines/spacy-course",
                    "branch": "binder",
                    "kernelType": "python3",
                    "lang": "python",
                    "debug": false
                }
            }
        },
        "allCode": {
            "edges": [
                { "node": { "dir": "/site/exercises/en", "name": "exc_01_02_01", "code": "import spacy" } },
                { "node": { "dir": "/site/exercises/en", "name": "solution_01_02_01", "code": "import spacy\nnlp = spacy.blank(\"en\")" } }
            ]
        }
    }"#;

    #[test]
    fn parses_query_shape() {
        let query = CatalogQuery::from_json(QUERY_JSON).unwrap();
        assert_eq!(query.test_template(), "${solution}\n${test}");
        assert_eq!(query.cell_settings().kernel_type, "python3");
        assert_eq!(query.cell_settings().repo, "ines/spacy-course");

        let identities: Vec<_> = query.fragments().map(CodeFragment::identity).collect();
        assert_eq!(
            identities,
            ["/site/exercises/en/exc_01_02_01", "/site/exercises/en/solution_01_02_01"]
        );
    }

    #[test]
    fn serializes_with_query_field_names() {
        let query = CatalogQuery::from_json(QUERY_JSON).unwrap();
        let value: serde_json::Value = serde_json::from_str(&query.to_json_pretty().unwrap()).unwrap();
        assert!(value["site"]["siteMetadata"]["testTemplate"].is_string());
        assert_eq!(value["site"]["siteMetadata"]["juniper"]["kernelType"], "python3");
        assert_eq!(value["allCode"]["edges"][1]["node"]["name"], "solution_01_02_01");
    }

    #[test]
    fn debug_flag_defaults_to_false() {
        let json = QUERY_JSON.replace("\"debug\": false", "\"notes\": null");
        let query = CatalogQuery::from_json(&json).unwrap();
        assert!(!query.cell_settings().debug);
    }

    #[test]
    fn rejects_malformed_json() {
        let error = CatalogQuery::from_json("{ \"site\": {} }").unwrap_err();
        assert!(matches!(error, ExerciseError::Json(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let error = CatalogQuery::from_path("does/not/exist/catalog.json").unwrap_err();
        assert!(matches!(error, ExerciseError::Io(_)));
    }
}
