pub mod catalog;
pub mod check;
pub mod resolve;
pub mod submit;

use std::path::Path;

use anyhow::{Context, Result};
use kata::CatalogQuery;

pub fn load_catalog(path: &Path) -> Result<CatalogQuery> {
    CatalogQuery::from_path(path).context(format!("Failed to load catalog: {}", path.display()))
}
