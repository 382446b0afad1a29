//! Build the catalog query JSON from a directory of exercise files.
//!
//! Every file becomes one fragment: `dir` is its directory (starting at the
//! scanned directory's own name), `name` the file name without extension and
//! `code` the file contents. Files are visited in path order so the catalog
//! order, and with it first-match resolution, is stable.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use kata::{CatalogQuery, CodeFragment, SiteMetadata};
use walkdir::WalkDir;

pub fn run(dir: &Path, site: &Path) -> Result<()> {
    let site_json = fs::read_to_string(site).context(format!("Failed to read site metadata: {}", site.display()))?;
    let site_metadata: SiteMetadata =
        serde_json::from_str(&site_json).context(format!("Failed to parse site metadata: {}", site.display()))?;

    let fragments = collect_fragments(dir)?;
    log::info!("Collected {} fragments from {}", fragments.len(), dir.display());

    let query = CatalogQuery::new(site_metadata, fragments);
    println!("{}", query.to_json_pretty()?);
    Ok(())
}

pub fn collect_fragments(root: &Path) -> Result<Vec<CodeFragment>> {
    let base = root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut fragments = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.context(format!("Failed to walk {}", root.display()))?;
        if !entry.file_type().is_file() || entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        let path = entry.path();
        let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
            log::warn!("Skipping {}: file name is not valid UTF-8", path.display());
            continue;
        };

        let relative = path
            .parent()
            .and_then(|parent| parent.strip_prefix(root).ok())
            .map(|relative| {
                relative
                    .components()
                    .map(|component| component.as_os_str().to_string_lossy().into_owned())
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();
        let dir = std::iter::once(base.clone())
            .filter(|base| !base.is_empty())
            .chain(relative)
            .collect::<Vec<_>>()
            .join("/");

        let code = fs::read_to_string(path).context(format!("Failed to read {}", path.display()))?;
        fragments.push(CodeFragment::new(dir, name, code));
    }
    Ok(fragments)
}
