//! Locates an exercise's source, solution and test text in the catalog.
//!
//! Identifiers are matched as substrings of `dir/name`, so `ex1_source`
//! finds `lessons/ex1_source` as well as `lessons/ex1_source_v2`. When more
//! than one fragment matches, the first one in catalog order wins and the
//! later ones are reported with `log::warn!`.

use crate::catalog::CodeFragment;
use crate::config::Identifiers;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedFiles {
    pub source_file: Option<String>,
    pub solution_file: Option<String>,
    pub test_file: Option<String>,
}

impl ResolvedFiles {
    /// Text shown in the cell: the solution once revealed, the source otherwise.
    pub fn displayed(&self, show_solution: bool) -> Option<&str> {
        if show_solution {
            self.solution_file.as_deref()
        } else {
            self.source_file.as_deref()
        }
    }
}

pub fn resolve<'a>(fragments: impl IntoIterator<Item = &'a CodeFragment>, ids: &Identifiers) -> ResolvedFiles {
    let mut files = ResolvedFiles::default();
    for fragment in fragments {
        let identity = fragment.identity();
        claim(&mut files.source_file, &ids.source, &identity, fragment);
        claim(&mut files.solution_file, &ids.solution, &identity, fragment);
        claim(&mut files.test_file, &ids.test, &identity, fragment);
    }
    files
}

fn claim(slot: &mut Option<String>, id: &str, identity: &str, fragment: &CodeFragment) {
    if !identity.contains(id) {
        return;
    }
    match slot {
        None => *slot = Some(fragment.code.clone()),
        Some(_) => log::warn!("`{identity}` also matches `{id}`, keeping the first match"),
    }
}
