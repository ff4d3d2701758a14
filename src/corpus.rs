//! Discovery of PEP source documents.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::config::AuthorOverride;
use crate::error::{Error, Result};
use crate::pep::Pep;

const SOURCE_SUFFIXES: [&str; 2] = ["rst", "txt"];

/// Whether `path` names a PEP source other than PEP 0 itself.
pub fn is_pep_source(path: &Path) -> bool {
    let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
        return false;
    };
    let suffix_ok = path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| SOURCE_SUFFIXES.contains(&ext));
    suffix_ok && stem.starts_with("pep-") && stem != "pep-0000"
}

/// PEP source files directly inside `source_dir`, in name order.
pub fn find_sources(source_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut sources = Vec::new();
    for entry in WalkDir::new(source_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if entry.file_type().is_file() && is_pep_source(entry.path()) {
            sources.push(entry.into_path());
        }
    }
    Ok(sources)
}

/// Parse every PEP in `source_dir`, sorted by number.
pub fn collect_peps(source_dir: &Path, overrides: &[AuthorOverride]) -> Result<Vec<Pep>> {
    let sources = find_sources(source_dir)?;
    debug!(
        "Found {} PEP sources in {}",
        sources.len(),
        source_dir.display()
    );

    let mut seen: HashMap<u32, PathBuf> = HashMap::new();
    let mut peps = Vec::with_capacity(sources.len());
    for path in sources {
        let pep = Pep::from_file(&path, overrides)?;
        if let Some(previous) = seen.insert(pep.number, path.clone()) {
            return Err(Error::pep(
                path.display().to_string(),
                Some(pep.number),
                format!("duplicate PEP number, also used by {}", previous.display()),
            ));
        }
        peps.push(pep);
    }
    peps.sort();
    Ok(peps)
}
