//! Namespace discovery from source files.
//!
//! Two variants share the form scanner in [`crate::reader`]: a recursive
//! directory walk and a jar-entry walk. Only the directory variant feeds
//! the assembled index; class scanning covers directories and jars, but
//! namespace scanning deliberately stops at directories.

use crate::reader;
use cljdex_api::NamespaceSymbol;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;
use zip::ZipArchive;

const SOURCE_EXT: &str = "clj";

/// Recursively collects every namespace declared by a `.clj` file under
/// `dir`, sorted lexicographically. Unreadable entries are skipped.
pub fn namespaces_in_dir(dir: &Path) -> Vec<NamespaceSymbol> {
    let mut found: Vec<NamespaceSymbol> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().and_then(|x| x.to_str()) == Some(SOURCE_EXT))
        .filter_map(|e| {
            let path = e.path();
            let source = match fs::read_to_string(path) {
                Ok(source) => source,
                Err(err) => {
                    debug!("Skipping unreadable source {}: {}", path.display(), err);
                    return None;
                }
            };
            reader::declared_namespace(&source, &path.display().to_string())
        })
        .map(NamespaceSymbol::new)
        .collect();
    found.sort();
    found
}

/// Collects namespaces declared by `.clj` entries inside a jar, unsorted.
/// A jar that cannot be opened contributes nothing.
pub fn namespaces_in_jar(path: &Path) -> Vec<NamespaceSymbol> {
    match scan_jar_sources(path) {
        Ok(found) => found,
        Err(e) => {
            debug!("Skipping unreadable archive {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

fn scan_jar_sources(path: &Path) -> crate::Result<Vec<NamespaceSymbol>> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file)?;

    let mut found = Vec::new();
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        if entry.is_dir() || !entry.name().ends_with(".clj") {
            continue;
        }
        let origin = format!("{}:{}", path.display(), entry.name());
        let mut source = String::new();
        if let Err(err) = entry.read_to_string(&mut source) {
            debug!("Skipping unreadable entry {}: {}", origin, err);
            continue;
        }
        if let Some(ns) = reader::declared_namespace(&source, &origin) {
            found.push(NamespaceSymbol::new(ns));
        }
    }
    Ok(found)
}
