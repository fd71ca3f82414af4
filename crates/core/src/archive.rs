//! Jar scanning for compiled classes.

use crate::naming;
use cljdex_api::ClassDescriptor;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::debug;
use zip::ZipArchive;

/// Enumerates the `.class` entries of a jar, one descriptor each, with the
/// jar's own path as the descriptor location.
///
/// A jar that cannot be opened or enumerated (corrupt, truncated,
/// unreadable) contributes an empty list; one bad archive on a large
/// classpath must not abort indexing of everything else. The file handle is
/// scoped to this call and released on every exit path.
pub fn scan_archive(path: &Path) -> Vec<ClassDescriptor> {
    match scan_entries(path) {
        Ok(found) => found,
        Err(e) => {
            debug!("Skipping unreadable archive {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

fn scan_entries(path: &Path) -> crate::Result<Vec<ClassDescriptor>> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file)?;

    let mut found = Vec::new();
    for i in 0..archive.len() {
        let entry = archive.by_index(i)?;
        if entry.is_dir() {
            continue;
        }
        // Entry names are already root-relative within the archive.
        let name = entry.name();
        if !name.ends_with(".class") {
            continue;
        }
        found.push(ClassDescriptor::new(
            path,
            PathBuf::from(name),
            naming::qualified_name(name),
        ));
    }
    Ok(found)
}
