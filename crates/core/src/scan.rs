//! Entry classification and recursive directory scanning.

use crate::archive;
use crate::naming;
use cljdex_api::ClassDescriptor;
use std::fs;
use std::path::Path;
use tracing::debug;

/// What a classpath entry turned out to be on disk.
///
/// A closed set: anything unrecognized lands in `Other` and contributes
/// nothing, so a stray file on the classpath can never fail a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    Archive,
    ClassFile,
    Other,
}

impl EntryKind {
    pub fn of(path: &Path) -> Self {
        if path.is_dir() {
            return EntryKind::Directory;
        }
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        if name.ends_with(".jar") {
            EntryKind::Archive
        } else if name.ends_with(".class") {
            EntryKind::ClassFile
        } else {
            EntryKind::Other
        }
    }
}

/// Scans one classpath location for compiled classes, with `root` as the
/// `location` recorded on every produced descriptor. Callers pass the same
/// path for both when starting at a classpath root.
pub fn scan_location(root: &Path, path: &Path) -> Vec<ClassDescriptor> {
    match EntryKind::of(path) {
        EntryKind::Directory => scan_directory(root, path),
        EntryKind::Archive => archive::scan_archive(path),
        EntryKind::ClassFile => describe_class_file(root, path).into_iter().collect(),
        EntryKind::Other => Vec::new(),
    }
}

/// Depth-first walk over a directory's non-archive contents. Jars inside a
/// classpath directory are not themselves on the classpath, so they are
/// skipped rather than scanned. An unreadable subdirectory is skipped and
/// the walk continues, consistent with the corrupt-archive policy.
fn scan_directory(root: &Path, dir: &Path) -> Vec<ClassDescriptor> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("Skipping unreadable directory {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut found = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if EntryKind::of(&path) == EntryKind::Archive {
            continue;
        }
        found.extend(scan_location(root, &path));
    }
    found
}

/// Builds a descriptor for one class file, or nothing if the file is not a
/// true descendant of `root`. The non-descendant case is a structural skip,
/// not a failure, and is deliberately unlogged.
fn describe_class_file(root: &Path, path: &Path) -> Option<ClassDescriptor> {
    let relative = path.strip_prefix(root).ok()?;
    if relative.as_os_str().is_empty() {
        return None;
    }
    let qualified = naming::qualified_name(&relative.to_string_lossy());
    Some(ClassDescriptor::new(root, relative, qualified))
}
