//! Wildcard classpath-entry expansion.

use crate::scan::EntryKind;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const WILDCARD: &str = "*";

/// Expands a single classpath entry.
///
/// An entry whose final segment is `*` denotes every jar directly inside
/// the parent directory (one level, non-recursive). Anything else passes
/// through unchanged. A missing or unreadable parent yields no expansion;
/// absence of matches is a valid, silent result.
pub fn expand_entry(entry: &str) -> Vec<PathBuf> {
    let path = Path::new(entry);
    if path.file_name().and_then(|n| n.to_str()) != Some(WILDCARD) {
        return vec![path.to_path_buf()];
    }

    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    let entries = match fs::read_dir(parent) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("Cannot expand wildcard {}: {}", entry, e);
            return Vec::new();
        }
    };

    entries
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_file() && EntryKind::of(p) == EntryKind::Archive)
        .collect()
}
