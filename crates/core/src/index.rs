//! Index assembly over the full classpath configuration.

use crate::config::{self, ClasspathConfig};
use crate::scan::{self, EntryKind};
use crate::{expand, naming, namespaces};
use cljdex_api::{ClassDescriptor, ClasspathIndex, NamespaceSymbol};
use std::time::Instant;
use tracing::{debug, info};

/// Builds the classpath index in one eager, single-threaded pass.
///
/// Classes come from all three classpath strings (bootstrap, extension,
/// application), each entry wildcard-expanded and scanned with the
/// resulting location as the descriptor root; synthesized function classes
/// are filtered once over the combined list. Namespaces come from the
/// directory entries of the application classpath only.
///
/// The returned value is immutable; callers hold it for the process
/// lifetime and pass it by reference to name-resolution consumers.
pub fn build_index(config: &ClasspathConfig) -> ClasspathIndex {
    let start = Instant::now();

    let mut classes: Vec<ClassDescriptor> = Vec::new();
    let mut scanned = 0usize;
    let mut skipped = 0usize;
    for source in [&config.boot, &config.ext, &config.classpath] {
        for entry in config::split_entries(source) {
            for location in expand::expand_entry(entry) {
                if EntryKind::of(&location) == EntryKind::Other {
                    debug!(
                        "Skipping unrecognized classpath location {}",
                        location.display()
                    );
                    skipped += 1;
                    continue;
                }
                debug!("Scanning classpath location {}", location.display());
                scanned += 1;
                classes.extend(scan::scan_location(&location, &location));
            }
        }
    }
    classes.retain(|c| !naming::is_synthetic(&c.relative.to_string_lossy()));

    let found_namespaces = scan_namespaces(config);

    info!(
        "Classpath scan complete: {} locations scanned ({} skipped), {} classes, {} namespaces in {:?}",
        scanned,
        skipped,
        classes.len(),
        found_namespaces.len(),
        start.elapsed()
    );

    ClasspathIndex::new(classes, found_namespaces)
}

/// Namespace discovery runs over a single classpath source, not the
/// three-string union, and only over its directory entries. Per-directory
/// results arrive sorted and are concatenated without deduplication.
fn scan_namespaces(config: &ClasspathConfig) -> Vec<NamespaceSymbol> {
    let mut found = Vec::new();
    for entry in config::split_entries(&config.classpath) {
        for location in expand::expand_entry(entry) {
            if EntryKind::of(&location) == EntryKind::Directory {
                found.extend(namespaces::namespaces_in_dir(&location));
            }
        }
    }
    found
}
