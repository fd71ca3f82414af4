//! Classpath scanning engine.
//!
//! Builds an in-memory index of every compiled class and every declared
//! namespace reachable from a set of classpath-style search paths, so a
//! name-resolution consumer can map short identifiers to fully-qualified
//! import candidates.
//!
//! The pipeline:
//! 1. Each classpath string is split into entries; wildcard entries are
//!    expanded to the jars they denote ([`expand`]).
//! 2. Every location is classified (directory, archive, class file) and
//!    scanned for compiled classes ([`scan`], [`archive`]).
//! 3. Qualified names are reconstructed from relative paths ([`naming`]).
//! 4. Source directories are walked for `ns` declarations ([`namespaces`],
//!    [`reader`]).
//!
//! Every failure mode (corrupt jar, unreadable directory, malformed source)
//! degrades to "contribute nothing from this input"; no single bad entry
//! aborts a scan.

pub mod archive;
pub mod config;
pub mod error;
pub mod expand;
pub mod index;
pub mod logging;
pub mod naming;
pub mod namespaces;
pub mod reader;
pub mod scan;

pub use cljdex_api::{ClassDescriptor, ClasspathIndex, NamespaceSymbol};
pub use config::ClasspathConfig;
pub use error::{CljdexError, Result};
pub use index::build_index;
