//! Shared data model for the classpath index.
//!
//! This crate defines the types exchanged between the scanning engine
//! (`cljdex-core`) and consumers that resolve short class/namespace names
//! to fully-qualified candidates for import insertion.

pub mod model;

pub use model::{ClassDescriptor, ClasspathIndex, NamespaceSymbol};
