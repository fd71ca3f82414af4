//! Classpath configuration.
//!
//! The three classpath strings mirror the JVM's layering: bootstrap
//! classes, extension directories, and the application classpath. They are
//! opaque separator-delimited text; no validation happens here beyond
//! splitting.

use std::env;

/// Separator between classpath entries, `;` on Windows and `:` elsewhere.
pub const CLASSPATH_SEPARATOR: char = if cfg!(windows) { ';' } else { ':' };

#[derive(Debug, Clone, Default)]
pub struct ClasspathConfig {
    /// Platform bootstrap classpath.
    pub boot: String,
    /// Platform extension directories.
    pub ext: String,
    /// Application classpath. Namespace discovery only looks here.
    pub classpath: String,
}

impl ClasspathConfig {
    pub fn new(
        boot: impl Into<String>,
        ext: impl Into<String>,
        classpath: impl Into<String>,
    ) -> Self {
        Self {
            boot: boot.into(),
            ext: ext.into(),
            classpath: classpath.into(),
        }
    }

    /// Reads the classpath strings from the process environment. Unset
    /// variables become empty strings, which split into no entries.
    pub fn from_env() -> Self {
        Self {
            boot: env::var("BOOT_CLASSPATH").unwrap_or_default(),
            ext: env::var("EXT_CLASSPATH").unwrap_or_default(),
            classpath: env::var("CLASSPATH").unwrap_or_default(),
        }
    }
}

/// Splits a classpath string into entries, dropping empty segments.
pub fn split_entries(path: &str) -> Vec<&str> {
    path.split(CLASSPATH_SEPARATOR)
        .filter(|s| !s.is_empty())
        .collect()
}
