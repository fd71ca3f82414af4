use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A compiled class discovered on the classpath.
///
/// `relative` is always a true descendant path under `location` (a directory
/// root or an archive file), and `qualified_name` is derived from it once at
/// scan time. Descriptors are immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassDescriptor {
    /// Directory or archive the class was found in.
    pub location: PathBuf,
    /// Path of the `.class` file relative to `location`.
    pub relative: PathBuf,
    /// Dotted fully-qualified name, e.g. `clojure.lang.RT`.
    pub qualified_name: String,
}

impl ClassDescriptor {
    pub fn new(
        location: impl Into<PathBuf>,
        relative: impl Into<PathBuf>,
        qualified_name: impl Into<String>,
    ) -> Self {
        Self {
            location: location.into(),
            relative: relative.into(),
            qualified_name: qualified_name.into(),
        }
    }

    /// Last dot-separated segment of the qualified name.
    pub fn simple_name(&self) -> &str {
        self.qualified_name
            .rsplit('.')
            .next()
            .unwrap_or(&self.qualified_name)
    }
}

/// A namespace name recovered from a source file's `ns` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NamespaceSymbol(String);

impl NamespaceSymbol {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NamespaceSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NamespaceSymbol {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// The assembled classpath index: every class and every declared namespace
/// reachable from the configured search paths.
///
/// Built once at process start and read-only afterwards. Class order follows
/// scan order and must not be relied upon; namespaces are sorted per source
/// directory and concatenated across directories.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClasspathIndex {
    classes: Vec<ClassDescriptor>,
    namespaces: Vec<NamespaceSymbol>,
}

impl ClasspathIndex {
    pub fn new(classes: Vec<ClassDescriptor>, namespaces: Vec<NamespaceSymbol>) -> Self {
        Self {
            classes,
            namespaces,
        }
    }

    pub fn classes(&self) -> &[ClassDescriptor] {
        &self.classes
    }

    pub fn namespaces(&self) -> &[NamespaceSymbol] {
        &self.namespaces
    }

    /// All classes whose simple name matches `simple`, in scan order.
    /// Ranking/selection among candidates is the consumer's concern.
    pub fn classes_named(&self, simple: &str) -> Vec<&ClassDescriptor> {
        self.classes
            .iter()
            .filter(|c| c.simple_name() == simple)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.namespaces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_name() {
        let desc = ClassDescriptor::new("/cp", "clojure/lang/RT.class", "clojure.lang.RT");
        assert_eq!(desc.simple_name(), "RT");

        let bare = ClassDescriptor::new("/cp", "Top.class", "Top");
        assert_eq!(bare.simple_name(), "Top");
    }

    #[test]
    fn test_classes_named() {
        let index = ClasspathIndex::new(
            vec![
                ClassDescriptor::new("/a", "java/util/Date.class", "java.util.Date"),
                ClassDescriptor::new("/b", "java/sql/Date.class", "java.sql.Date"),
                ClassDescriptor::new("/a", "java/util/List.class", "java.util.List"),
            ],
            vec![],
        );

        let dates = index.classes_named("Date");
        assert_eq!(dates.len(), 2);
        assert_eq!(dates[0].qualified_name, "java.util.Date");
        assert_eq!(dates[1].qualified_name, "java.sql.Date");
        assert!(index.classes_named("Missing").is_empty());
    }
}
