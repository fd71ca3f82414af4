//! Qualified-name reconstruction from compiled-class paths.

use once_cell::sync::Lazy;
use regex::Regex;

const CLASS_EXT: &str = ".class";

/// Marks a class file as a namespace's top-level initializer rather than an
/// ordinary class.
const INIT_SUFFIX: &str = "__init.class";

/// Compiler-generated function-implementation classes, e.g.
/// `foo$bar__123.class`. Valid class files, but never independently
/// importable.
static SYNTHETIC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$.*__\d+\.class$").unwrap());

/// Reconstructs the dotted qualified name from a path relative to its
/// classpath root.
///
/// Init classes get the reverse of the munging namespaces use to stay legal
/// as binary names: the `__init.class` suffix is stripped and underscores
/// turn back into hyphens. Ordinary classes only lose the extension. Path
/// separators become dots either way.
pub fn qualified_name(relative: &str) -> String {
    let stem = if let Some(stripped) = relative.strip_suffix(INIT_SUFFIX) {
        stripped.replace('_', "-")
    } else {
        relative
            .strip_suffix(CLASS_EXT)
            .unwrap_or(relative)
            .to_string()
    };
    stem.replace(['/', '\\'], ".")
}

/// Whether a relative path names a compiler-synthesized function class.
/// Checked once over the combined descriptor list at index-assembly time.
pub fn is_synthetic(relative: &str) -> bool {
    SYNTHETIC_RE.is_match(relative)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_class_name() {
        assert_eq!(qualified_name("clojure/core.class"), "clojure.core");
        assert_eq!(
            qualified_name("clojure/lang/RT.class"),
            "clojure.lang.RT"
        );
        assert_eq!(qualified_name("Top.class"), "Top");
    }

    #[test]
    fn test_init_class_demunges_underscores() {
        assert_eq!(
            qualified_name("slam/hound/some_ns__init.class"),
            "slam.hound.some-ns"
        );
    }

    #[test]
    fn test_degenerate_init_class() {
        // No directory component, nothing left after the suffix.
        assert_eq!(qualified_name("__init.class"), "");
    }

    #[test]
    fn test_backslash_separators() {
        assert_eq!(qualified_name(r"clojure\core.class"), "clojure.core");
    }

    #[test]
    fn test_synthetic_detection() {
        assert!(is_synthetic("foo$bar__123.class"));
        assert!(is_synthetic("slam/hound/core$scan__4821.class"));
        assert!(!is_synthetic("foo/bar.class"));
        assert!(!is_synthetic("slam/hound/some_ns__init.class"));
        // Inner classes without the trailing digit run are ordinary.
        assert!(!is_synthetic("java/util/Map$Entry.class"));
    }
}
