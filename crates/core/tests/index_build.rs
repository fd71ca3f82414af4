//! End-to-end index construction over a synthetic classpath: a class
//! directory, a source directory, a bootstrap jar, and a wildcard lib
//! directory, with broken inputs mixed in.

use cljdex_core::config::CLASSPATH_SEPARATOR;
use cljdex_core::{ClasspathConfig, build_index, scan};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    File::create(path).unwrap();
}

fn write_jar(path: &Path, entries: &[(&str, &[u8])]) {
    let file = File::create(path).unwrap();
    let mut jar = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();
    for (name, content) in entries {
        jar.start_file(*name, options).unwrap();
        jar.write_all(content).unwrap();
    }
    jar.finish().unwrap();
}

fn join(entries: &[&Path]) -> String {
    entries
        .iter()
        .map(|p| p.to_str().unwrap().to_string())
        .collect::<Vec<_>>()
        .join(&CLASSPATH_SEPARATOR.to_string())
}

#[test]
fn test_build_index_over_mixed_classpath() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();

    // Compiled classes in a directory, including a synthesized fn class.
    let classes = root.join("classes");
    touch(&classes.join("clojure/core.class"));
    touch(&classes.join("slam/hound/some_ns__init.class"));
    touch(&classes.join("slam/hound/core$scan__123.class"));

    // Source tree with namespaces at two nesting depths.
    let src = root.join("src");
    fs::create_dir_all(src.join("foo")).unwrap();
    fs::write(src.join("zz.clj"), "(ns foo.baz)").unwrap();
    fs::write(src.join("foo/bar.clj"), "(ns foo.bar)").unwrap();

    // Bootstrap jar: classes count, its source entry must not.
    let boot_jar = root.join("boot.jar");
    write_jar(
        &boot_jar,
        &[
            ("java/lang/Object.class", &[0xCA, 0xFE, 0xBA, 0xBE]),
            ("clojure/core.clj", b"(ns clojure.core)"),
        ],
    );

    // Wildcard lib directory with one good jar and one corrupt one.
    let lib = root.join("lib");
    fs::create_dir_all(&lib).unwrap();
    write_jar(
        &lib.join("dep.jar"),
        &[("dep/Util.class", &[0xCA, 0xFE, 0xBA, 0xBE])],
    );
    fs::write(lib.join("broken.jar"), b"not a jar at all").unwrap();

    let wildcard = lib.join("*");
    let config = ClasspathConfig::new(
        boot_jar.to_str().unwrap(),
        "",
        join(&[&classes, &src, &wildcard]),
    );

    let index = build_index(&config);

    let mut names: Vec<&str> = index
        .classes()
        .iter()
        .map(|c| c.qualified_name.as_str())
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "clojure.core",
            "dep.Util",
            "java.lang.Object",
            "slam.hound.some-ns",
        ]
    );

    // The synthetic class is visible to a raw location scan but filtered
    // from the assembled index.
    let raw: Vec<String> = scan::scan_location(&classes, &classes)
        .into_iter()
        .map(|c| c.qualified_name)
        .collect();
    assert!(raw.iter().any(|n| n.contains("core$scan__123")));
    assert!(!names.iter().any(|n| n.contains("scan")));

    // Namespaces: directory entries only, sorted per directory. The jar's
    // clojure/core.clj is deliberately absent.
    let namespaces: Vec<&str> = index.namespaces().iter().map(|n| n.as_str()).collect();
    assert_eq!(namespaces, vec!["foo.bar", "foo.baz"]);

    // Descriptor locations point at the containing root.
    let object = index.classes_named("Object");
    assert_eq!(object.len(), 1);
    assert_eq!(object[0].location, boot_jar);
    assert_eq!(object[0].relative, Path::new("java/lang/Object.class"));
}

#[test]
fn test_empty_config_builds_empty_index() {
    let index = build_index(&ClasspathConfig::default());
    assert!(index.is_empty());
}

#[test]
fn test_missing_entries_are_tolerated() {
    let temp = tempfile::tempdir().unwrap();
    let ghost_dir = temp.path().join("no-such-dir");
    let ghost_jar = temp.path().join("no-such.jar");
    let ghost_wildcard = temp.path().join("gone").join("*");

    let config = ClasspathConfig::new(
        ghost_jar.to_str().unwrap(),
        ghost_wildcard.to_str().unwrap(),
        ghost_dir.to_str().unwrap(),
    );

    let index = build_index(&config);
    assert!(index.is_empty());
}
