//! Integration tests exporting generated primitives and wiki stubs.

use neogen_codegen::{PrimitiveGenerator, WikiGenerator, discover};
use neogen_core::{Catalog, GeneratorKind, PackageName, ProjectConfig};
use neogen_files::{ExportOptions, export_to_filesystem};
use std::fs;
use tempfile::TempDir;

fn generator() -> PrimitiveGenerator<'static> {
    PrimitiveGenerator::new(PackageName::new("net.ericaro.neoitertools").unwrap()).unwrap()
}

#[test]
fn test_export_iterators_into_project_layout() {
    let temp = TempDir::new().unwrap();
    let config = ProjectConfig::default();
    let output = config.output_dir(temp.path(), GeneratorKind::Iterator).unwrap();

    let emission = generator()
        .generate(&Catalog::builtin(), GeneratorKind::Iterator, None)
        .unwrap();
    let written = export_to_filesystem(&emission.code, &output, &ExportOptions::default()).unwrap();

    assert_eq!(written.len(), 8);
    let integer = temp
        .path()
        .join("src/main/java/net/ericaro/neoitertools/primitives/IntegerIterator.java");
    assert!(integer.is_file());
    assert!(
        fs::read_to_string(integer)
            .unwrap()
            .contains("public class IntegerIterator")
    );
}

#[test]
fn test_reexport_is_byte_identical() {
    let temp = TempDir::new().unwrap();
    let emission = generator()
        .generate(&Catalog::builtin(), GeneratorKind::Generator, None)
        .unwrap();

    let first = export_to_filesystem(&emission.code, temp.path(), &ExportOptions::default()).unwrap();
    let before: Vec<Vec<u8>> = first.iter().map(|p| fs::read(p).unwrap()).collect();

    let second = export_to_filesystem(&emission.code, temp.path(), &ExportOptions::default()).unwrap();
    let after: Vec<Vec<u8>> = second.iter().map(|p| fs::read(p).unwrap()).collect();

    assert_eq!(first, second);
    assert_eq!(before, after);
}

#[test]
fn test_wiki_stubs_exported_flat() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("src");
    fs::create_dir_all(source.join("a/b")).unwrap();
    fs::write(source.join("a/b/Foo.java"), "").unwrap();
    let target = temp.path().join("wiki");

    let entries = discover(&source, "java").unwrap();
    let code = WikiGenerator::new().unwrap().generate(&entries, "wiki").unwrap();
    export_to_filesystem(&code, &target, &ExportOptions::default()).unwrap();

    let stub = fs::read_to_string(target.join("Foo.wiki")).unwrap();
    assert!(stub.contains("Foo"));
    assert!(stub.contains("a.b.Foo"));
}
