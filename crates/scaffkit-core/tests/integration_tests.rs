//! Integration tests for scaffkit-core's public API.

use scaffkit_core::prelude::*;
use scaffkit_core::domain::{DomainValidator, is_valid_identifier, title_case};

fn generate(name: &str, kind: &str) -> GeneratedFileSet {
    let request = DomainValidator::validate_request(name, kind, None).unwrap();
    TemplateRegistry::default().generate(&request).unwrap()
}

#[test]
fn every_kind_produces_manifest_readme_and_gitignore() {
    for kind in PackageKind::ALL {
        let files = generate("shared", kind.as_str());
        for path in [".gitignore", "README.md", "package.json"] {
            assert!(files.contains(path), "{kind} missing {path}");
        }
    }
}

#[test]
fn gitignore_dist_tracks_build_step() {
    assert!(generate("a", "node-lib").get(".gitignore").unwrap().contains("dist/"));
    assert!(generate("a", "react-library").get(".gitignore").unwrap().contains("dist/"));
    assert!(!generate("a", "config-only").get(".gitignore").unwrap().contains("dist/"));
}

#[test]
fn manifest_name_is_scoped_and_matches_readme() {
    let files = generate("my-cool-thing", "node-lib");
    let manifest: serde_json::Value =
        serde_json::from_str(files.get("package.json").unwrap()).unwrap();
    let readme = files.get("README.md").unwrap();

    assert_eq!(manifest["name"], "@repo/my-cool-thing");
    assert!(readme.starts_with("# My Cool Thing\n"));
    assert!(readme.contains("`@repo/my-cool-thing`"));
}

#[test]
fn manifest_exports_point_inside_tsconfig_out_dir() {
    let files = generate("logger", "node-lib");
    let manifest: serde_json::Value =
        serde_json::from_str(files.get("package.json").unwrap()).unwrap();
    let tsconfig: serde_json::Value =
        serde_json::from_str(files.get("tsconfig.json").unwrap()).unwrap();

    let out_dir = tsconfig["compilerOptions"]["outDir"].as_str().unwrap();
    let import = manifest["exports"]["."]["import"].as_str().unwrap();
    assert!(import.starts_with(&format!("./{out_dir}/")));
    assert!(files.contains(&format!(
        "{}/index.ts",
        tsconfig["compilerOptions"]["rootDir"].as_str().unwrap()
    )));
}

#[test]
fn identical_requests_are_byte_identical() {
    let a = generate("ui", "react-library");
    let b = generate("ui", "react-library");
    let a: Vec<_> = a.iter().collect();
    let b: Vec<_> = b.iter().collect();
    assert_eq!(a, b);
}

#[test]
fn naming_grammar_examples() {
    assert!(is_valid_identifier("widgets"));
    assert!(!is_valid_identifier("bad_name"));
    assert_eq!(title_case("my-cool-thing"), "My Cool Thing");
}
