//! Scaffolding through the real adapters.

use std::path::{Path, PathBuf};

use scaffkit_adapters::{LocalFilesystem, MemoryFilesystem};
use scaffkit_core::{
    application::{ApplicationError, ScaffoldService},
    domain::{DomainValidator, TargetDirectory, TemplateRegistry},
    error::ScaffoldError,
};

fn request(name: &str, kind: &str) -> scaffkit_core::domain::ScaffoldRequest {
    DomainValidator::validate_request(name, kind, None).unwrap()
}

#[test]
fn local_scaffold_writes_node_lib_tree() {
    let temp = tempfile::tempdir().unwrap();
    let req = request("widgets", "node-lib");
    let target = TargetDirectory::new(temp.path(), "packages", req.name());

    let service = ScaffoldService::new(TemplateRegistry::default(), Box::new(LocalFilesystem::new()));
    let outcome = service.scaffold(&req, &target).unwrap();

    let root = temp.path().join("packages/widgets");
    for file in [
        ".gitignore",
        "README.md",
        "package.json",
        "tsconfig.json",
        "eslint.config.js",
        "src/index.ts",
    ] {
        assert!(root.join(file).is_file(), "missing {file}");
    }
    assert_eq!(outcome.written.len(), 6);
    assert_eq!(
        std::fs::read_to_string(root.join("src/index.ts")).unwrap(),
        "export {};\n"
    );
}

#[test]
fn second_scaffold_leaves_first_untouched() {
    let temp = tempfile::tempdir().unwrap();
    let req = request("widgets", "config-only");
    let target = TargetDirectory::new(temp.path(), "packages", req.name());
    let service = ScaffoldService::new(TemplateRegistry::default(), Box::new(LocalFilesystem::new()));

    service.scaffold(&req, &target).unwrap();
    let readme = temp.path().join("packages/widgets/README.md");
    std::fs::write(&readme, "edited\n").unwrap();

    let err = service
        .scaffold(&request("widgets", "node-lib"), &target)
        .unwrap_err();
    assert_eq!(err.to_string(), "Target already exists: packages/widgets");
    assert_eq!(std::fs::read_to_string(&readme).unwrap(), "edited\n");
    assert!(!temp.path().join("packages/widgets/tsconfig.json").exists());
}

#[test]
fn failed_write_keeps_earlier_files() {
    let root = PathBuf::from("/repo/packages/widgets");
    let fs = MemoryFilesystem::new()
        .with_dir("/repo")
        .fail_writes_to(root.join("package.json"));
    let req = request("widgets", "node-lib");
    let target = TargetDirectory::new("/repo", "packages", req.name());

    let service = ScaffoldService::new(TemplateRegistry::default(), Box::new(fs.clone()));
    let err = service.scaffold(&req, &target).unwrap_err();

    match &err {
        ScaffoldError::Application(app @ ApplicationError::Filesystem { written, .. }) => {
            assert_eq!(app.io_kind(), Some(std::io::ErrorKind::PermissionDenied));
            assert_eq!(*written, 3);
        }
        other => panic!("unexpected error: {other:?}"),
    }

    // Writes go in path order: .gitignore, README.md, eslint.config.js,
    // then package.json fails.
    assert_eq!(
        fs.list_files(),
        [
            root.join(".gitignore"),
            root.join("README.md"),
            root.join("eslint.config.js"),
        ]
    );
    assert!(fs.is_dir(Path::new("/repo/packages/widgets")));
}
