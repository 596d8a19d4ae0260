//! `package.json` generators.
//!
//! Key order follows the usual npm layout (identity, module settings,
//! exports, scripts, dependencies); `serde_json`'s `preserve_order`
//! feature keeps it stable.

use serde_json::{Map, Value, json};

use crate::domain::{
    conventions::WorkspaceConventions, request::ScaffoldRequest, value_objects::PackageKind,
};

pub(super) fn source_package(
    request: &ScaffoldRequest,
    conventions: &WorkspaceConventions,
) -> String {
    let flavour = match request.kind() {
        PackageKind::ReactLibrary => "React",
        PackageKind::NodeLib | PackageKind::ConfigOnly => "Node",
    };
    let description = request
        .description()
        .map(str::to_owned)
        .unwrap_or_else(|| format!("Shared {flavour} package for the monorepo."));

    let mut manifest = header(request, conventions, description);
    manifest.insert(
        "exports".into(),
        json!({
            ".": {
                "import": "./dist/index.js",
                "types": "./dist/index.d.ts",
            }
        }),
    );
    manifest.insert("types".into(), json!("./dist/index.d.ts"));
    manifest.insert("files".into(), json!(["dist", "README.md", "LICENSE"]));
    manifest.insert(
        "scripts".into(),
        json!({
            "build": "tsc -p tsconfig.json",
            "dev": "tsc -w -p tsconfig.json",
            "lint": "eslint . --max-warnings 0",
            "check-types": "tsc -p tsconfig.json --noEmit",
        }),
    );
    manifest.insert("dependencies".into(), json!({}));

    let mut dev_dependencies = Map::new();
    dev_dependencies.insert(conventions.eslint_config_package(), json!("workspace:*"));
    dev_dependencies.insert(conventions.typescript_config_package(), json!("workspace:*"));
    for tool in ["@types/node", "eslint", "typescript"] {
        dev_dependencies.insert(tool.into(), json!("catalog:"));
    }
    manifest.insert("devDependencies".into(), Value::Object(dev_dependencies));

    finish(manifest)
}

pub(super) fn config_only(request: &ScaffoldRequest, conventions: &WorkspaceConventions) -> String {
    let description = request
        .description()
        .unwrap_or("Shared config-only package for the monorepo.")
        .to_owned();

    let mut manifest = header(request, conventions, description);
    manifest.insert("exports".into(), json!({ ".": "./index.js" }));
    manifest.insert("files".into(), json!(["index.js", "README.md", "LICENSE"]));

    finish(manifest)
}

fn header(
    request: &ScaffoldRequest,
    conventions: &WorkspaceConventions,
    description: String,
) -> Map<String, Value> {
    let mut manifest = Map::new();
    manifest.insert(
        "name".into(),
        json!(conventions.package_name(request.name().as_str())),
    );
    manifest.insert("version".into(), json!("1.0.0"));
    manifest.insert("description".into(), json!(description));
    manifest.insert("private".into(), json!(true));
    manifest.insert("type".into(), json!("module"));
    manifest.insert("packageManager".into(), json!(conventions.package_manager));
    manifest.insert("engines".into(), json!({ "node": conventions.node_engine }));
    manifest
}

fn finish(manifest: Map<String, Value>) -> String {
    format!("{:#}\n", Value::Object(manifest))
}
