use serde_json::json;

use crate::domain::{conventions::WorkspaceConventions, value_objects::PackageKind};

/// `tsconfig.json` for a source package, extending the kind's base config.
pub(super) fn render(kind: PackageKind, conventions: &WorkspaceConventions) -> String {
    let base = format!(
        "{}/{}.json",
        conventions.typescript_config_package(),
        kind.as_str()
    );

    let tsconfig = json!({
        "extends": base,
        "compilerOptions": {
            "outDir": "dist",
            "rootDir": "src",
            "types": ["node"],
            "verbatimModuleSyntax": true,
        },
        "include": ["src"],
        "exclude": ["node_modules", "dist", "test", "**/*.test.ts"],
    });

    format!("{tsconfig:#}\n")
}
