use crate::domain::conventions::WorkspaceConventions;

pub(super) fn eslint_config(conventions: &WorkspaceConventions) -> String {
    format!(
        "import {{ config as base }} from '{}/base';\nexport default [...base];\n",
        conventions.eslint_config_package()
    )
}

pub(super) fn entry_source() -> &'static str {
    "export {};\n"
}

pub(super) fn config_entry() -> &'static str {
    "// Replace with the actual config export surface for this package.\nexport default {};\n"
}
