use serde::{Deserialize, Serialize};

/// Monorepo-wide settings that every generated package shares.
///
/// The defaults describe a pnpm + Turborepo workspace whose shared tooling
/// lives under the `@repo` scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceConventions {
    /// npm scope without the `@`, e.g. `repo`.
    pub scope: String,
    /// Value written to `packageManager`, e.g. `pnpm@10.13.1`.
    pub package_manager: String,
    /// Semver range written to `engines.node`.
    pub node_engine: String,
}

impl Default for WorkspaceConventions {
    fn default() -> Self {
        Self {
            scope: "repo".into(),
            package_manager: "pnpm@10.13.1".into(),
            node_engine: ">=24".into(),
        }
    }
}

impl WorkspaceConventions {
    /// `@<scope>/<name>`.
    pub fn package_name(&self, name: &str) -> String {
        format!("@{}/{}", self.scope, name)
    }

    /// The package manager's executable: `pnpm` for `pnpm@10.13.1`.
    pub fn package_manager_bin(&self) -> &str {
        self.package_manager
            .split('@')
            .next()
            .filter(|bin| !bin.is_empty())
            .unwrap_or("pnpm")
    }

    pub fn eslint_config_package(&self) -> String {
        self.package_name("eslint-config")
    }

    pub fn typescript_config_package(&self) -> String {
        self.package_name("typescript-config")
    }
}
