//! Built-in package templates.
//!
//! [`TemplateRegistry::generate`] is a pure function of the request and the
//! workspace conventions: the same inputs always produce byte-identical
//! output. Nothing here reads the clock, the environment, or the disk.
//!
//! | Kind            | Files                                                                 |
//! |-----------------|-----------------------------------------------------------------------|
//! | `node-lib`      | `.gitignore README.md package.json tsconfig.json eslint.config.js src/index.ts` |
//! | `react-library` | same as `node-lib`, extending the React base tsconfig                  |
//! | `config-only`   | `.gitignore README.md package.json index.js`                          |

mod gitignore;
mod manifest;
mod readme;
mod sources;
mod tsconfig;

use tracing::debug;

use crate::domain::{
    conventions::WorkspaceConventions, error::DomainError, file_set::GeneratedFileSet,
    request::ScaffoldRequest, value_objects::PackageKind,
};

pub const GITIGNORE: &str = ".gitignore";
pub const README: &str = "README.md";
pub const MANIFEST: &str = "package.json";
pub const TSCONFIG: &str = "tsconfig.json";
pub const ESLINT_CONFIG: &str = "eslint.config.js";
pub const ENTRY_SOURCE: &str = "src/index.ts";
pub const CONFIG_ENTRY: &str = "index.js";

/// Maps a package kind to the files that make up a fresh package.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    conventions: WorkspaceConventions,
}

impl TemplateRegistry {
    pub fn new(conventions: WorkspaceConventions) -> Self {
        Self { conventions }
    }

    pub fn conventions(&self) -> &WorkspaceConventions {
        &self.conventions
    }

    /// Generate every file for `request`.
    ///
    /// Fails only if a generator breaks a [`GeneratedFileSet`] invariant,
    /// which would be a bug in this module.
    pub fn generate(&self, request: &ScaffoldRequest) -> Result<GeneratedFileSet, DomainError> {
        let files = match request.kind() {
            PackageKind::ConfigOnly => self.config_only_files(request)?,
            PackageKind::NodeLib | PackageKind::ReactLibrary => {
                self.source_package_files(request)?
            }
        };

        debug!(
            package = %request.name(),
            kind = %request.kind(),
            files = files.len(),
            "Generated file set"
        );
        Ok(files)
    }

    fn source_package_files(
        &self,
        request: &ScaffoldRequest,
    ) -> Result<GeneratedFileSet, DomainError> {
        let conventions = &self.conventions;

        GeneratedFileSet::new()
            .with_file(GITIGNORE, gitignore::render(request.kind()))?
            .with_file(README, readme::render(request, conventions))?
            .with_file(MANIFEST, manifest::source_package(request, conventions))?
            .with_file(TSCONFIG, tsconfig::render(request.kind(), conventions))?
            .with_file(ESLINT_CONFIG, sources::eslint_config(conventions))?
            .with_file(ENTRY_SOURCE, sources::entry_source())
    }

    fn config_only_files(&self, request: &ScaffoldRequest) -> Result<GeneratedFileSet, DomainError> {
        let conventions = &self.conventions;

        GeneratedFileSet::new()
            .with_file(GITIGNORE, gitignore::render(PackageKind::ConfigOnly))?
            .with_file(README, readme::render(request, conventions))?
            .with_file(MANIFEST, manifest::config_only(request, conventions))?
            .with_file(CONFIG_ENTRY, sources::config_entry())
    }
}
