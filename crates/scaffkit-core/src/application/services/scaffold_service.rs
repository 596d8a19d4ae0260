//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the scaffolding workflow:
//! 1. Check the target directory is absent
//! 2. Generate the file set for the request
//! 3. Materialize it on the filesystem
//!
//! Parsing and validating user input happens before this service is
//! reached; it only ever sees a typed [`ScaffoldRequest`].

use std::path::PathBuf;

use tracing::{info, instrument};

use crate::{
    application::{ports::Filesystem, services::FileMaterializer},
    domain::{GeneratedFileSet, PackageKind, ScaffoldRequest, TargetDirectory, TemplateRegistry},
    error::ScaffoldResult,
};

/// What a successful scaffold produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOutcome {
    pub target: TargetDirectory,
    pub kind: PackageKind,
    pub written: Vec<PathBuf>,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    registry: TemplateRegistry,
    materializer: FileMaterializer,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given registry and filesystem.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use scaffkit_core::{application::ScaffoldService, domain::TemplateRegistry};
    ///
    /// let service = ScaffoldService::new(
    ///     TemplateRegistry::default(),
    ///     Box::new(filesystem), // impl Filesystem
    /// );
    /// ```
    pub fn new(registry: TemplateRegistry, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            registry,
            materializer: FileMaterializer::new(filesystem),
        }
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    /// Validate the target and generate files without writing anything.
    #[instrument(skip_all, fields(package = %request.name(), kind = %request.kind()))]
    pub fn plan(
        &self,
        request: &ScaffoldRequest,
        target: &TargetDirectory,
    ) -> ScaffoldResult<GeneratedFileSet> {
        self.materializer.ensure_absent(target)?;
        Ok(self.registry.generate(request)?)
    }

    /// Scaffold a new package.
    #[instrument(
        skip_all,
        fields(
            package = %request.name(),
            kind = %request.kind(),
            target = %target.display()
        )
    )]
    pub fn scaffold(
        &self,
        request: &ScaffoldRequest,
        target: &TargetDirectory,
    ) -> ScaffoldResult<ScaffoldOutcome> {
        info!("Scaffolding {} package", request.kind());

        let files = self.plan(request, target)?;
        let written = self.materializer.materialize(target, &files)?;

        info!(files = written.len(), "Scaffold completed successfully");
        Ok(ScaffoldOutcome {
            target: target.clone(),
            kind: request.kind(),
            written,
        })
    }
}
