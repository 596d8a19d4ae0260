//! Scaffkit Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the
//! `scaffold-package` tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          scaffkit-cli (CLI)             │
//! │   (argument fold, orchestration)        │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ScaffoldService, FileMaterializer)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │            (Filesystem)                 │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   scaffkit-adapters (Infrastructure)    │
//! │  (LocalFilesystem, MemoryFilesystem)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Identifier, PackageKind, templates)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use scaffkit_core::domain::{Identifier, PackageKind, ScaffoldRequest, TemplateRegistry};
//!
//! let request = ScaffoldRequest::new(
//!     Identifier::parse("widgets").unwrap(),
//!     PackageKind::NodeLib,
//!     None,
//! );
//! let files = TemplateRegistry::default().generate(&request).unwrap();
//! assert!(files.contains("src/index.ts"));
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{FileMaterializer, ScaffoldOutcome, ScaffoldService, ports::Filesystem};
    pub use crate::domain::{
        EnvSchema, GeneratedFileSet, Identifier, PackageKind, ScaffoldRequest, TemplateRegistry,
        WorkspaceConventions,
    };
    pub use crate::error::{ScaffoldError, ScaffoldResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
