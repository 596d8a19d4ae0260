//! Application layer for Scaffkit.
//!
//! This layer contains:
//! - **Services**: use case orchestration (`ScaffoldService`,
//!   `FileMaterializer`)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{FileMaterializer, ScaffoldOutcome, ScaffoldService};

pub use ports::Filesystem;

pub use error::ApplicationError;
