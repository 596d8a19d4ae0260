//! Application services - orchestrate use cases.

pub mod materializer;
pub mod scaffold_service;

pub use materializer::FileMaterializer;
pub use scaffold_service::{ScaffoldOutcome, ScaffoldService};
