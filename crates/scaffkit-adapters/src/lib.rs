//! Infrastructure adapters for Scaffkit.
//!
//! This crate implements the ports defined in
//! `scaffkit-core::application::ports` and the layered `.env` loader.
//! It contains all external dependencies and I/O operations.

pub mod env;
pub mod filesystem;

// Re-export commonly used adapters
pub use env::{EnvLoader, EnvLoaderError};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
