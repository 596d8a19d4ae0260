//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `scaffkit-adapters` implement
//! these.
//!
//! - **Driven (Output) Ports**: called by the application, implemented by
//!   infrastructure
//!   - `Filesystem`: directory and file creation

pub mod output;

pub use output::Filesystem;

#[cfg(test)]
pub use output::MockFilesystem;
