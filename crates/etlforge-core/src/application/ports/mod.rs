//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `etlforge-adapters` implement
//! these.

pub mod output;

pub use output::{Filesystem, TemplateStore};

#[cfg(test)]
pub use output::{MockFilesystem, MockTemplateStore};
