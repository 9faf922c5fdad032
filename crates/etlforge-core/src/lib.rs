//! etlforge core - hexagonal architecture implementation.
//!
//! This crate provides the domain and application layers for the etlforge
//! project scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          etlforge-cli (CLI)             │
//! │       (prompts, flags, display)         │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ScaffoldService, TemplateService)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │    (TemplateStore, Filesystem)          │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    etlforge-adapters (Infrastructure)   │
//! │  (InMemoryStore, LocalFilesystem, etc)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The domain layer (selections, layouts, templates, rendering) is pure:
//! no I/O, no subscribers, only `tracing` events and `thiserror` enums.

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldReport, ScaffoldService, ScaffoldSummary, TemplateService,
        ports::{Filesystem, TemplateStore},
    };
    pub use crate::domain::{
        GeneratedFile, ProjectLayout, RenderContext, Selection, SelectionBuilder, Stage,
        StageFlags, TemplateId, to_class_name, validate_project_name,
    };
    pub use crate::error::{ForgeError, ForgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
