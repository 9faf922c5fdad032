//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `etlforge-adapters` crate provides implementations.

use crate::domain::TemplateId;
use crate::error::ForgeResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `etlforge_adapters::filesystem::LocalFilesystem` (production)
/// - `etlforge_adapters::filesystem::MemoryFilesystem` (testing)
///
/// `write_file` creates or overwrites; existence checks are the caller's
/// concern. Storage errors surface as `ApplicationError::FilesystemError`
/// carrying the path and cause.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Idempotent.
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()>;

    /// Write content to a file, creating or overwriting it.
    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template storage and retrieval.
///
/// Implemented by:
/// - `etlforge_adapters::template_store::InMemoryStore` (built-in templates)
/// - `etlforge_adapters::template_store::DirectoryStore` (user templates)
///
/// Read-mostly: the scaffolder only ever calls `get`. No caching, no
/// mutation of template text by the core.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Fetch raw template text by identifier.
    ///
    /// # Errors
    ///
    /// `ApplicationError::TemplateNotFound` naming the identifier when the
    /// store has no matching template.
    fn get(&self, id: TemplateId) -> ForgeResult<String>;

    /// Identifiers currently present in the store.
    fn list(&self) -> ForgeResult<Vec<TemplateId>>;

    /// Insert or replace a template's text.
    fn insert(&self, id: TemplateId, text: String) -> ForgeResult<()>;
}
