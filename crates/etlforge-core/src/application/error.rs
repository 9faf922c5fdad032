//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::TemplateId;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No template text exists for the requested identifier.
    #[error("template '{id}' not found in the template store")]
    TemplateNotFound { id: TemplateId },

    /// Target project directories already exist.
    #[error("project '{project}' already exists in '{category}/{subcategory}'")]
    ProjectExists {
        project: String,
        category: String,
        subcategory: String,
    },

    /// Filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Store access failed (lock poisoned).
    #[error("template store error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { id } => vec![
                format!("No template registered for '{}'", id),
                "Run: etlforge list to see available templates".into(),
                "If using a template directory, check it contains the file".into(),
            ],
            Self::ProjectExists {
                project,
                category,
                subcategory,
            } => vec![
                format!(
                    "'{}' was already scaffolded under {}/{}",
                    project, category, subcategory
                ),
                "Choose a different project name".into(),
                "Or remove the existing project directory first".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::StoreLockError => vec![
                "The template store is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
