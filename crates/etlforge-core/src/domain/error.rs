//! Domain errors - validation failures in pure business logic.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to pass around)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// The project name contains characters outside `[A-Za-z0-9_]`,
    /// or is empty.
    #[error("invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    /// A stage or template name did not parse.
    #[error("unknown name: {0}")]
    UnknownName(String),

    /// A builder was finalized without a required field.
    #[error("required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, .. } => vec![
                format!("Project name '{}' is not usable", name),
                "Use only letters, digits, and underscores".into(),
                "Examples: sales_etl, inventory2, DailyLoad".into(),
            ],
            Self::UnknownName(name) => vec![
                format!("'{}' is not a known stage or template", name),
                "Stages: extractor, transform, loader".into(),
                "Templates: extractor, transform, loader, routes, etl".into(),
            ],
            Self::MissingRequiredField { field } => vec![
                format!("The selection is missing '{}'", field),
                "Provide every answer before scaffolding".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. } => ErrorCategory::Validation,
            Self::UnknownName(_) => ErrorCategory::Validation,
            Self::MissingRequiredField { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
