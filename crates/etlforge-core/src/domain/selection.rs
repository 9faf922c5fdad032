//! The user's scaffold selection: classification, project name, and stages.
//!
//! # Design
//!
//! `Selection` is immutable once built. All validation happens in
//! [`SelectionBuilder::build`], so a constructed `Selection` always carries a
//! valid project name. The interactive layer (or CLI flags) produces the raw
//! answers; nothing here prompts or reads input.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

// ── Stage ─────────────────────────────────────────────────────────────────────

/// One of the three optional pipeline stages a project may include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Extractor,
    Transform,
    Loader,
}

impl Stage {
    /// Every stage, in the order files are generated.
    pub const ALL: [Stage; 3] = [Self::Extractor, Self::Transform, Self::Loader];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Extractor => "extractor",
            Self::Transform => "transform",
            Self::Loader => "loader",
        }
    }

    /// Name of the generated file under the workflows directory.
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::Extractor => "extractor.py",
            Self::Transform => "transform.py",
            Self::Loader => "loader.py",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "extractor" | "extract" => Ok(Self::Extractor),
            "transform" => Ok(Self::Transform),
            "loader" | "load" => Ok(Self::Loader),
            other => Err(DomainError::UnknownName(other.to_string())),
        }
    }
}

// ── StageFlags ────────────────────────────────────────────────────────────────

/// Which optional stages the project includes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageFlags {
    pub extractor: bool,
    pub transform: bool,
    pub loader: bool,
}

impl StageFlags {
    pub const fn none() -> Self {
        Self {
            extractor: false,
            transform: false,
            loader: false,
        }
    }

    pub const fn all() -> Self {
        Self {
            extractor: true,
            transform: true,
            loader: true,
        }
    }

    pub const fn is_enabled(&self, stage: Stage) -> bool {
        match stage {
            Stage::Extractor => self.extractor,
            Stage::Transform => self.transform,
            Stage::Loader => self.loader,
        }
    }

    /// Enabled stages in generation order.
    pub fn enabled(&self) -> impl Iterator<Item = Stage> + '_ {
        Stage::ALL.into_iter().filter(|s| self.is_enabled(*s))
    }

    pub fn count(&self) -> usize {
        self.enabled().count()
    }
}

// ── Selection ─────────────────────────────────────────────────────────────────

/// A single run's captured answers.
///
/// Invariant: `project_name` matches `[A-Za-z0-9_]+` (enforced by the
/// builder). Category and subcategory are opaque here; the CLI layer checks
/// them against the configured lists before a `Selection` is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    category: String,
    subcategory: String,
    project_name: String,
    stages: StageFlags,
}

impl Selection {
    pub fn builder() -> SelectionBuilder {
        SelectionBuilder::default()
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn subcategory(&self) -> &str {
        &self.subcategory
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn stages(&self) -> StageFlags {
        self.stages
    }
}

/// Builder for [`Selection`]; validates the project name at `build()`.
#[derive(Debug, Default)]
pub struct SelectionBuilder {
    category: Option<String>,
    subcategory: Option<String>,
    project_name: Option<String>,
    stages: StageFlags,
}

impl SelectionBuilder {
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    pub fn project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(name.into());
        self
    }

    pub fn stages(mut self, stages: StageFlags) -> Self {
        self.stages = stages;
        self
    }

    pub fn stage(mut self, stage: Stage, enabled: bool) -> Self {
        match stage {
            Stage::Extractor => self.stages.extractor = enabled,
            Stage::Transform => self.stages.transform = enabled,
            Stage::Loader => self.stages.loader = enabled,
        }
        self
    }

    /// Consume the builder and construct a [`Selection`].
    ///
    /// # Errors
    ///
    /// - `MissingRequiredField` if category, subcategory, or name is unset
    /// - `InvalidProjectName` if the name fails [`validate_project_name`]
    pub fn build(self) -> Result<Selection, DomainError> {
        let category = self
            .category
            .ok_or(DomainError::MissingRequiredField { field: "category" })?;
        let subcategory = self.subcategory.ok_or(DomainError::MissingRequiredField {
            field: "subcategory",
        })?;
        let project_name = self.project_name.ok_or(DomainError::MissingRequiredField {
            field: "project_name",
        })?;

        validate_project_name(&project_name)?;

        Ok(Selection {
            category,
            subcategory,
            project_name,
            stages: self.stages,
        })
    }
}

// ── Name validation ───────────────────────────────────────────────────────────

/// Validate a candidate project name.
///
/// Accepts exactly `[A-Za-z0-9_]+` and returns the name unchanged. The empty
/// string is rejected even though it contains no disallowed characters.
pub fn validate_project_name(name: &str) -> Result<&str, DomainError> {
    if name.is_empty() {
        return Err(DomainError::InvalidProjectName {
            name: name.to_string(),
            reason: "name cannot be empty".into(),
        });
    }

    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
    {
        return Err(DomainError::InvalidProjectName {
            name: name.to_string(),
            reason: format!("character '{bad}' is not allowed; use letters, digits, underscore"),
        });
    }

    Ok(name)
}

// ── tests ─────────────────────────────────────────────────────────────────────
