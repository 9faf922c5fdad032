//! Project layout: the directories and file paths one scaffold produces.

use std::path::{Path, PathBuf};

use crate::domain::selection::{Selection, Stage};

/// The directory pair a scaffold creates, derived deterministically from the
/// base root and a selection.
///
/// Invariant at scaffold time: neither directory may already exist —
/// existence of either means the project exists and the whole operation
/// aborts before any mutation. The guard itself lives in the scaffold
/// service; this type only computes paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    project_dir: PathBuf,
    workflows_dir: PathBuf,
    routes_dir: PathBuf,
}

impl ProjectLayout {
    /// Derive the layout: `<root>/<category>/<subcategory>/<project_name>`
    /// with `workflows/etl_tools` and `routes` beneath it.
    pub fn derive(root: &Path, selection: &Selection) -> Self {
        let project_dir = root
            .join(selection.category())
            .join(selection.subcategory())
            .join(selection.project_name());

        Self {
            workflows_dir: project_dir.join("workflows").join("etl_tools"),
            routes_dir: project_dir.join("routes"),
            project_dir,
        }
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn workflows_dir(&self) -> &Path {
        &self.workflows_dir
    }

    pub fn routes_dir(&self) -> &Path {
        &self.routes_dir
    }

    /// Path of a generated stage file under the workflows directory.
    pub fn stage_file(&self, stage: Stage) -> PathBuf {
        self.workflows_dir.join(stage.file_name())
    }

    /// Path of the generated routes file.
    pub fn routes_file(&self, project_name: &str) -> PathBuf {
        self.routes_dir.join(format!("{project_name}_routes.py"))
    }

    /// Path of the generated `etl.py`, one level above the workflows
    /// directory (i.e. directly under `workflows/`).
    pub fn etl_file(&self) -> PathBuf {
        self.project_dir.join("workflows").join("etl.py")
    }
}

/// A file the scaffolder is about to write: final content, final path.
///
/// Written once, never updated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub content: String,
}

impl GeneratedFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}
