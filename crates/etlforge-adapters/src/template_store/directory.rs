//! Directory-backed template store.
//!
//! Reads `<id>.py.template` files from a single directory, the layout the
//! tool's template collections use:
//!
//! ```text
//! templates/
//!   extractor.py.template
//!   transform.py.template
//!   loader.py.template
//!   routes.py.template
//!   etl.py.template
//! ```
//!
//! Lookups hit the filesystem every time — no caching, so edits to a
//! template take effect on the next run. A missing file surfaces as
//! `TemplateNotFound` for that identifier only; the other templates keep
//! working.
//!
//! # Environment variable
//!
//! `ETLFORGE_TEMPLATES_DIR` points the tool at a custom collection without
//! touching the config file. Relative paths resolve against the current
//! working directory.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use etlforge_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::TemplateId,
    error::ForgeResult,
};

/// Environment variable overriding the template directory.
pub const TEMPLATES_DIR_ENV: &str = "ETLFORGE_TEMPLATES_DIR";

/// Template store reading from a directory of `*.py.template` files.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// Create a store rooted at `root`. The directory does not need to exist
    /// yet; lookups will simply miss until it does.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Build a store from `ETLFORGE_TEMPLATES_DIR` if it is set and points
    /// at an existing directory.
    pub fn from_env() -> Option<Self> {
        let raw = std::env::var(TEMPLATES_DIR_ENV).ok()?;
        let path = PathBuf::from(raw);
        if path.is_dir() {
            debug!(path = %path.display(), "using templates from environment override");
            Some(Self::new(path))
        } else {
            warn!(
                path = %path.display(),
                "{TEMPLATES_DIR_ENV} is set but is not a directory; ignoring"
            );
            None
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn file_path(&self, id: TemplateId) -> PathBuf {
        self.root.join(id.store_file_name())
    }
}

impl TemplateStore for DirectoryStore {
    fn get(&self, id: TemplateId) -> ForgeResult<String> {
        let path = self.file_path(id);
        if !path.is_file() {
            return Err(ApplicationError::TemplateNotFound { id }.into());
        }

        std::fs::read_to_string(&path).map_err(|e| {
            ApplicationError::FilesystemError {
                path,
                reason: format!("failed to read template: {e}"),
            }
            .into()
        })
    }

    fn list(&self) -> ForgeResult<Vec<TemplateId>> {
        Ok(TemplateId::ALL
            .into_iter()
            .filter(|id| self.file_path(*id).is_file())
            .collect())
    }

    fn insert(&self, id: TemplateId, text: String) -> ForgeResult<()> {
        std::fs::create_dir_all(&self.root).map_err(|e| ApplicationError::FilesystemError {
            path: self.root.clone(),
            reason: format!("failed to create templates directory: {e}"),
        })?;

        let path = self.file_path(id);
        std::fs::write(&path, text).map_err(|e| {
            ApplicationError::FilesystemError {
                path,
                reason: format!("failed to write template: {e}"),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use etlforge_core::error::ForgeError;

    #[test]
    fn get_reads_template_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("routes.py.template"),
            "# routes {{PROJECT_NAME}}",
        )
        .unwrap();

        let store = DirectoryStore::new(dir.path());
        assert_eq!(
            store.get(TemplateId::Routes).unwrap(),
            "# routes {{PROJECT_NAME}}"
        );
    }

    #[test]
    fn missing_file_is_template_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirectoryStore::new(dir.path());
        assert!(matches!(
            store.get(TemplateId::Etl).unwrap_err(),
            ForgeError::Application(ApplicationError::TemplateNotFound {
                id: TemplateId::Etl
            })
        ));
    }

    #[test]
    fn list_reports_only_present_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("etl.py.template"), "x").unwrap();
        std::fs::write(dir.path().join("loader.py.template"), "y").unwrap();

        let store = DirectoryStore::new(dir.path());
        assert_eq!(
            store.list().unwrap(),
            vec![TemplateId::Loader, TemplateId::Etl]
        );
    }

    #[test]
    fn insert_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirectoryStore::new(dir.path().join("fresh"));
        store.insert(TemplateId::Transform, "body".into()).unwrap();
        assert_eq!(store.get(TemplateId::Transform).unwrap(), "body");
    }

    #[test]
    fn picks_up_edits_between_lookups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("etl.py.template");
        std::fs::write(&path, "v1").unwrap();

        let store = DirectoryStore::new(dir.path());
        assert_eq!(store.get(TemplateId::Etl).unwrap(), "v1");

        std::fs::write(&path, "v2").unwrap();
        assert_eq!(store.get(TemplateId::Etl).unwrap(), "v2");
    }
}
