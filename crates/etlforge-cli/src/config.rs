//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The CLI
//! layer owns config; the core crate never sees it. This replaces the ambient
//! module-level settings of older scaffolders: the base project folder and
//! the category/subcategory lists are explicit values handed to whoever
//! needs them.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `--config <FILE>`, or the default config file if present
//! 3. Built-in defaults (always available)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base folder all scaffolds land under.
    pub project_root: PathBuf,
    /// The fixed two-level classification projects file under.
    pub categories: Vec<CategoryConfig>,
    /// Template settings.
    pub templates: TemplateConfig,
}

/// One category and the subcategories it admits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub name: String,
    pub subcategories: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory of `<id>.py.template` files replacing the built-ins.
    pub local_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            categories: vec![
                CategoryConfig {
                    name: "analytics".into(),
                    subcategories: vec!["sales".into(), "marketing".into(), "finance".into()],
                },
                CategoryConfig {
                    name: "engineering".into(),
                    subcategories: vec!["ingestion".into(), "infrastructure".into()],
                },
                CategoryConfig {
                    name: "operations".into(),
                    subcategories: vec!["logistics".into(), "reporting".into()],
                },
            ],
            templates: TemplateConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration.
    ///
    /// Reads `config_file` (the `--config` value) or the default location if
    /// it exists; otherwise returns the built-in defaults. A file that exists
    /// but fails to parse is an error — silently falling back would mask
    /// typos in category lists.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = match config_file {
            Some(explicit) => explicit.clone(),
            None => {
                let default = Self::config_path();
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let raw = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("failed to read config '{}': {e}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("failed to parse config '{}': {e}", path.display()))?;
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.etlforge.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "etlforge", "etlforge")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".etlforge.toml"))
    }

    /// Names of the configured categories, in configured order.
    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    /// Subcategories for a category, or `None` if the category is unknown.
    pub fn subcategories_for(&self, category: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.subcategories.as_slice())
    }

    /// The effective base folder, honouring a `--root` override.
    pub fn effective_root<'a>(&'a self, override_root: Option<&'a Path>) -> &'a Path {
        override_root.unwrap_or(&self.project_root)
    }
}
