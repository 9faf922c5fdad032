//! Command handlers. One module per subcommand; shared adapter wiring here.

pub mod completions;
pub mod init;
pub mod list;
pub mod new;

use etlforge_adapters::{DirectoryStore, InMemoryStore};
use etlforge_core::application::ports::TemplateStore;

use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

/// Pick the template store for this run.
///
/// Priority: `ETLFORGE_TEMPLATES_DIR` environment override, then the
/// configured template directory, then the built-ins compiled into the
/// binary.
pub(crate) fn active_store(config: &AppConfig) -> CliResult<Box<dyn TemplateStore>> {
    if let Some(store) = DirectoryStore::from_env() {
        return Ok(Box::new(store));
    }

    if let Some(path) = &config.templates.local_path {
        return Ok(Box::new(DirectoryStore::new(path)));
    }

    Ok(Box::new(
        InMemoryStore::with_builtin().map_err(CliError::Core)?,
    ))
}
