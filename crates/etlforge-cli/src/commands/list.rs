//! Implementation of the `etlforge list` command.

use etlforge_core::application::TemplateService;

use crate::{
    cli::{ListArgs, ListFormat, global::GlobalArgs},
    commands::active_store,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    args: ListArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = TemplateService::new(active_store(&config)?);
    let templates = service.list().map_err(CliError::Core)?;
    let missing = service.missing().map_err(CliError::Core)?;

    match args.format {
        ListFormat::Table => {
            output.header("Categories:")?;
            for category in &config.categories {
                output.print(&format!(
                    "  {}  ({})",
                    category.name,
                    category.subcategories.join(", ")
                ))?;
            }

            output.print("")?;
            output.header("Templates:")?;
            for id in &templates {
                output.print(&format!("  {id}"))?;
            }
            if !missing.is_empty() {
                let names: Vec<String> = missing.iter().map(|id| id.to_string()).collect();
                output.warning(&format!("Missing templates: {}", names.join(", ")))?;
            }
        }

        ListFormat::List => {
            for id in &templates {
                println!("{id}");
            }
        }

        ListFormat::Json => {
            // Serialise to stdout directly (bypasses OutputManager because
            // JSON output must be parseable even in non-TTY pipes).
            let payload = serde_json::json!({
                "categories": config.categories,
                "templates": templates,
                "missing_templates": missing,
            });
            println!("{payload:#}");
        }
    }

    Ok(())
}
