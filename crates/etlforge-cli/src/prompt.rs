//! Interactive prompts (behind the `interactive` feature).
//!
//! Mirrors the answer flow the scaffolder needs: category, subcategory
//! (keyed by the category), project name, and one yes/no per pipeline stage.
//! The caller decides which answers still need prompting; nothing here
//! touches flags or config resolution.

use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

use etlforge_core::domain::validate_project_name;

use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

/// Pick a category from the configured list.
pub fn select_category(config: &AppConfig) -> CliResult<String> {
    let names = config.category_names();
    if names.is_empty() {
        return Err(CliError::ConfigError {
            message: "no categories configured".into(),
            source: None,
        });
    }

    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select a category")
        .items(&names)
        .default(0)
        .interact()
        .map_err(prompt_error)?;

    Ok(names[index].to_string())
}

/// Pick a subcategory from the chosen category's list.
pub fn select_subcategory(config: &AppConfig, category: &str) -> CliResult<String> {
    let subcategories =
        config
            .subcategories_for(category)
            .ok_or_else(|| CliError::UnknownCategory {
                category: category.to_string(),
                available: config.category_names().iter().map(|s| s.to_string()).collect(),
            })?;

    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select a subcategory")
        .items(subcategories)
        .default(0)
        .interact()
        .map_err(prompt_error)?;

    Ok(subcategories[index].clone())
}

/// Ask for the project name, re-prompting until it validates.
pub fn input_project_name() -> CliResult<String> {
    Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Project name")
        .validate_with(|value: &String| {
            validate_project_name(value)
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()
        .map_err(prompt_error)
}

/// Yes/no question for one pipeline stage.
pub fn confirm_stage(stage: &str, default: bool) -> CliResult<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Include a {stage} stage?"))
        .default(default)
        .interact()
        .map_err(prompt_error)
}

fn prompt_error(err: dialoguer::Error) -> CliError {
    match err {
        dialoguer::Error::IO(io_err) => CliError::IoError {
            message: "prompt failed".into(),
            source: io_err,
        },
    }
}
