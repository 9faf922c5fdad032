//! Implementation of the `etlforge new` command.
//!
//! Responsibility: turn flags (and prompts, when answers are missing) into a
//! `Selection`, call the core scaffold service, and display results. No
//! business logic lives here.

use std::path::Path;

use tracing::{debug, info, instrument};

use etlforge_adapters::LocalFilesystem;
use etlforge_core::{
    application::{ScaffoldReport, ScaffoldService},
    domain::{Selection, StageFlags},
    error::ForgeError,
};

use crate::{
    cli::{NewArgs, OutputFormat, global::GlobalArgs},
    commands::active_store,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `etlforge new` command.
///
/// Dispatch sequence:
/// 1. Gather answers (flags first, prompts for whatever is missing)
/// 2. Validate the classification against the configured lists
/// 3. Confirm with user unless `--yes` or `--quiet`
/// 4. Execute scaffolding via `ScaffoldService`
/// 5. Render the summary (human lines or JSON)
#[instrument(skip_all)]
pub fn execute(
    args: NewArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1-2. Build a validated selection
    let selection = gather_selection(&args, &config)?;
    let root = config.effective_root(args.root.as_deref()).to_path_buf();

    debug!(
        category = selection.category(),
        subcategory = selection.subcategory(),
        project = selection.project_name(),
        stages = selection.stages().count(),
        root = %root.display(),
        "Selection resolved"
    );

    let json_output = matches!(output.format(), OutputFormat::Json);

    // 3. Show configuration and confirm
    if !output.is_quiet() && !args.yes && !json_output {
        show_configuration(&selection, &root, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 4. Wire adapters and scaffold
    let service = ScaffoldService::new(active_store(&config)?, Box::new(LocalFilesystem::new()));

    if !json_output {
        output.header(&format!("Scaffolding '{}'...", selection.project_name()))?;
    }
    info!(project = selection.project_name(), "Scaffold started");

    let report = service.scaffold(&root, &selection).map_err(CliError::Core)?;

    info!(project = selection.project_name(), "Scaffold completed");

    // 5. Report
    render_summary(&report, &output)
}

// ── Answer gathering ──────────────────────────────────────────────────────────

/// Combine flags and (when needed and possible) prompts into a `Selection`.
fn gather_selection(args: &NewArgs, config: &AppConfig) -> CliResult<Selection> {
    let (category, subcategory, name, stages) =
        match (&args.name, &args.category, &args.subcategory) {
            (Some(name), Some(category), Some(subcategory)) => (
                category.clone(),
                subcategory.clone(),
                name.clone(),
                StageFlags {
                    extractor: args.extractor,
                    transform: args.transform,
                    loader: args.loader,
                },
            ),
            _ => prompt_missing(args, config)?,
        };

    validate_classification(config, &category, &subcategory)?;

    Selection::builder()
        .category(category)
        .subcategory(subcategory)
        .project_name(name)
        .stages(stages)
        .build()
        .map_err(|e| CliError::Core(e.into()))
}

/// Interactive path: prompt for every answer the flags did not provide.
///
/// Stage questions are always asked here (with the flag values as defaults)
/// so a partially-flagged run still walks the full questionnaire.
#[cfg(feature = "interactive")]
fn prompt_missing(
    args: &NewArgs,
    config: &AppConfig,
) -> CliResult<(String, String, String, StageFlags)> {
    use std::io::IsTerminal as _;

    if !std::io::stdin().is_terminal() {
        return Err(first_missing_answer(args));
    }

    let category = match &args.category {
        Some(category) => category.clone(),
        None => crate::prompt::select_category(config)?,
    };
    let subcategory = match &args.subcategory {
        Some(subcategory) => subcategory.clone(),
        None => crate::prompt::select_subcategory(config, &category)?,
    };
    let name = match &args.name {
        Some(name) => name.clone(),
        None => crate::prompt::input_project_name()?,
    };
    let stages = StageFlags {
        extractor: crate::prompt::confirm_stage("extractor", args.extractor)?,
        transform: crate::prompt::confirm_stage("transform", args.transform)?,
        loader: crate::prompt::confirm_stage("loader", args.loader)?,
    };

    Ok((category, subcategory, name, stages))
}

#[cfg(not(feature = "interactive"))]
fn prompt_missing(
    args: &NewArgs,
    _config: &AppConfig,
) -> CliResult<(String, String, String, StageFlags)> {
    Err(first_missing_answer(args))
}

/// Which answer to name when prompting is unavailable.
fn first_missing_answer(args: &NewArgs) -> CliError {
    if args.name.is_none() {
        CliError::MissingAnswer { field: "name" }
    } else if args.category.is_none() {
        CliError::MissingAnswer { field: "category" }
    } else {
        CliError::MissingAnswer {
            field: "subcategory",
        }
    }
}

// ── Classification validation ─────────────────────────────────────────────────

/// Check category and subcategory against the configured lists.
fn validate_classification(
    config: &AppConfig,
    category: &str,
    subcategory: &str,
) -> CliResult<()> {
    let subcategories =
        config
            .subcategories_for(category)
            .ok_or_else(|| CliError::UnknownCategory {
                category: category.to_string(),
                available: config
                    .category_names()
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            })?;

    if !subcategories.iter().any(|s| s == subcategory) {
        return Err(CliError::UnknownSubcategory {
            subcategory: subcategory.to_string(),
            category: category.to_string(),
            available: subcategories.to_vec(),
        });
    }

    Ok(())
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(
    selection: &Selection,
    root: &Path,
    out: &OutputManager,
) -> CliResult<()> {
    let stages = selection.stages();
    out.header("Configuration")?;
    out.print(&format!("  Category:     {}", selection.category()))?;
    out.print(&format!("  Subcategory:  {}", selection.subcategory()))?;
    out.print(&format!("  Project:      {}", selection.project_name()))?;
    out.print(&format!("  Extractor:    {}", yes_no(stages.extractor)))?;
    out.print(&format!("  Transform:    {}", yes_no(stages.transform)))?;
    out.print(&format!("  Loader:       {}", yes_no(stages.loader)))?;
    out.print(&format!("  Location:     {}", root.display()))?;
    out.print("")?;
    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

fn render_summary(report: &ScaffoldReport, output: &OutputManager) -> CliResult<()> {
    if matches!(output.format(), OutputFormat::Json) {
        // JSON must be parseable even when piped; bypass the OutputManager.
        let json = serde_json::to_string_pretty(&report.summary).map_err(|e| {
            CliError::Core(ForgeError::Internal {
                message: format!("failed to serialise summary: {e}"),
            })
        })?;
        println!("{json}");
        return Ok(());
    }

    let summary = &report.summary;
    output.success(&format!("Project '{}' scaffolded!", summary.project_name))?;
    output.print("")?;
    output.print("Summary:")?;
    output.print(&format!(
        "  Filed under:  {}/{}",
        summary.category, summary.subcategory
    ))?;
    output.print(&format!("  Extractor:    {}", yes_no(summary.has_extractor)))?;
    output.print(&format!("  Transform:    {}", yes_no(summary.has_transform)))?;
    output.print(&format!("  Loader:       {}", yes_no(summary.has_loader)))?;
    output.print(&format!(
        "  Created at:   {}",
        summary.output_path.display()
    ))?;
    Ok(())
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn args(name: Option<&str>, category: Option<&str>, subcategory: Option<&str>) -> NewArgs {
        NewArgs {
            name: name.map(String::from),
            category: category.map(String::from),
            subcategory: subcategory.map(String::from),
            extractor: true,
            transform: false,
            loader: true,
            root: None,
            yes: true,
        }
    }

    // ── gather_selection (fully flagged) ──────────────────────────────────────

    #[test]
    fn fully_flagged_builds_selection_without_prompting() {
        let selection = gather_selection(
            &args(Some("sales_etl"), Some("analytics"), Some("sales")),
            &AppConfig::default(),
        )
        .unwrap();

        assert_eq!(selection.project_name(), "sales_etl");
        assert!(selection.stages().extractor);
        assert!(!selection.stages().transform);
        assert!(selection.stages().loader);
    }

    #[test]
    fn invalid_name_surfaces_core_error() {
        let result = gather_selection(
            &args(Some("bad name"), Some("analytics"), Some("sales")),
            &AppConfig::default(),
        );
        assert!(matches!(result, Err(CliError::Core(_))));
    }

    // ── validate_classification ───────────────────────────────────────────────

    #[test]
    fn unknown_category_lists_configured_names() {
        let err = validate_classification(&AppConfig::default(), "nope", "sales").unwrap_err();
        match err {
            CliError::UnknownCategory {
                category,
                available,
            } => {
                assert_eq!(category, "nope");
                assert!(available.contains(&"analytics".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unknown_subcategory_lists_siblings() {
        let err =
            validate_classification(&AppConfig::default(), "analytics", "nope").unwrap_err();
        match err {
            CliError::UnknownSubcategory {
                subcategory,
                category,
                available,
            } => {
                assert_eq!(subcategory, "nope");
                assert_eq!(category, "analytics");
                assert!(available.contains(&"sales".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn known_pair_passes() {
        assert!(validate_classification(&AppConfig::default(), "analytics", "sales").is_ok());
    }

    // ── first_missing_answer ──────────────────────────────────────────────────

    #[test]
    fn missing_answer_names_the_first_gap() {
        let err = first_missing_answer(&args(None, Some("analytics"), None));
        assert!(matches!(err, CliError::MissingAnswer { field: "name" }));

        let err = first_missing_answer(&args(Some("p"), None, None));
        assert!(matches!(err, CliError::MissingAnswer { field: "category" }));

        let err = first_missing_answer(&args(Some("p"), Some("analytics"), None));
        assert!(matches!(
            err,
            CliError::MissingAnswer {
                field: "subcategory"
            }
        ));
    }
}
