//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "etlforge",
    bin_name = "etlforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Interactive ETL project scaffolding",
    long_about = "etlforge materializes a ready-to-edit ETL project skeleton \
                  (workflow stages, routes, pipeline entry point) under a \
                  category/subcategory tree.",
    after_help = "EXAMPLES:\n\
        \x20 etlforge new                      # answer the prompts\n\
        \x20 etlforge new sales_etl --category analytics --subcategory sales --extractor --loader --yes\n\
        \x20 etlforge list\n\
        \x20 etlforge completions bash > /usr/share/bash-completion/completions/etlforge",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold a new ETL project.
    #[command(
        visible_alias = "n",
        about = "Scaffold a new ETL project",
        after_help = "EXAMPLES:\n\
            \x20 etlforge new\n\
            \x20 etlforge new daily_load --category analytics --subcategory sales --transform --yes\n\
            \x20 etlforge new sync --category operations --subcategory logistics --root /data/projects --yes"
    )]
    New(NewArgs),

    /// List configured categories and available templates.
    #[command(
        visible_alias = "ls",
        about = "List categories and templates",
        after_help = "EXAMPLES:\n\
            \x20 etlforge list\n\
            \x20 etlforge list --format json"
    )]
    List(ListArgs),

    /// Initialise an etlforge configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 etlforge init           # global config\n\
            \x20 etlforge init --local   # ./.etlforge.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 etlforge completions bash > ~/.local/share/bash-completion/completions/etlforge\n\
            \x20 etlforge completions zsh  > ~/.zfunc/_etlforge\n\
            \x20 etlforge completions fish > ~/.config/fish/completions/etlforge.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `etlforge new`.
///
/// Every answer the interactive flow collects can also be supplied as a
/// flag; when all of name, category, and subcategory are present the command
/// runs without prompting.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name (letters, digits, underscore).
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    /// Category the project files under.
    #[arg(
        short = 'C',
        long = "category",
        value_name = "CATEGORY",
        help = "Project category"
    )]
    pub category: Option<String>,

    /// Subcategory within the chosen category.
    #[arg(
        short = 's',
        long = "subcategory",
        value_name = "SUBCATEGORY",
        help = "Project subcategory"
    )]
    pub subcategory: Option<String>,

    /// Include an extractor stage.
    #[arg(long = "extractor", help = "Generate an extractor stage file")]
    pub extractor: bool,

    /// Include a transform stage.
    #[arg(long = "transform", help = "Generate a transform stage file")]
    pub transform: bool,

    /// Include a loader stage.
    #[arg(long = "loader", help = "Generate a loader stage file")]
    pub loader: bool,

    /// Override the configured base project folder.
    #[arg(
        short = 'r',
        long = "root",
        value_name = "DIR",
        help = "Base folder to scaffold under"
    )]
    pub root: Option<PathBuf>,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and scaffold immediately"
    )]
    pub yes: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `etlforge list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable listing.
    Table,
    /// One name per line.
    List,
    /// JSON object.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `etlforge init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.etlforge.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `etlforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
