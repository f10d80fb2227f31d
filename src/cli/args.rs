//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Run catalog checks (placeholders, duplicates, untranslated, ...)
//! - `stats`: Per-catalog translation progress
//! - `lookup`: Translate one string the way the application would
//! - `export`: Dump the runtime lookup table as JSON
//! - `clean`: Remove obsolete and vanished messages
//! - `sync`: Merge a fresh extraction into existing catalogs
//! - `init`: Initialize tsctl configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use super::commands::check::CheckRule;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Stats(cmd)) => cmd.args.common.verbose,
            Some(Command::Lookup(cmd)) => cmd.args.common.verbose,
            Some(Command::Export(cmd)) => cmd.args.common.verbose,
            Some(Command::Clean(cmd)) => cmd.args.common.verbose,
            Some(Command::Sync(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root (where .tsctlrc.json is searched from)
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Translations directory (overrides config file)
    #[arg(long)]
    pub translations_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Check only these catalogs (default: discover from config)
    /// Can be specified multiple times: --file a.ts --file b.ts
    #[arg(long = "file", value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all)
    #[arg(value_enum)]
    pub checks: Vec<CheckRule>,
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Parser)]
pub struct StatsArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Catalogs to summarize (default: discover from config)
    pub files: Vec<PathBuf>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct StatsCommand {
    #[command(flatten)]
    pub args: StatsArgs,
}

#[derive(Debug, Parser)]
pub struct LookupArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Catalog to look the string up in
    pub file: PathBuf,

    /// Context (class or dialog) name
    #[arg(long)]
    pub context: String,

    /// Source text
    #[arg(long)]
    pub source: String,

    /// Disambiguation comment
    #[arg(long, default_value = "")]
    pub comment: String,

    /// Count for numerus messages (selects the plural form, fills %n)
    #[arg(short = 'n', long = "count", allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Values for %1, %2, ... / {0}, {1}, ...
    /// Can be specified multiple times: --arg foo.h5 --arg /tmp
    #[arg(long = "arg", value_name = "VALUE")]
    pub values: Vec<String>,

    /// Ignore translations marked unfinished
    #[arg(long)]
    pub no_unfinished: bool,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    #[command(flatten)]
    pub args: LookupArgs,
}

#[derive(Debug, Parser)]
pub struct ExportArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Catalog to export
    pub file: PathBuf,

    /// Write JSON here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Ignore translations marked unfinished
    #[arg(long)]
    pub no_unfinished: bool,
}

#[derive(Debug, Args)]
pub struct ExportCommand {
    #[command(flatten)]
    pub args: ExportArgs,
}

#[derive(Debug, Parser)]
pub struct CleanArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Catalogs to clean (default: discover from config)
    pub files: Vec<PathBuf>,

    /// Actually rewrite files (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Args)]
pub struct CleanCommand {
    #[command(flatten)]
    pub args: CleanArgs,
}

#[derive(Debug, Parser)]
pub struct SyncArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Freshly extracted catalog (overrides `template` in config file)
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Catalogs to update (default: discover from config)
    pub files: Vec<PathBuf>,

    /// Actually rewrite files (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Args)]
pub struct SyncCommand {
    #[command(flatten)]
    pub args: SyncArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check catalogs for issues (placeholders, duplicates, untranslated, ...)
    Check(CheckCommand),
    /// Show translation progress per catalog
    Stats(StatsCommand),
    /// Look up a translation with source-text fallback
    Lookup(LookupCommand),
    /// Export the lookup table of a catalog as JSON
    Export(ExportCommand),
    /// Remove obsolete and vanished messages from catalogs
    Clean(CleanCommand),
    /// Merge a freshly extracted template into catalogs
    Sync(SyncCommand),
    /// Initialize a new .tsctlrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
