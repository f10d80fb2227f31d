use crate::{
    cli::exit_status::ExitStatus,
    core::{CatalogStats, SyncSummary},
    issues::Issue,
};

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Stats(StatsSummary),
    Lookup(LookupSummary),
    Export(ExportSummary),
    Clean(CleanSummary),
    Sync(SyncCommandSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct StatsSummary {
    pub catalogs: Vec<CatalogStats>,
    pub json: bool,
}

#[derive(Debug)]
pub struct LookupSummary {
    pub text: String,
    /// False when the source text was returned as fallback.
    pub translated: bool,
}

#[derive(Debug)]
pub struct ExportSummary {
    /// Destination file, `None` when the JSON goes to stdout.
    pub output: Option<String>,
    pub json: String,
    pub entry_count: usize,
}

/// Retired messages removed from one file.
#[derive(Debug, Clone)]
pub struct CleanFileSummary {
    pub file_path: String,
    pub removed: usize,
}

#[derive(Debug)]
pub struct CleanSummary {
    pub files: Vec<CleanFileSummary>,
    pub is_apply: bool,
}

impl CleanSummary {
    pub fn removed_total(&self) -> usize {
        self.files.iter().map(|f| f.removed).sum()
    }
}

#[derive(Debug, Clone)]
pub struct SyncFileSummary {
    pub file_path: String,
    pub summary: SyncSummary,
}

#[derive(Debug)]
pub struct SyncCommandSummary {
    pub template: String,
    pub files: Vec<SyncFileSummary>,
    pub is_apply: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    pub error: Option<String>,
}

/// Result of running tsctl commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    pub exit_on_errors: bool,
    /// All issues found by the command (rule issues and load failures).
    pub issues: Vec<Issue>,
    /// Number of files that failed to parse.
    pub parse_error_count: usize,
    /// Number of `.ts` files the command looked at.
    pub files_checked: usize,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        if self.exit_on_errors && self.error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
