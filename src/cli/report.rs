//! Report formatting and printing utilities.
//!
//! Issues are shown in cargo-style format; command summaries get their own
//! short printers. Kept apart from the engine so the crate stays usable as a
//! library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CleanSummary, CommandResult, CommandSummary, ExportSummary, InitSummary, LookupSummary,
    StatsSummary, SyncCommandSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::CatalogStats;
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stdout.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    let max_line_width = calculate_max_line_width(&sorted);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(files: usize) {
    print_success_to(files, &mut io::stdout().lock());
}

pub fn print_success_to<W: Write>(files: usize, writer: &mut W) {
    let msg = format!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} translation {} - no issues found",
            files,
            if files == 1 { "file" } else { "files" }
        )
        .green()
    );
    let _ = writeln!(writer, "{}", msg);
}

/// Print a warning about files that could not be parsed.
pub fn print_parse_warning(count: usize, verbose: bool) {
    print_parse_warning_to(count, verbose, &mut io::stderr().lock());
}

pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    match issue.location() {
        ReportLocation::Message(ctx) => {
            let _ = writeln!(
                writer,
                "  {} {}:{}",
                "-->".blue(),
                ctx.file_path(),
                ctx.line()
            );
        }
        ReportLocation::File { path } => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
        }
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer);
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;

    let _ = writeln!(
        writer,
        "{} {} problems ({} {}, {} {})",
        FAILURE_MARK.red(),
        issues.len(),
        total_errors,
        if total_errors == 1 { "error" } else { "errors" }.red(),
        total_warnings,
        if total_warnings == 1 {
            "warning"
        } else {
            "warnings"
        }
        .yellow()
    );
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Message(ctx) => Some(ctx.line()),
            ReportLocation::File { .. } => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
    print_parse_warning(result.parse_error_count, verbose);
}

/// Print the command output, then the issues (or a success line for `check`).
pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Check => {
            if result.issues.is_empty() {
                print_success_to(result.files_checked, writer);
            }
        }
        CommandSummary::Stats(summary) => print_stats(summary, writer),
        CommandSummary::Lookup(summary) => print_lookup(summary, verbose, writer),
        CommandSummary::Export(summary) => print_export(summary, writer),
        CommandSummary::Clean(summary) => print_clean(summary, writer),
        CommandSummary::Sync(summary) => print_sync(summary, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
    // Keep stdout valid JSON.
    if matches!(&result.summary, CommandSummary::Stats(s) if s.json) {
        report_to(&result.issues, &mut io::stderr().lock());
    } else {
        report_to(&result.issues, writer);
    }
}

fn print_stats<W: Write>(summary: &StatsSummary, writer: &mut W) {
    if summary.json {
        let json = serde_json::to_string_pretty(&summary.catalogs).unwrap_or_default();
        let _ = writeln!(writer, "{}", json);
        return;
    }
    if summary.catalogs.is_empty() {
        let _ = writeln!(writer, "No catalogs found.");
        return;
    }

    let file_width = summary
        .catalogs
        .iter()
        .map(|s| UnicodeWidthStr::width(s.file.as_str()))
        .max()
        .unwrap_or(0)
        .max("file".len());

    let _ = writeln!(
        writer,
        "{}",
        format!(
            "{:<file_width$}  {:<8} {:>8} {:>8} {:>10} {:>8} {:>7}",
            "file",
            "language",
            "messages",
            "finished",
            "unfinished",
            "obsolete",
            "done",
            file_width = file_width
        )
        .bold()
    );
    for stats in &summary.catalogs {
        let _ = writeln!(writer, "{}", stats_row(stats, file_width));
    }
}

fn stats_row(stats: &CatalogStats, file_width: usize) -> String {
    let padding = file_width.saturating_sub(UnicodeWidthStr::width(stats.file.as_str()));
    let done = format!("{:.1}%", stats.percent_done);
    let done = if stats.unfinished == 0 {
        done.green()
    } else {
        done.yellow()
    };
    format!(
        "{}{:padding$}  {:<8} {:>8} {:>8} {:>10} {:>8} {:>7}",
        stats.file,
        "",
        stats.language.as_deref().unwrap_or("-"),
        stats.messages,
        stats.finished,
        stats.unfinished,
        stats.obsolete,
        done,
        padding = padding
    )
}

fn print_lookup<W: Write>(summary: &LookupSummary, verbose: bool, writer: &mut W) {
    let _ = writeln!(writer, "{}", summary.text);
    if verbose && !summary.translated {
        eprintln!("{} no translation, source text returned", "note:".bold());
    }
}

fn print_export<W: Write>(summary: &ExportSummary, writer: &mut W) {
    match &summary.output {
        Some(path) => {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Exported {} entries to {}", summary.entry_count, path).green()
            );
        }
        None => {
            let _ = writeln!(writer, "{}", summary.json);
        }
    }
}

fn print_clean<W: Write>(summary: &CleanSummary, writer: &mut W) {
    let total = summary.removed_total();
    if total == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "No obsolete messages found".green()
        );
        return;
    }

    for file in &summary.files {
        let _ = writeln!(
            writer,
            "  {} {}: {} message(s)",
            "-".red(),
            file.file_path,
            file.removed
        );
    }
    if summary.is_apply {
        let _ = writeln!(
            writer,
            "{} {} obsolete message(s) in {} file(s).",
            "Removed".green().bold(),
            total,
            summary.files.len()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} obsolete message(s) in {} file(s).",
            "Would remove".yellow().bold(),
            total,
            summary.files.len()
        );
        let _ = writeln!(writer, "Run with {} to rewrite these files.", "--apply".cyan());
    }
}

fn print_sync<W: Write>(summary: &SyncCommandSummary, writer: &mut W) {
    if summary.files.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("All catalogs match {}", summary.template).green()
        );
        return;
    }

    for file in &summary.files {
        let s = &file.summary;
        let _ = writeln!(
            writer,
            "  {}: {} added, {} obsoleted, {} dropped, {} revived",
            file.file_path, s.added, s.obsoleted, s.dropped, s.revived
        );
    }
    let verb = if summary.is_apply {
        "Updated".green().bold()
    } else {
        "Would update".yellow().bold()
    };
    let _ = writeln!(
        writer,
        "{} {} file(s) from {}.",
        verb,
        summary.files.len(),
        summary.template
    );
    if !summary.is_apply {
        let _ = writeln!(writer, "Run with {} to rewrite these files.", "--apply".cyan());
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
    if let Some(error) = &summary.error {
        eprintln!("Error: {}", error);
    }
}

// ============================================================
// Tests
// ============================================================
