//! Issue types for catalog analysis results.
//!
//! Each issue is self-contained with everything the reporter (CLI or MCP)
//! needs to display it: the `.ts` file, the line of the `<message>`, the
//! owning context and the source text.

use std::cmp::Ordering;

use enum_dispatch::enum_dispatch;

use crate::core::TranslationStatus;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rule {
    PlaceholderMismatch,
    DuplicateMessage,
    Untranslated,
    AcceleratorMismatch,
    EndingMismatch,
    Obsolete,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::PlaceholderMismatch => write!(f, "placeholder-mismatch"),
            Rule::DuplicateMessage => write!(f, "duplicate-message"),
            Rule::Untranslated => write!(f, "untranslated"),
            Rule::AcceleratorMismatch => write!(f, "accelerator-mismatch"),
            Rule::EndingMismatch => write!(f, "ending-mismatch"),
            Rule::Obsolete => write!(f, "obsolete"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Message location
// ============================================================

/// Where a message lives: catalog file, line of `<message>`, owning context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageContext {
    pub file_path: String,
    pub line: usize,
    /// Name of the `<context>` the message belongs to.
    pub context: String,
    pub source: String,
    pub comment: Option<String>,
}

impl MessageContext {
    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn line(&self) -> usize {
        self.line
    }

    /// `Context::source` label, with the disambiguation comment if any.
    pub fn label(&self) -> String {
        match &self.comment {
            Some(comment) if !comment.is_empty() => {
                format!("{}::{} ({})", self.context, self.source, comment)
            }
            _ => format!("{}::{}", self.context, self.source),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Translation whose placeholders differ from the source's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMismatchIssue {
    pub context: MessageContext,
    pub translation: String,
    /// In the source but not in the translation.
    pub missing: Vec<String>,
    /// In the translation but not in the source.
    pub unexpected: Vec<String>,
}

impl PlaceholderMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::PlaceholderMismatch
    }
}

/// (source, comment) repeated within one context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateMessageIssue {
    pub context: MessageContext,
    /// Line of the first occurrence.
    pub first_line: usize,
}

impl DuplicateMessageIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::DuplicateMessage
    }
}

/// Active message with no translation text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UntranslatedIssue {
    pub context: MessageContext,
    pub language: Option<String>,
}

impl UntranslatedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Untranslated
    }
}

/// Keyboard accelerator (`&X`) present on one side only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceleratorMismatchIssue {
    pub context: MessageContext,
    pub translation: String,
    pub source_has_accelerator: bool,
}

impl AcceleratorMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::AcceleratorMismatch
    }
}

/// Trailing punctuation differs between source and translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndingMismatchIssue {
    pub context: MessageContext,
    pub translation: String,
    pub expected: String,
    pub found: String,
}

impl EndingMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::EndingMismatch
    }
}

/// Obsolete or vanished message still kept in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObsoleteIssue {
    pub context: MessageContext,
    pub status: TranslationStatus,
}

impl ObsoleteIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Obsolete
    }
}

/// File could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A catalog issue found during analysis.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    PlaceholderMismatch(PlaceholderMismatchIssue),
    DuplicateMessage(DuplicateMessageIssue),
    Untranslated(UntranslatedIssue),
    AcceleratorMismatch(AcceleratorMismatchIssue),
    EndingMismatch(EndingMismatchIssue),
    Obsolete(ObsoleteIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }

    pub fn file_path(&self) -> &str {
        match self.location() {
            ReportLocation::Message(ctx) => ctx.file_path(),
            ReportLocation::File { path } => path,
        }
    }

    pub fn line(&self) -> usize {
        match self.location() {
            ReportLocation::Message(ctx) => ctx.line(),
            ReportLocation::File { .. } => 0,
        }
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Issue {
    /// File, then line, then rule, then message.
    fn cmp(&self, other: &Self) -> Ordering {
        self.file_path()
            .cmp(other.file_path())
            .then_with(|| self.line().cmp(&other.line()))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// A message inside a catalog.
    Message(&'a MessageContext),
    /// File-level only (for ParseError - no line context).
    File { path: &'a str },
}

/// Trait for types that can be reported to CLI.
///
/// Implemented by all issue types; `enum_dispatch` forwards calls on
/// [`Issue`] without dynamic dispatch.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<String> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for PlaceholderMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.label()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            parts.push(format!("missing {}", self.missing.join(", ")));
        }
        if !self.unexpected.is_empty() {
            parts.push(format!("unexpected {}", self.unexpected.join(", ")));
        }
        Some(format!("{} in \"{}\"", parts.join("; "), self.translation))
    }
}

impl Report for DuplicateMessageIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.label()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("first defined at line {}", self.first_line))
    }

    fn hint(&self) -> Option<String> {
        Some("add a <comment> to disambiguate or remove the duplicate".to_string())
    }
}

impl Report for UntranslatedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.label()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        self.language
            .as_ref()
            .map(|language| format!("falls back to source text in '{}'", language))
    }
}

impl Report for AcceleratorMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.label()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        if self.source_has_accelerator {
            Some(format!("translation \"{}\" has no '&' accelerator", self.translation))
        } else {
            Some(format!(
                "translation \"{}\" adds an accelerator the source does not have",
                self.translation
            ))
        }
    }
}

impl Report for EndingMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.label()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let show = |s: &str| {
            if s.is_empty() {
                "nothing".to_string()
            } else {
                format!("\"{}\"", s)
            }
        };
        Some(format!(
            "source ends with {}, translation \"{}\" ends with {}",
            show(&self.expected),
            self.translation,
            show(&self.found)
        ))
    }
}

impl Report for ObsoleteIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.label()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("marked {}", self.status))
    }

    fn hint(&self) -> Option<String> {
        Some("run `tsctl clean --apply` to prune retired messages".to_string())
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}
