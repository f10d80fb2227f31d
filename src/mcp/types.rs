use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::CatalogStats;
use crate::issues::{Issue, Report, ReportLocation};

// ============================================================
// Tool Parameters
// ============================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListCatalogsParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanOverviewParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanIssuesParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Only return issues of this rule (e.g. "untranslated", "placeholder-mismatch")
    #[serde(default)]
    pub rule: Option<String>,
    /// Maximum number of items to return (default 20, max 100)
    #[serde(default)]
    pub limit: Option<u32>,
    /// Number of items to skip
    #[serde(default)]
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupTranslationParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Catalog path, absolute or relative to the project root
    pub file: String,
    /// Context (class or dialog) name
    pub context: String,
    /// Source text
    pub source: String,
    /// Disambiguation comment
    #[serde(default)]
    pub comment: Option<String>,
    /// Count for numerus messages
    #[serde(default)]
    pub count: Option<i64>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub ignores: Vec<String>,
    pub includes: Vec<String>,
    pub translations_root: String,
    pub ignore_contexts: Vec<String>,
    pub include_unfinished: bool,
    pub source_language: String,
    pub template: Option<String>,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            ignores: c.ignores,
            includes: c.includes,
            translations_root: c.translations_root,
            ignore_contexts: c.ignore_contexts,
            include_unfinished: c.include_unfinished,
            source_language: c.source_language,
            template: c.template,
        }
    }
}

// ============================================================
// Catalog Types (list_catalogs)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogsResult {
    pub translations_root: String,
    pub catalogs: Vec<CatalogInfo>,
    /// Files that failed to load
    pub parse_errors: Vec<IssueItem>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogInfo {
    pub file_path: String,
    pub language: Option<String>,
    pub contexts: usize,
    pub messages: usize,
    pub finished: usize,
    pub unfinished: usize,
    pub obsolete: usize,
    pub percent_done: f64,
}

impl From<CatalogStats> for CatalogInfo {
    fn from(s: CatalogStats) -> Self {
        Self {
            file_path: s.file,
            language: s.language,
            contexts: s.contexts,
            messages: s.messages,
            finished: s.finished,
            unfinished: s.unfinished,
            obsolete: s.obsolete,
            percent_done: s.percent_done,
        }
    }
}

// ============================================================
// Scan Overview Types (scan_overview)
// ============================================================

/// Result of scan_overview operation - statistics only
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanOverviewResult {
    pub catalog_count: usize,
    pub total_count: usize,
    pub error_count: usize,
    pub warning_count: usize,
    pub rules: Vec<RuleStats>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RuleStats {
    pub rule: String,
    pub severity: String,
    pub total_count: usize,
    pub file_count: usize,
}

// ============================================================
// Issue Types (scan_issues)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssuesScanResult {
    pub total_count: usize,
    pub items: Vec<IssueItem>,
    pub pagination: Pagination,
}

/// A single catalog issue
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueItem {
    pub rule: String,
    pub severity: String,
    pub file_path: String,
    /// Line of the `<message>` element, absent for file-level issues
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<&Issue> for IssueItem {
    fn from(issue: &Issue) -> Self {
        let (file_path, line, context, source, comment) = match issue.location() {
            ReportLocation::Message(ctx) => (
                ctx.file_path.clone(),
                Some(ctx.line),
                Some(ctx.context.clone()),
                Some(ctx.source.clone()),
                ctx.comment.clone(),
            ),
            ReportLocation::File { path } => (path.to_string(), None, None, None, None),
        };
        Self {
            rule: issue.rule().to_string(),
            severity: issue.severity().to_string(),
            file_path,
            line,
            context,
            source,
            comment,
            message: issue.message(),
            details: issue.details(),
        }
    }
}

// ============================================================
// Lookup Types (lookup_translation)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    pub text: String,
    /// False when the source text was returned as fallback
    pub translated: bool,
}

// ============================================================
// Common Types
// ============================================================

/// Pagination information
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}
