use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::{
    cli::args::CommonArgs,
    config::load_config,
    core::{CatalogStats, CheckContext, Translator, parse_file},
    issues::{Issue, Severity},
    rules::{ALL_RULES, run_rules},
};

use super::types::{
    CatalogInfo, CatalogsResult, ConfigDto, ConfigValues, GetConfigParams, IssueItem,
    IssuesScanResult, ListCatalogsParams, LookupResult, LookupTranslationParams, Pagination,
    RuleStats, ScanIssuesParams, ScanOverviewParams, ScanOverviewResult,
};

const DEFAULT_LIMIT: usize = 20;
const MAX_LIMIT: usize = 100;

#[derive(Clone)]
pub struct TsctlMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for TsctlMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl TsctlMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get the current tsctl configuration
    #[tool(description = "Get the current tsctl configuration.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        to_tool_result(&ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        })
    }

    /// List translation catalogs with their progress
    #[tool(
        description = "List Qt Linguist .ts catalogs with language and translation progress (finished, unfinished, obsolete counts)."
    )]
    pub async fn list_catalogs(
        &self,
        params: Parameters<ListCatalogsParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = load_context(&params.0.project_root_path)?;

        let catalogs: Vec<CatalogInfo> = ctx
            .catalogs()
            .iter()
            .map(|loaded| CatalogInfo::from(CatalogStats::from_loaded(loaded)))
            .collect();
        let parse_errors: Vec<IssueItem> = ctx
            .parse_errors()
            .iter()
            .cloned()
            .map(|e| IssueItem::from(&Issue::ParseError(e)))
            .collect();

        to_tool_result(&CatalogsResult {
            translations_root: ctx.config.translations_root.clone(),
            catalogs,
            parse_errors,
        })
    }

    /// Get overview statistics of all catalog issues
    #[tool(
        description = "Get per-rule statistics of all catalog issues without detailed items. Use this first to understand the overall state before diving into details."
    )]
    pub async fn scan_overview(
        &self,
        params: Parameters<ScanOverviewParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = load_context(&params.0.project_root_path)?;
        let issues = run_rules(&ctx, ALL_RULES);

        let mut by_rule: BTreeMap<String, (Severity, usize, HashSet<&str>)> = BTreeMap::new();
        for issue in &issues {
            let entry = by_rule
                .entry(issue.rule().to_string())
                .or_insert_with(|| (issue.severity(), 0, HashSet::new()));
            entry.1 += 1;
            entry.2.insert(issue.file_path());
        }

        let error_count = issues
            .iter()
            .filter(|i| i.severity() == Severity::Error)
            .count();

        to_tool_result(&ScanOverviewResult {
            catalog_count: ctx.files_checked(),
            total_count: issues.len(),
            error_count,
            warning_count: issues.len() - error_count,
            rules: by_rule
                .into_iter()
                .map(|(rule, (severity, total_count, files))| RuleStats {
                    rule,
                    severity: severity.to_string(),
                    total_count,
                    file_count: files.len(),
                })
                .collect(),
        })
    }

    /// Get detailed issues, optionally filtered by rule
    #[tool(
        description = "Scan catalogs for issues (placeholder-mismatch, duplicate-message, untranslated, accelerator-mismatch, ending-mismatch, obsolete, parse-error). Returns paginated list of issues, optionally filtered by rule."
    )]
    pub async fn scan_issues(
        &self,
        params: Parameters<ScanIssuesParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let limit = params
            .limit
            .map(|v| v as usize)
            .unwrap_or(DEFAULT_LIMIT)
            .min(MAX_LIMIT);
        let offset = params.offset.map(|v| v as usize).unwrap_or(0);

        let rules = match &params.rule {
            Some(name) => {
                let rule = ALL_RULES
                    .iter()
                    .copied()
                    .chain(std::iter::once(crate::issues::Rule::ParseError))
                    .find(|r| r.to_string() == *name)
                    .ok_or_else(|| {
                        McpError::invalid_params(format!("Unknown rule: {}", name), None)
                    })?;
                vec![rule]
            }
            None => ALL_RULES.to_vec(),
        };

        let ctx = load_context(&params.project_root_path)?;
        let all_items: Vec<IssueItem> = run_rules(&ctx, &rules)
            .iter()
            .filter(|i| params.rule.is_none() || rules.contains(&i.rule()))
            .map(IssueItem::from)
            .collect();

        let total_count = all_items.len();
        let items: Vec<IssueItem> = all_items.into_iter().skip(offset).take(limit).collect();
        let has_more = offset + items.len() < total_count;

        to_tool_result(&IssuesScanResult {
            total_count,
            items,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        })
    }

    /// Look up one string the way the application would
    #[tool(
        description = "Look up the translation of a source string in a catalog. Falls back to the source text when no usable translation exists, like QTranslator."
    )]
    pub async fn lookup_translation(
        &self,
        params: Parameters<LookupTranslationParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let root = PathBuf::from(&params.project_root_path);
        let config = load_config(&root)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?
            .config;

        let file = Path::new(&params.file);
        let file = if file.is_absolute() {
            file.to_path_buf()
        } else {
            root.join(file)
        };
        let catalog = parse_file(&file)
            .map_err(|e| McpError::invalid_params(format!("{:#}", e), None))?;

        let translator = Translator::new(&catalog, config.lookup_options());
        let comment = params.comment.as_deref().unwrap_or("");
        let text = match params.count {
            Some(n) => translator.translate_plural(&params.context, &params.source, comment, n),
            None => translator
                .translate(&params.context, &params.source, comment)
                .to_string(),
        };

        to_tool_result(&LookupResult {
            translated: translator.contains(&params.context, &params.source, comment),
            text,
        })
    }
}

fn load_context(project_root_path: &str) -> Result<CheckContext, McpError> {
    let common = CommonArgs {
        path: PathBuf::from(project_root_path),
        translations_root: None,
        verbose: false,
    };
    CheckContext::new(&common, &[])
        .map_err(|e| McpError::internal_error(format!("Failed to initialize: {}", e), None))
}

fn to_tool_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_handler]
impl ServerHandler for TsctlMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "tsctl MCP helps AI agents review and complete Qt Linguist (.ts) translations.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. list_catalogs - List catalogs with language and progress\n\
                 3. scan_overview - Get per-rule issue statistics\n\
                 4. scan_issues - Get detailed issues (paginated, filter by rule)\n\
                 5. lookup_translation - Resolve one string with source-text fallback\n\n\
                 Recommended Workflow:\n\
                 1. Use scan_overview to understand the overall state\n\
                 2. Fix errors first (parse-error, placeholder-mismatch, duplicate-message)\n\
                 3. Then translate untranslated messages, catalog by catalog\n\
                 4. Finally review accelerator-mismatch and ending-mismatch warnings"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = TsctlMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
