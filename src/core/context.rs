use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{catalog::Catalog, file_scanner::scan_catalog_files, parser::parse_file},
    issues::ParseErrorIssue,
};

/// A catalog together with the file it was read from.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    /// Path on disk.
    pub path: PathBuf,
    /// Path as shown in reports (relative to the project root when possible).
    pub display_path: String,
    pub catalog: Catalog,
}

/// Configuration plus every catalog a command operates on.
///
/// Configuration is resolved with the following priority (highest to lowest):
/// 1. CLI arguments (`--translations-root`)
/// 2. `.tsctlrc.json` config file
/// 3. Built-in defaults
pub struct CheckContext {
    pub config: Config,

    /// Project root directory (for resolving relative paths).
    pub root_dir: PathBuf,

    pub verbose: bool,

    catalogs: Vec<LoadedCatalog>,

    parse_errors: Vec<ParseErrorIssue>,
}

impl CheckContext {
    /// Load configuration from `common_args.path` and the catalogs to work on.
    ///
    /// Explicit `files` win over discovery; otherwise every catalog under the
    /// translations root matching the config patterns is loaded. Files that
    /// fail to parse are recorded as [`ParseErrorIssue`]s.
    pub fn new(common_args: &CommonArgs, files: &[PathBuf]) -> Result<Self> {
        let root_dir = common_args.path.clone();
        let config_result = load_config(&root_dir)?;
        if !config_result.from_file {
            tracing::debug!("no {} found, using defaults", crate::config::CONFIG_FILE_NAME);
        }

        let mut config = config_result.config;
        if let Some(root) = &common_args.translations_root {
            config.translations_root = root.to_string_lossy().to_string();
        }

        let paths = if files.is_empty() {
            let translations_dir = resolve_relative(&root_dir, &config.translations_root);
            let exclude: Vec<PathBuf> = config
                .template
                .as_deref()
                .map(|t| resolve_relative(&root_dir, t))
                .into_iter()
                .collect();
            let scan = scan_catalog_files(
                &translations_dir,
                &config.includes,
                &config.ignores,
                &exclude,
            );
            if scan.skipped_count > 0 {
                eprintln!(
                    "Warning: {} path(s) skipped due to access errors{}",
                    scan.skipped_count,
                    if common_args.verbose {
                        ""
                    } else {
                        " (use -v for details)"
                    }
                );
            }
            scan.files
        } else {
            for file in files {
                if !file.is_file() {
                    bail!("No such file: {}", file.display());
                }
            }
            files.to_vec()
        };

        let (catalogs, parse_errors) = load_catalogs(&paths, &root_dir);

        Ok(Self {
            config,
            root_dir,
            verbose: common_args.verbose,
            catalogs,
            parse_errors,
        })
    }

    pub fn catalogs(&self) -> &[LoadedCatalog] {
        &self.catalogs
    }

    pub fn parse_errors(&self) -> &[ParseErrorIssue] {
        &self.parse_errors
    }

    /// Number of files considered, including those that failed to parse.
    pub fn files_checked(&self) -> usize {
        self.catalogs.len() + self.parse_errors.len()
    }

    /// Resolve a path from the config relative to the project root.
    pub fn resolve(&self, path: &str) -> PathBuf {
        resolve_relative(&self.root_dir, path)
    }
}

/// Parse catalogs in parallel, keeping input order.
pub fn load_catalogs(
    paths: &[PathBuf],
    root_dir: &Path,
) -> (Vec<LoadedCatalog>, Vec<ParseErrorIssue>) {
    let results: Vec<(PathBuf, String, Result<Catalog>)> = paths
        .par_iter()
        .map(|path| {
            let display_path = display_path(path, root_dir);
            (path.clone(), display_path, parse_file(path))
        })
        .collect();

    let mut catalogs = Vec::new();
    let mut errors = Vec::new();
    for (path, display_path, result) in results {
        match result {
            Ok(catalog) => catalogs.push(LoadedCatalog {
                path,
                display_path,
                catalog,
            }),
            Err(err) => {
                tracing::debug!(path = %path.display(), "failed to load catalog: {:#}", err);
                errors.push(ParseErrorIssue {
                    file_path: display_path,
                    error: err.root_cause().to_string(),
                });
            }
        }
    }
    (catalogs, errors)
}

fn resolve_relative(root_dir: &Path, path: &str) -> PathBuf {
    let p = Path::new(path);
    if p.is_absolute() {
        return p.to_path_buf();
    }
    let rel = p.strip_prefix(".").unwrap_or(p);
    root_dir.join(rel)
}

fn display_path(path: &Path, root_dir: &Path) -> String {
    let relative = path.strip_prefix(root_dir).unwrap_or(path);
    let relative = relative.strip_prefix(".").unwrap_or(relative);
    relative.to_string_lossy().replace('\\', "/")
}
