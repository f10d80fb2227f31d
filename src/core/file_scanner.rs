use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use walkdir::WalkDir;

/// Result of scanning for catalog files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Catalog paths, sorted.
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// Find `.ts` catalogs under `base_dir`.
///
/// Patterns are matched against the path relative to `base_dir`. A file is
/// kept when it matches any include (or `includes` is empty) and no ignore.
/// Paths listed in `exclude` (e.g. the sync template) are never returned.
pub fn scan_catalog_files(
    base_dir: &Path,
    includes: &[String],
    ignores: &[String],
    exclude: &[PathBuf],
) -> ScanResult {
    let include_patterns = compile(includes);
    let ignore_patterns = compile(ignores);
    let excluded: Vec<PathBuf> = exclude.iter().map(|p| normalize(p)).collect();

    let mut result = ScanResult::default();
    if !base_dir.is_dir() {
        tracing::debug!(path = %base_dir.display(), "translations directory not found");
        return result;
    }

    for entry in WalkDir::new(base_dir).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!("skipping unreadable path: {}", err);
                result.skipped_count += 1;
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("ts") {
            continue;
        }
        let relative = path.strip_prefix(base_dir).unwrap_or(path);
        let included = include_patterns.is_empty()
            || include_patterns
                .iter()
                .any(|p| p.matches_path_with(relative, MATCH_OPTIONS));
        let ignored = ignore_patterns
            .iter()
            .any(|p| p.matches_path_with(relative, MATCH_OPTIONS));
        if !included || ignored || excluded.contains(&normalize(path)) {
            tracing::debug!(path = %path.display(), "skipping file");
            continue;
        }
        result.files.push(path.to_path_buf());
    }

    result.files.sort();
    result
}

fn compile(patterns: &[String]) -> Vec<Pattern> {
    patterns
        .iter()
        .filter_map(|p| match Pattern::new(p) {
            Ok(pattern) => Some(pattern),
            Err(err) => {
                tracing::warn!("invalid pattern '{}': {}", p, err);
                None
            }
        })
        .collect()
}

fn normalize(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
