use serde::Serialize;

use super::context::LoadedCatalog;

/// Translation progress of one catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub file: String,
    pub language: Option<String>,
    pub contexts: usize,
    /// Active (not obsolete/vanished) messages.
    pub messages: usize,
    pub finished: usize,
    pub unfinished: usize,
    pub obsolete: usize,
    pub percent_done: f64,
}

impl CatalogStats {
    pub fn from_loaded(loaded: &LoadedCatalog) -> Self {
        let counts = loaded.catalog.status_counts();
        Self {
            file: loaded.display_path.clone(),
            language: loaded.catalog.language.clone(),
            contexts: loaded.catalog.contexts.len(),
            messages: counts.active(),
            finished: counts.finished,
            unfinished: counts.unfinished,
            obsolete: counts.obsolete,
            percent_done: (counts.percent_done() * 10.0).round() / 10.0,
        }
    }
}
