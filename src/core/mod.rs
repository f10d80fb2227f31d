//! Catalog engine.
//!
//! - `catalog`: in-memory model of a `.ts` document
//! - `parser` / `writer`: quick-xml based reading and lupdate-layout writing
//! - `lookup`: runtime lookup table with source-string fallback
//! - `plural` / `placeholder`: numerus form selection and `%1` / `{0}` handling
//! - `sync`: re-extraction merge and pruning of retired entries
//! - `file_scanner` / `context`: catalog discovery and parallel loading
//! - `stats`: per-catalog progress figures

pub mod catalog;
pub mod context;
pub mod file_scanner;
pub mod lookup;
pub mod parser;
pub mod placeholder;
pub mod plural;
pub mod stats;
pub mod sync;
pub mod writer;

pub use catalog::{
    Catalog, Context, LineRef, Location, Message, MessageKey, StatusCounts, Translation,
    TranslationStatus,
};
pub use context::{CheckContext, LoadedCatalog, load_catalogs};
pub use lookup::{LookupOptions, Translator};
pub use parser::{parse_file, parse_str};
pub use stats::CatalogStats;
pub use sync::{SyncSummary, prune, sync};
