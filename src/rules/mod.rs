//! Rule implementations for tsctl.
//!
//! Each rule is a pure function over one loaded catalog and the config,
//! returning its specific issue type.
//!
//! - `helpers`: message iteration and report locations
//! - `placeholder`: `%1` / `{0}` sets differing between source and translation
//! - `duplicate`: repeated (source, comment) in a context
//! - `untranslated`: active messages without translation text
//! - `accelerator`: `&` shortcut gained or lost
//! - `ending`: trailing punctuation differences
//! - `obsolete`: retired messages still kept in the file

pub mod accelerator;
pub mod duplicate;
pub mod ending;
pub mod helpers;
pub mod obsolete;
pub mod placeholder;
pub mod untranslated;

pub use accelerator::check_accelerator_mismatch;
pub use duplicate::check_duplicate_messages;
pub use ending::check_ending_mismatch;
pub use obsolete::check_obsolete;
pub use placeholder::check_placeholder_mismatch;
pub use untranslated::check_untranslated;

use rayon::prelude::*;

use crate::{
    config::Config,
    core::{CheckContext, LoadedCatalog},
    issues::{Issue, Rule},
};

/// Rules that `check` runs when none are named.
pub const ALL_RULES: &[Rule] = &[
    Rule::PlaceholderMismatch,
    Rule::DuplicateMessage,
    Rule::Untranslated,
    Rule::AcceleratorMismatch,
    Rule::EndingMismatch,
    Rule::Obsolete,
];

/// Run `rules` over one catalog.
pub fn check_catalog(loaded: &LoadedCatalog, config: &Config, rules: &[Rule]) -> Vec<Issue> {
    let mut issues = Vec::new();
    for rule in rules {
        match rule {
            Rule::PlaceholderMismatch => issues.extend(
                check_placeholder_mismatch(loaded, config)
                    .into_iter()
                    .map(Issue::PlaceholderMismatch),
            ),
            Rule::DuplicateMessage => issues.extend(
                check_duplicate_messages(loaded, config)
                    .into_iter()
                    .map(Issue::DuplicateMessage),
            ),
            Rule::Untranslated => issues.extend(
                check_untranslated(loaded, config)
                    .into_iter()
                    .map(Issue::Untranslated),
            ),
            Rule::AcceleratorMismatch => issues.extend(
                check_accelerator_mismatch(loaded, config)
                    .into_iter()
                    .map(Issue::AcceleratorMismatch),
            ),
            Rule::EndingMismatch => issues.extend(
                check_ending_mismatch(loaded, config)
                    .into_iter()
                    .map(Issue::EndingMismatch),
            ),
            Rule::Obsolete => issues.extend(
                check_obsolete(loaded, config)
                    .into_iter()
                    .map(Issue::Obsolete),
            ),
            // Reported by the loader, not by a catalog rule.
            Rule::ParseError => {}
        }
    }
    issues
}

/// Run `rules` over every loaded catalog and add the load failures.
///
/// The result is sorted by file, line and rule.
pub fn run_rules(ctx: &CheckContext, rules: &[Rule]) -> Vec<Issue> {
    let mut issues: Vec<Issue> = ctx
        .catalogs()
        .par_iter()
        .flat_map_iter(|loaded| check_catalog(loaded, &ctx.config, rules))
        .collect();
    issues.extend(ctx.parse_errors().iter().cloned().map(Issue::ParseError));
    issues.sort();
    tracing::debug!(count = issues.len(), "rules finished");
    issues
}
