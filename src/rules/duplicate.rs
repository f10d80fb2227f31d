//! Duplicate message detection rule.
//!
//! Within one context, lookup is keyed by (source, comment). A second active
//! message with the same key is unreachable at runtime.

use std::collections::HashMap;

use crate::{
    config::Config,
    core::{LoadedCatalog, MessageKey},
    issues::DuplicateMessageIssue,
    rules::helpers::message_context,
};

pub fn check_duplicate_messages(
    loaded: &LoadedCatalog,
    config: &Config,
) -> Vec<DuplicateMessageIssue> {
    let mut issues = Vec::new();
    // Keyed by context name: split <context> elements share one lookup table.
    let mut first_seen: HashMap<(&str, MessageKey<'_>), usize> = HashMap::new();

    for context in &loaded.catalog.contexts {
        if config.is_context_ignored(&context.name) {
            continue;
        }
        for message in context.messages.iter().filter(|m| m.is_active()) {
            let key = (context.name.as_str(), message.key());
            match first_seen.get(&key) {
                Some(&first_line) => issues.push(DuplicateMessageIssue {
                    context: message_context(loaded, &context.name, message),
                    first_line,
                }),
                None => {
                    first_seen.insert(key, message.ts_line);
                }
            }
        }
    }

    issues
}
