//! Placeholder mismatch detection rule.
//!
//! A translation must carry the same positional placeholders as its source,
//! otherwise `QString::arg` / `str.format` substitutes into the wrong slot or
//! drops a value. The `%n` count is exempt for numerus messages since
//! singular forms commonly spell the number out.

use std::collections::BTreeSet;

use crate::{
    config::Config,
    core::{LoadedCatalog, Translation, placeholder::placeholders},
    issues::PlaceholderMismatchIssue,
    rules::helpers::{active_messages, message_context},
};

pub fn check_placeholder_mismatch(
    loaded: &LoadedCatalog,
    config: &Config,
) -> Vec<PlaceholderMismatchIssue> {
    let mut issues = Vec::new();

    for (context, message) in active_messages(loaded, config) {
        let numerus = matches!(message.translation, Translation::Numerus(_));
        let expected = placeholder_set(&message.source, numerus);

        for text in message.translation.texts() {
            let found = placeholder_set(text, numerus);
            if found == expected {
                continue;
            }
            issues.push(PlaceholderMismatchIssue {
                context: message_context(loaded, context, message),
                translation: text.to_string(),
                missing: expected.difference(&found).cloned().collect(),
                unexpected: found.difference(&expected).cloned().collect(),
            });
        }
    }

    issues
}

fn placeholder_set(text: &str, numerus: bool) -> BTreeSet<String> {
    placeholders(text)
        .into_iter()
        .filter(|p| !(numerus && p == "%n"))
        .collect()
}
