//! Trailing punctuation mismatch detection rule.
//!
//! Menu entries opening a dialog end with an ellipsis, form labels with a
//! colon, and so on. A translation should keep the same ending.

use crate::{
    config::Config,
    core::LoadedCatalog,
    issues::EndingMismatchIssue,
    rules::helpers::{active_messages, message_context},
    utils::ending,
};

pub fn check_ending_mismatch(loaded: &LoadedCatalog, config: &Config) -> Vec<EndingMismatchIssue> {
    let mut issues = Vec::new();

    for (context, message) in active_messages(loaded, config) {
        let expected = ending(&message.source);
        for text in message.translation.texts() {
            let found = ending(text);
            if found != expected {
                issues.push(EndingMismatchIssue {
                    context: message_context(loaded, context, message),
                    translation: text.to_string(),
                    expected: expected.to_string(),
                    found: found.to_string(),
                });
            }
        }
    }

    issues
}
