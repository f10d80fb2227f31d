//! Accelerator mismatch detection rule.

use crate::{
    config::Config,
    core::LoadedCatalog,
    issues::AcceleratorMismatchIssue,
    rules::helpers::{active_messages, message_context},
    utils::accelerator,
};

/// Report translations that gain or lose the `&` shortcut marker of their
/// source. Which letter is marked is up to the translator.
pub fn check_accelerator_mismatch(
    loaded: &LoadedCatalog,
    config: &Config,
) -> Vec<AcceleratorMismatchIssue> {
    let mut issues = Vec::new();

    for (context, message) in active_messages(loaded, config) {
        let source_has_accelerator = accelerator(&message.source).is_some();
        for text in message.translation.texts() {
            if accelerator(text).is_some() != source_has_accelerator {
                issues.push(AcceleratorMismatchIssue {
                    context: message_context(loaded, context, message),
                    translation: text.to_string(),
                    source_has_accelerator,
                });
            }
        }
    }

    issues
}
