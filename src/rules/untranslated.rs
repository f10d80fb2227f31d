//! Untranslated message detection rule.
//!
//! Reports active messages whose translation is empty (for numerus messages,
//! any empty plural form). These fall back to the source text at runtime.
//! Sources without alphabetic characters (`"%1 / %2"`, `"..."`) are skipped.

use crate::{
    config::Config,
    core::{LoadedCatalog, Message, Translation},
    issues::UntranslatedIssue,
    rules::helpers::{active_messages, message_context},
    utils::contains_alphabetic,
};

pub fn check_untranslated(loaded: &LoadedCatalog, config: &Config) -> Vec<UntranslatedIssue> {
    active_messages(loaded, config)
        .filter(|(_, message)| contains_alphabetic(&message.source) && is_incomplete(message))
        .map(|(context, message)| UntranslatedIssue {
            context: message_context(loaded, context, message),
            language: loaded.catalog.language.clone(),
        })
        .collect()
}

fn is_incomplete(message: &Message) -> bool {
    match &message.translation {
        Translation::Text(text) => text.is_empty(),
        Translation::Numerus(forms) => forms.is_empty() || forms.iter().any(|f| f.is_empty()),
    }
}
