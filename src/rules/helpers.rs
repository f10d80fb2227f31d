//! Shared plumbing for rule implementations.

use crate::{
    config::Config,
    core::{LoadedCatalog, Message},
    issues::MessageContext,
};

/// Messages a rule should look at: everything outside ignored contexts,
/// paired with the name of the owning context.
pub fn checked_messages<'a>(
    loaded: &'a LoadedCatalog,
    config: &'a Config,
) -> impl Iterator<Item = (&'a str, &'a Message)> {
    loaded
        .catalog
        .messages()
        .filter(move |(context, _)| !config.is_context_ignored(context))
}

/// Active messages only (obsolete and vanished skipped).
pub fn active_messages<'a>(
    loaded: &'a LoadedCatalog,
    config: &'a Config,
) -> impl Iterator<Item = (&'a str, &'a Message)> {
    checked_messages(loaded, config).filter(|(_, message)| message.is_active())
}

/// Build the report location of `message`.
pub fn message_context(loaded: &LoadedCatalog, context: &str, message: &Message) -> MessageContext {
    MessageContext {
        file_path: loaded.display_path.clone(),
        line: message.ts_line,
        context: context.to_string(),
        source: message.source.clone(),
        comment: message.comment.clone(),
    }
}
