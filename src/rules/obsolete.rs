//! Retired (obsolete or vanished) message detection rule.

use crate::{
    config::Config,
    core::LoadedCatalog,
    issues::ObsoleteIssue,
    rules::helpers::{checked_messages, message_context},
};

pub fn check_obsolete(loaded: &LoadedCatalog, config: &Config) -> Vec<ObsoleteIssue> {
    checked_messages(loaded, config)
        .filter(|(_, message)| message.status.is_retired())
        .map(|(context, message)| ObsoleteIssue {
            context: message_context(loaded, context, message),
            status: message.status,
        })
        .collect()
}
