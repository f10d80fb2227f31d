//! Catalog maintenance: merging a fresh extraction and pruning retired entries.

use std::collections::{HashMap, HashSet};

use super::{
    catalog::{Catalog, Context, Message, Translation, TranslationStatus},
    plural::PluralRule,
};

/// What a [`sync`] run changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncSummary {
    /// Messages new in the template, added as unfinished.
    pub added: usize,
    /// Translated messages no longer in the template, marked obsolete.
    pub obsoleted: usize,
    /// Untranslated messages no longer in the template, dropped.
    pub dropped: usize,
    /// Retired messages that reappeared in the template.
    pub revived: usize,
}

impl SyncSummary {
    pub fn is_empty(&self) -> bool {
        self.added + self.obsoleted + self.dropped + self.revived == 0
    }
}

/// Merge `template` (the current list of source strings) into `catalog`.
///
/// Messages match on (context, source, comment). Matched messages keep their
/// translation and take the template's locations and extraction metadata.
/// Contexts follow the template's order; contexts only in the catalog are
/// appended after them.
pub fn sync(catalog: &Catalog, template: &Catalog) -> (Catalog, SyncSummary) {
    let mut summary = SyncSummary::default();
    let form_count = catalog
        .language
        .as_deref()
        .map_or(2, |lang| PluralRule::for_language(lang).form_count());

    let mut contexts = Vec::new();
    let mut seen_contexts: HashSet<&str> = HashSet::new();

    for template_context in &template.contexts {
        if !seen_contexts.insert(template_context.name.as_str()) {
            continue;
        }
        // A name may be split over several <context> elements in either file.
        let existing: Vec<&Context> = catalog
            .contexts
            .iter()
            .filter(|c| c.name == template_context.name)
            .collect();
        let template_messages: Vec<&Message> = template
            .contexts
            .iter()
            .filter(|c| c.name == template_context.name)
            .flat_map(|c| &c.messages)
            .collect();
        contexts.push(sync_context(
            &existing,
            template_context,
            &template_messages,
            form_count,
            &mut summary,
        ));
    }

    let mut retired_only: Vec<Context> = Vec::new();
    for context in &catalog.contexts {
        if seen_contexts.contains(context.name.as_str()) {
            continue;
        }
        let messages = retire_leftovers(context.messages.iter(), &mut summary);
        if messages.is_empty() {
            continue;
        }
        match retired_only.iter_mut().find(|c| c.name == context.name) {
            Some(merged) => merged.messages.extend(messages),
            None => retired_only.push(Context {
                name: context.name.clone(),
                comment: context.comment.clone(),
                messages,
            }),
        }
    }
    contexts.extend(retired_only);

    tracing::debug!(?summary, "synced catalog");

    (
        Catalog {
            version: catalog.version.clone(),
            language: catalog.language.clone(),
            source_language: catalog
                .source_language
                .clone()
                .or_else(|| template.source_language.clone()),
            contexts,
        },
        summary,
    )
}

fn sync_context(
    existing: &[&Context],
    template: &Context,
    template_messages: &[&Message],
    form_count: usize,
    summary: &mut SyncSummary,
) -> Context {
    let existing_messages: Vec<&Message> =
        existing.iter().flat_map(|c| &c.messages).collect();

    let mut by_key: HashMap<(&str, &str), Vec<usize>> = HashMap::new();
    for (i, message) in existing_messages.iter().enumerate() {
        by_key
            .entry((message.source.as_str(), message.comment_str()))
            .or_default()
            .push(i);
    }

    let mut used = vec![false; existing_messages.len()];
    let mut messages = Vec::with_capacity(template_messages.len());

    for template_message in template_messages {
        let key = (template_message.source.as_str(), template_message.comment_str());
        let matched = by_key
            .get(&key)
            .and_then(|candidates| candidates.iter().copied().find(|&i| !used[i]));

        match matched {
            Some(i) => {
                used[i] = true;
                let mut message = existing_messages[i].clone();
                if !message.is_active() {
                    message.status = TranslationStatus::Unfinished;
                    summary.revived += 1;
                }
                message.locations = template_message.locations.clone();
                message.extra_comment = template_message.extra_comment.clone();
                message.id = template_message.id.clone().or(message.id);
                if message.numerus != template_message.numerus {
                    message.numerus = template_message.numerus;
                    message.translation = empty_translation(message.numerus, form_count);
                    message.status = TranslationStatus::Unfinished;
                }
                messages.push(message);
            }
            None => {
                summary.added += 1;
                messages.push(Message {
                    id: template_message.id.clone(),
                    numerus: template_message.numerus,
                    locations: template_message.locations.clone(),
                    source: template_message.source.clone(),
                    comment: template_message.comment.clone(),
                    extra_comment: template_message.extra_comment.clone(),
                    translation: empty_translation(template_message.numerus, form_count),
                    status: TranslationStatus::Unfinished,
                    ..Default::default()
                });
            }
        }
    }

    let leftovers = existing_messages
        .iter()
        .zip(used.iter())
        .filter(|(_, used)| !**used)
        .map(|(message, _)| *message);
    messages.extend(retire_leftovers(leftovers, summary));

    Context {
        name: template.name.clone(),
        comment: existing
            .iter()
            .find_map(|c| c.comment.clone())
            .or_else(|| template.comment.clone()),
        messages,
    }
}

/// Messages missing from the template: keep retired ones, retire translated
/// ones, drop the rest.
fn retire_leftovers<'a>(
    leftovers: impl Iterator<Item = &'a Message>,
    summary: &mut SyncSummary,
) -> Vec<Message> {
    let mut kept = Vec::new();
    for message in leftovers {
        if !message.is_active() {
            kept.push(message.clone());
        } else if message.is_translated() {
            let mut message = message.clone();
            message.status = TranslationStatus::Obsolete;
            summary.obsoleted += 1;
            kept.push(message);
        } else {
            summary.dropped += 1;
        }
    }
    kept
}

fn empty_translation(numerus: bool, form_count: usize) -> Translation {
    if numerus {
        Translation::Numerus(vec![String::new(); form_count])
    } else {
        Translation::default()
    }
}

/// Remove obsolete and vanished messages, then contexts left empty.
///
/// Returns the pruned catalog and the number of messages removed.
pub fn prune(catalog: &Catalog) -> (Catalog, usize) {
    let mut removed = 0;
    let contexts = catalog
        .contexts
        .iter()
        .filter_map(|context| {
            let messages: Vec<Message> = context
                .messages
                .iter()
                .filter(|m| {
                    let keep = m.is_active();
                    if !keep {
                        removed += 1;
                    }
                    keep
                })
                .cloned()
                .collect();
            (!messages.is_empty()).then(|| Context {
                name: context.name.clone(),
                comment: context.comment.clone(),
                messages,
            })
        })
        .collect();

    (
        Catalog {
            contexts,
            ..catalog.clone()
        },
        removed,
    )
}
