//! Read-only translation lookup.
//!
//! [`Translator`] is what an application loads at startup: a table keyed by
//! (context, source, comment) that falls back to the source string whenever
//! no usable translation exists.

use std::collections::HashMap;

use super::{
    catalog::{Catalog, Translation, TranslationStatus},
    placeholder::fill_count,
    plural::PluralRule,
};

/// Options controlling which entries enter the lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupOptions {
    /// Use `type="unfinished"` entries that already carry text.
    pub include_unfinished: bool,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            include_unfinished: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct LookupKey {
    context: String,
    source: String,
    comment: String,
}

/// Lookup table built from one catalog.
#[derive(Debug, Clone)]
pub struct Translator {
    entries: HashMap<LookupKey, Translation>,
    /// Keys in catalog order.
    order: Vec<(String, String, String)>,
    plural_rule: PluralRule,
}

impl Translator {
    pub fn new(catalog: &Catalog, options: LookupOptions) -> Self {
        let mut entries = HashMap::new();
        let mut order = Vec::new();

        for (context, message) in catalog.messages() {
            if !message.is_active() || !message.is_translated() {
                continue;
            }
            if message.status == TranslationStatus::Unfinished && !options.include_unfinished {
                continue;
            }
            let key = LookupKey {
                context: context.to_string(),
                source: message.source.clone(),
                comment: message.comment_str().to_string(),
            };
            if entries.contains_key(&key) {
                continue;
            }
            order.push((
                key.context.clone(),
                key.source.clone(),
                key.comment.clone(),
            ));
            entries.insert(key, message.translation.clone());
        }

        let plural_rule = catalog
            .language
            .as_deref()
            .map_or(PluralRule::OneOther, PluralRule::for_language);

        Self {
            entries,
            order,
            plural_rule,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn find(&self, context: &str, source: &str, comment: &str) -> Option<&Translation> {
        let lookup = |comment: &str| {
            self.entries.get(&LookupKey {
                context: context.to_string(),
                source: source.to_string(),
                comment: comment.to_string(),
            })
        };
        lookup(comment).or_else(|| {
            if comment.is_empty() {
                None
            } else {
                lookup("")
            }
        })
    }

    /// Whether a usable translation exists (after the comment fallback).
    pub fn contains(&self, context: &str, source: &str, comment: &str) -> bool {
        self.find(context, source, comment).is_some()
    }

    /// Translate `source`, falling back to it when no translation is usable.
    ///
    /// A miss with a non-empty `comment` is retried without the comment.
    pub fn translate<'a>(&'a self, context: &str, source: &'a str, comment: &str) -> &'a str {
        match self.find(context, source, comment) {
            Some(Translation::Text(text)) => text.as_str(),
            Some(Translation::Numerus(forms)) => forms
                .iter()
                .find(|f| !f.is_empty())
                .map_or(source, String::as_str),
            None => source,
        }
    }

    /// Translate a numerus message for count `n`, substituting `%n`.
    pub fn translate_plural(&self, context: &str, source: &str, comment: &str, n: i64) -> String {
        let text = match self.find(context, source, comment) {
            Some(Translation::Numerus(forms)) => {
                let index = self.plural_rule.form_index(n);
                forms
                    .get(index)
                    .filter(|f| !f.is_empty())
                    .map_or(source, String::as_str)
            }
            Some(Translation::Text(text)) => text.as_str(),
            None => source,
        };
        fill_count(text, n)
    }

    /// Every table entry as (context, source, comment, text), in catalog order.
    ///
    /// Numerus entries yield their first non-empty form.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &str, &str)> {
        self.order.iter().map(|(context, source, comment)| {
            let text = self.translate(context, source, comment);
            (
                context.as_str(),
                source.as_str(),
                comment.as_str(),
                text,
            )
        })
    }
}
