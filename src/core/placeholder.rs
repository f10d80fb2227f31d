//! Positional placeholders inside message text.
//!
//! Two styles show up in catalogs: Qt's `%1`..`%99` (with the `%L1`
//! localized-number variant and the `%n` count of numerus messages) and
//! Python's `{0}`-style format fields.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%L?([1-9][0-9]?|n)|\{([0-9]+)\}").unwrap());

/// Sorted multiset of placeholders in `text`, normalized (`%L1` -> `%1`).
pub fn placeholders(text: &str) -> Vec<String> {
    let mut found: Vec<String> = PLACEHOLDER_REGEX
        .captures_iter(text)
        .map(|caps| normalize(&caps))
        .collect();
    found.sort();
    found
}

fn normalize(caps: &Captures<'_>) -> String {
    match (caps.get(1), caps.get(2)) {
        (Some(qt), _) => format!("%{}", qt.as_str()),
        (None, Some(field)) => format!("{{{}}}", field.as_str()),
        (None, None) => caps[0].to_string(),
    }
}

/// Substitute `%1..` with `args[0..]` and `{0}..` with `args[0..]`.
///
/// Placeholders without a matching argument, and `%n`, are left untouched.
pub fn fill_placeholders(text: &str, args: &[&str]) -> String {
    PLACEHOLDER_REGEX
        .replace_all(text, |caps: &Captures<'_>| {
            let arg = match (caps.get(1), caps.get(2)) {
                (Some(qt), _) => qt
                    .as_str()
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| args.get(i - 1)),
                (None, Some(field)) => field
                    .as_str()
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| args.get(i)),
                (None, None) => None,
            };
            arg.map_or_else(|| caps[0].to_string(), |a| a.to_string())
        })
        .into_owned()
}

/// Substitute the `%n` / `%Ln` count placeholder of numerus messages.
pub fn fill_count(text: &str, n: i64) -> String {
    PLACEHOLDER_REGEX
        .replace_all(text, |caps: &Captures<'_>| match caps.get(1) {
            Some(qt) if qt.as_str() == "n" => n.to_string(),
            _ => caps[0].to_string(),
        })
        .into_owned()
}
