//! Text helpers shared by the rules.

/// Checks if the text contains at least one Unicode alphabetic character.
///
/// # Examples
///
/// ```
/// use tsctl::utils::contains_alphabetic;
///
/// assert!(contains_alphabetic("Open file"));
/// assert!(contains_alphabetic("Открыть"));
/// assert!(!contains_alphabetic("%1 / %2"));
/// assert!(!contains_alphabetic("..."));
/// ```
pub fn contains_alphabetic(text: &str) -> bool {
    text.chars().any(|c| c.is_alphabetic())
}

/// Keyboard accelerator marked with `&` (`"&Open"` -> `'O'`).
///
/// `&&` is an escaped ampersand and `&` followed by whitespace is plain text.
pub fn accelerator(text: &str) -> Option<char> {
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '&' {
            continue;
        }
        match chars.next() {
            Some('&') => continue,
            Some(next) if !next.is_whitespace() => return Some(next),
            _ => {}
        }
    }
    None
}

/// Normalized trailing punctuation of `text`, empty when there is none.
///
/// `...` and `…` are the same ending; full-width CJK marks map to their
/// ASCII counterparts.
pub fn ending(text: &str) -> &'static str {
    let trimmed = text.trim_end();
    if trimmed.ends_with("...") || trimmed.ends_with('…') {
        return "…";
    }
    match trimmed.chars().last() {
        Some('.' | '。') => ".",
        Some(':' | '：') => ":",
        Some('?' | '？') => "?",
        Some('!' | '！') => "!",
        _ => "",
    }
}
