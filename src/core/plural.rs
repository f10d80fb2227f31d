//! Plural-form selection for numerus messages.
//!
//! The form order matches what Qt Linguist presents for each language, so
//! `form_index` can index straight into a message's `<numerusform>` list.

/// Plural rule family of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralRule {
    /// Single form for every count.
    NoPlural,
    /// `n == 1` singular, everything else plural.
    OneOther,
    /// `n <= 1` singular (0 and 1), everything else plural.
    French,
    /// Russian-style three forms: 1, 21, 31 / 2-4, 22-24 / the rest.
    EastSlavic,
    /// Polish: 1 / 2-4, 22-24 but not 12-14 / the rest.
    Polish,
    /// Czech and Slovak: 1 / 2-4 / the rest.
    Czech,
}

impl PluralRule {
    /// Rule for a language tag such as `es`, `es_ES` or `ru-RU`.
    ///
    /// Unknown languages use `OneOther`.
    pub fn for_language(tag: &str) -> Self {
        let normalized = tag.replace('-', "_").to_ascii_lowercase();
        if normalized == "pt_br" {
            return PluralRule::French;
        }
        let language = normalized.split('_').next().unwrap_or("");
        match language {
            "ja" | "zh" | "ko" | "vi" | "th" | "id" | "ms" | "tr" | "ka" => PluralRule::NoPlural,
            "fr" | "ak" | "am" | "bh" | "fil" | "tl" | "hi" | "ln" | "mg" | "oc" => {
                PluralRule::French
            }
            "ru" | "uk" | "be" | "sr" | "hr" | "bs" => PluralRule::EastSlavic,
            "pl" => PluralRule::Polish,
            "cs" | "sk" => PluralRule::Czech,
            _ => PluralRule::OneOther,
        }
    }

    pub fn form_count(self) -> usize {
        match self {
            PluralRule::NoPlural => 1,
            PluralRule::OneOther | PluralRule::French => 2,
            PluralRule::EastSlavic | PluralRule::Polish | PluralRule::Czech => 3,
        }
    }

    /// Index of the plural form to use for count `n`.
    pub fn form_index(self, n: i64) -> usize {
        let n = n.unsigned_abs();
        let n10 = n % 10;
        let n100 = n % 100;
        match self {
            PluralRule::NoPlural => 0,
            PluralRule::OneOther => usize::from(n != 1),
            PluralRule::French => usize::from(n > 1),
            PluralRule::EastSlavic => {
                if n10 == 1 && n100 != 11 {
                    0
                } else if (2..=4).contains(&n10) && !(12..=14).contains(&n100) {
                    1
                } else {
                    2
                }
            }
            PluralRule::Polish => {
                if n == 1 {
                    0
                } else if (2..=4).contains(&n10) && !(12..=14).contains(&n100) {
                    1
                } else {
                    2
                }
            }
            PluralRule::Czech => match n {
                1 => 0,
                2..=4 => 1,
                _ => 2,
            },
        }
    }
}
