//! In-memory model of a Qt Linguist translation catalog.
//!
//! A [`Catalog`] holds one target language. It mirrors the `.ts` document
//! structure closely enough that parsing and writing it back preserves
//! context order, message order and every attribute.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use anyhow::{Result, bail};

/// Default `TS@version` written for catalogs created from scratch.
pub const DEFAULT_TS_VERSION: &str = "2.1";

/// One target language: an ordered list of contexts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub version: String,
    pub language: Option<String>,
    pub source_language: Option<String>,
    pub contexts: Vec<Context>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            version: DEFAULT_TS_VERSION.to_string(),
            language: None,
            source_language: None,
            contexts: Vec::new(),
        }
    }
}

/// A logical UI component (dialog, window, class) owning a group of messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    pub name: String,
    pub comment: Option<String>,
    pub messages: Vec<Message>,
}

/// State carried by the `type` attribute of `<translation>`.
///
/// The attribute is absent for finished translations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TranslationStatus {
    #[default]
    Finished,
    Unfinished,
    Obsolete,
    Vanished,
}

impl TranslationStatus {
    /// Value of the `type` attribute, `None` for finished translations.
    pub fn as_attr(self) -> Option<&'static str> {
        match self {
            TranslationStatus::Finished => None,
            TranslationStatus::Unfinished => Some("unfinished"),
            TranslationStatus::Obsolete => Some("obsolete"),
            TranslationStatus::Vanished => Some("vanished"),
        }
    }

    /// Obsolete and vanished entries are kept for translators only.
    pub fn is_retired(self) -> bool {
        matches!(
            self,
            TranslationStatus::Obsolete | TranslationStatus::Vanished
        )
    }
}

impl FromStr for TranslationStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "" => Ok(TranslationStatus::Finished),
            "unfinished" => Ok(TranslationStatus::Unfinished),
            "obsolete" => Ok(TranslationStatus::Obsolete),
            "vanished" => Ok(TranslationStatus::Vanished),
            other => bail!("unknown translation type \"{}\"", other),
        }
    }
}

impl fmt::Display for TranslationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationStatus::Finished => write!(f, "finished"),
            TranslationStatus::Unfinished => write!(f, "unfinished"),
            TranslationStatus::Obsolete => write!(f, "obsolete"),
            TranslationStatus::Vanished => write!(f, "vanished"),
        }
    }
}

/// Line reference of a `<location>`.
///
/// lupdate writes either absolute numbers or offsets from the previous
/// location in the same file (`+5`, `-2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRef {
    Absolute(u32),
    Relative(i64),
}

impl FromStr for LineRef {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.starts_with('+') || trimmed.starts_with('-') {
            let offset = trimmed
                .parse::<i64>()
                .map_err(|_| anyhow::anyhow!("invalid relative line \"{}\"", s))?;
            return Ok(LineRef::Relative(offset));
        }
        let line = trimmed
            .parse::<u32>()
            .map_err(|_| anyhow::anyhow!("invalid line \"{}\"", s))?;
        Ok(LineRef::Absolute(line))
    }
}

impl fmt::Display for LineRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineRef::Absolute(line) => write!(f, "{}", line),
            LineRef::Relative(offset) if *offset >= 0 => write!(f, "+{}", offset),
            LineRef::Relative(offset) => write!(f, "{}", offset),
        }
    }
}

/// Source-location hint. Advisory only; it goes stale as the application changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub filename: Option<String>,
    pub line: Option<LineRef>,
}

/// A location with relative references resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocation {
    pub filename: String,
    pub line: Option<u32>,
}

/// Translated text of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    Text(String),
    /// One entry per `<numerusform>`, in plural-rule order.
    Numerus(Vec<String>),
}

impl Default for Translation {
    fn default() -> Self {
        Translation::Text(String::new())
    }
}

impl Translation {
    pub fn is_empty(&self) -> bool {
        match self {
            Translation::Text(text) => text.is_empty(),
            Translation::Numerus(forms) => forms.iter().all(|f| f.is_empty()),
        }
    }

    /// All non-empty texts carried by this translation.
    pub fn texts(&self) -> Vec<&str> {
        match self {
            Translation::Text(text) if text.is_empty() => Vec::new(),
            Translation::Text(text) => vec![text.as_str()],
            Translation::Numerus(forms) => forms
                .iter()
                .filter(|f| !f.is_empty())
                .map(String::as_str)
                .collect(),
        }
    }
}

/// A single translatable string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    pub id: Option<String>,
    pub numerus: bool,
    pub locations: Vec<Location>,
    pub source: String,
    pub old_source: Option<String>,
    pub comment: Option<String>,
    pub old_comment: Option<String>,
    pub extra_comment: Option<String>,
    pub translator_comment: Option<String>,
    pub translation: Translation,
    pub status: TranslationStatus,
    /// Line in the `.ts` document where `<message>` starts. Zero when the
    /// message was not read from a file.
    pub ts_line: usize,
}

impl Message {
    /// Create an unfinished message with an empty translation.
    pub fn new(source: &str, comment: Option<&str>) -> Self {
        Self {
            source: source.to_string(),
            comment: comment.map(str::to_string),
            status: TranslationStatus::Unfinished,
            ..Default::default()
        }
    }

    /// Neither obsolete nor vanished.
    pub fn is_active(&self) -> bool {
        !self.status.is_retired()
    }

    pub fn is_translated(&self) -> bool {
        !self.translation.is_empty()
    }

    /// Disambiguation comment, empty when absent.
    pub fn comment_str(&self) -> &str {
        self.comment.as_deref().unwrap_or("")
    }

    /// Lookup key inside a context: (source, comment).
    pub fn key(&self) -> MessageKey<'_> {
        MessageKey {
            source: &self.source,
            comment: self.comment_str(),
        }
    }
}

/// Identity of a message within its context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageKey<'a> {
    pub source: &'a str,
    pub comment: &'a str,
}

impl fmt::Display for MessageKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.comment.is_empty() {
            write!(f, "{}", self.source)
        } else {
            write!(f, "{} ({})", self.source, self.comment)
        }
    }
}

/// Per-status message counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub finished: usize,
    pub unfinished: usize,
    pub obsolete: usize,
}

impl StatusCounts {
    pub fn active(&self) -> usize {
        self.finished + self.unfinished
    }

    /// Share of active messages that are finished, in percent.
    pub fn percent_done(&self) -> f64 {
        if self.active() == 0 {
            return 100.0;
        }
        self.finished as f64 * 100.0 / self.active() as f64
    }
}

impl Catalog {
    pub fn new(language: Option<&str>) -> Self {
        Self {
            language: language.map(str::to_string),
            ..Default::default()
        }
    }

    pub fn context(&self, name: &str) -> Option<&Context> {
        self.contexts.iter().find(|c| c.name == name)
    }

    /// Iterate over every message with the name of its context.
    pub fn messages(&self) -> impl Iterator<Item = (&str, &Message)> {
        self.contexts
            .iter()
            .flat_map(|c| c.messages.iter().map(move |m| (c.name.as_str(), m)))
    }

    pub fn message_count(&self) -> usize {
        self.contexts.iter().map(|c| c.messages.len()).sum()
    }

    /// Count messages by status. Obsolete and vanished are counted together.
    pub fn status_counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for (_, message) in self.messages() {
            match message.status {
                TranslationStatus::Finished => counts.finished += 1,
                TranslationStatus::Unfinished => counts.unfinished += 1,
                TranslationStatus::Obsolete | TranslationStatus::Vanished => {
                    counts.obsolete += 1
                }
            }
        }
        counts
    }

    /// Resolve every message's locations the way Qt does.
    ///
    /// A location without `filename` reuses the previous file; a relative line
    /// is an offset from the last line seen in that file. The cursor runs
    /// across the whole document in order. Returned vectors are indexed like
    /// `contexts[i].messages[j]`.
    pub fn resolved_locations(&self) -> Vec<Vec<Vec<ResolvedLocation>>> {
        let mut current_file = String::new();
        let mut last_line: HashMap<String, i64> = HashMap::new();

        self.contexts
            .iter()
            .map(|context| {
                context
                    .messages
                    .iter()
                    .map(|message| {
                        message
                            .locations
                            .iter()
                            .map(|location| {
                                if let Some(filename) = &location.filename {
                                    current_file = filename.clone();
                                }
                                let previous = last_line.get(&current_file).copied().unwrap_or(0);
                                let line = match location.line {
                                    Some(LineRef::Absolute(line)) => Some(i64::from(line)),
                                    Some(LineRef::Relative(offset)) => Some(previous + offset),
                                    None => None,
                                };
                                if let Some(line) = line {
                                    last_line.insert(current_file.clone(), line);
                                }
                                ResolvedLocation {
                                    filename: current_file.clone(),
                                    line: line.and_then(|l| u32::try_from(l).ok()),
                                }
                            })
                            .collect()
                    })
                    .collect()
            })
            .collect()
    }
}
