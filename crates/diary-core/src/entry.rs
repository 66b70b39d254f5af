//! Journal entries and keyword search.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{DiaryError, Result};

/// Timestamp layout used in entry headers, second precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One timestamped free-text journal note.
///
/// Entries have no identifier beyond their position in the account's
/// entry log; they are created once and never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// When this entry was written (local wall-clock, second precision)
    #[serde(with = "timestamp_format")]
    pub timestamp: NaiveDateTime,

    /// Free-form text, may span multiple lines
    pub text: String,
}

impl Entry {
    /// Build an entry, trimming surrounding whitespace from the text.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::MissingInput` if the text is empty or
    /// whitespace-only.
    pub fn new(timestamp: NaiveDateTime, text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(DiaryError::MissingInput("entry text".to_string()));
        }
        Ok(Self {
            timestamp,
            text: trimmed.to_string(),
        })
    }

    /// Header line as stored in the account record.
    pub fn header(&self) -> String {
        format!("[{}]", self.timestamp.format(TIMESTAMP_FORMAT))
    }

    /// Rendered form: header line, text, trailing newline.
    pub fn render(&self) -> String {
        format!("{}\n{}\n", self.header(), self.text)
    }

    /// Case-insensitive substring match over the rendered text.
    pub fn matches(&self, keyword: &str) -> bool {
        self.render()
            .to_lowercase()
            .contains(&keyword.to_lowercase())
    }
}

/// Entries whose rendered text contains the keyword, case-insensitively.
///
/// An empty keyword matches every entry (the empty string is a substring
/// of any string).
pub fn search<'a>(entries: &'a [Entry], keyword: &str) -> Vec<&'a Entry> {
    let needle = keyword.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.render().to_lowercase().contains(&needle))
        .collect()
}

/// Parse a block header line of the form `[YYYY-MM-DD HH:MM:SS]`.
pub(crate) fn parse_header(line: &str) -> Option<NaiveDateTime> {
    let inner = line.strip_prefix('[')?.strip_suffix(']')?;
    NaiveDateTime::parse_from_str(inner, TIMESTAMP_FORMAT).ok()
}

mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
