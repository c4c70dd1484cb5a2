//! Verse query and reply types.

use std::fmt;

use serde::Deserialize;

use crate::config::DEFAULT_TRANSLATION;

/// What to look up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerseQuery {
    /// Free-text reference such as "John 3:16" or "Psalm 23:1-3".
    Reference(String),
    /// A single verse addressed by book, chapter and verse number.
    Passage {
        book: String,
        chapter: u32,
        verse: u32,
    },
}

impl VerseQuery {
    /// Build a free-text query.
    pub fn reference(text: impl Into<String>) -> Self {
        Self::Reference(text.into())
    }

    /// Build a structured query.
    pub fn passage(book: impl Into<String>, chapter: u32, verse: u32) -> Self {
        Self::Passage {
            book: book.into(),
            chapter,
            verse,
        }
    }

    /// True when there is nothing to look up.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Reference(text) => text.trim().is_empty(),
            Self::Passage { book, .. } => book.trim().is_empty(),
        }
    }

    /// Path segment appended to the service base URL.
    ///
    /// Free-text references are percent-encoded whole; structured queries
    /// use the service's `book+chapter:verse` form.
    pub fn path_segment(&self) -> String {
        match self {
            Self::Reference(text) => urlencoding::encode(text.trim()).into_owned(),
            Self::Passage {
                book,
                chapter,
                verse,
            } => format!("{}+{}:{}", urlencoding::encode(book.trim()), chapter, verse),
        }
    }
}

impl fmt::Display for VerseQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reference(text) => write!(f, "{}", text.trim()),
            Self::Passage {
                book,
                chapter,
                verse,
            } => write!(f, "{} {}:{}", book.trim(), chapter, verse),
        }
    }
}

/// Raw reply from the lookup service.
///
/// Only the fields the bot displays are decoded; every one of them may be
/// missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VerseResponse {
    /// Canonical reference, e.g. "John 3:16".
    #[serde(default)]
    pub reference: Option<String>,

    /// Human-readable translation name, e.g. "King James Version".
    #[serde(default)]
    pub translation_name: Option<String>,

    /// Verse text, usually with a trailing newline.
    #[serde(default)]
    pub text: Option<String>,
}

impl VerseResponse {
    /// Normalize the reply to `query` into a [`VerseResult`].
    ///
    /// Returns `None` when the reply carries no verse text. A missing or
    /// blank reference is replaced by the query as the user wrote it.
    pub fn into_result(self, query: &VerseQuery) -> Option<VerseResult> {
        let text = self
            .text
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())?;

        let translation = self
            .translation_name
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_TRANSLATION.to_string());

        let reference = self
            .reference
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| query.to_string());

        Some(VerseResult {
            reference,
            translation,
            text,
        })
    }
}

/// A verse ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseResult {
    /// Canonical reference.
    pub reference: String,
    /// Translation name, `NIV` when the service did not say.
    pub translation: String,
    /// Trimmed verse text.
    pub text: String,
}

impl fmt::Display for VerseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.reference, self.translation, self.text)
    }
}
