//! Note model definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::{trimmed, Content, Record};
use crate::{Error, Result};

/// Default preview length in characters
pub const DEFAULT_PREVIEW_CHARS: usize = 100;

/// A titled note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub title: String,
    #[serde(alias = "content")]
    pub body: String,
}

/// User input for creating or editing a note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub body: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

impl Note {
    /// Create a new note; both title and body must be non-blank
    pub fn new(title: &str, body: &str) -> Result<Self> {
        let title = trimmed(title)
            .ok_or_else(|| Error::Validation("Note title cannot be empty".to_string()))?;
        let body = trimmed(body)
            .ok_or_else(|| Error::Validation("Note body cannot be empty".to_string()))?;
        Ok(Self { title, body })
    }

    /// The body cut to `max_chars` characters, with `...` appended when cut
    pub fn preview(&self, max_chars: usize) -> String {
        match self.body.char_indices().nth(max_chars) {
            Some((cut, _)) => format!("{}...", &self.body[..cut]),
            None => self.body.clone(),
        }
    }
}

impl Content for Note {
    type Draft = NoteDraft;

    const KIND: &'static str = "note";

    fn from_draft(draft: NoteDraft) -> Result<Self> {
        Self::new(&draft.title, &draft.body)
    }

    fn apply_draft(&mut self, draft: NoteDraft) -> Result<()> {
        *self = Self::from_draft(draft)?;
        Ok(())
    }

    fn normalize(self) -> Option<Self> {
        Some(Self {
            title: trimmed(&self.title)?,
            body: trimmed(&self.body)?,
        })
    }
}

/// A note together with its record envelope
pub type NoteRecord = Record<Note>;

/// Human-readable timestamp, e.g. `5 March 2024 14:07`
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%-d %B %Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_create_note() {
        let note = Note::new("  Groceries ", "\n eggs, flour \n").unwrap();
        assert_eq!(note.title, "Groceries");
        assert_eq!(note.body, "eggs, flour");
    }

    #[test]
    fn test_note_requires_title_and_body() {
        assert!(matches!(Note::new("", "body"), Err(Error::Validation(_))));
        assert!(matches!(Note::new("title", "  "), Err(Error::Validation(_))));
    }

    #[test]
    fn test_apply_draft() {
        let mut note = Note::new("Old", "old body").unwrap();
        note.apply_draft(NoteDraft::new("New ", " new body")).unwrap();
        assert_eq!(note, Note::new("New", "new body").unwrap());

        assert!(note.apply_draft(NoteDraft::new("", "x")).is_err());
        assert_eq!(note.title, "New");
    }

    #[test]
    fn test_preview() {
        let note = Note::new("t", "abcdefghij").unwrap();
        assert_eq!(note.preview(4), "abcd...");
        assert_eq!(note.preview(10), "abcdefghij");
        assert_eq!(note.preview(DEFAULT_PREVIEW_CHARS), "abcdefghij");
    }

    #[test]
    fn test_preview_counts_chars() {
        let note = Note::new("t", "héllo wörld").unwrap();
        assert_eq!(note.preview(5), "héllo...");
    }

    #[test]
    fn test_legacy_content_field() {
        let note: Note = serde_json::from_str(r#"{"title":"a","content":"b"}"#).unwrap();
        assert_eq!(note.body, "b");
    }

    #[test]
    fn test_normalize() {
        let note = Note {
            title: " a ".to_string(),
            body: "b\n".to_string(),
        };
        assert_eq!(note.normalize(), Some(Note::new("a", "b").unwrap()));

        let blank = Note {
            title: "a".to_string(),
            body: "  ".to_string(),
        };
        assert_eq!(blank.normalize(), None);
    }

    #[test]
    fn test_format_timestamp() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 0).unwrap();
        assert_eq!(format_timestamp(ts), "5 March 2024 14:07");
    }
}
