//! Record model definitions
//!
//! A [`Record`] wraps user content with the bookkeeping every list entry
//! carries: an opaque id and creation/update timestamps. The JSON layout is
//! flat and camelCase so a task serializes as
//! `{"id": "...", "text": "...", "completed": false, "createdAt": "..."}`.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::Result;

/// Opaque, immutable record identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

// Older snapshots stored millisecond timestamps as numeric ids.
impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => Self(text),
            RawId::Number(number) => Self(number.to_string()),
        })
    }
}

/// Content carried by a record
///
/// Implementors own validation: a draft is trimmed and checked before it
/// ever reaches the store, so blank content is never persisted.
pub trait Content: Clone + Serialize + DeserializeOwned + 'static {
    /// User-supplied input used to create or edit content
    type Draft;

    /// Short kind name used as the id prefix
    const KIND: &'static str;

    /// Build content from a draft, rejecting blank input
    fn from_draft(draft: Self::Draft) -> Result<Self>;

    /// Replace the user-editable fields from a draft
    ///
    /// On error the content is left untouched.
    fn apply_draft(&mut self, draft: Self::Draft) -> Result<()>;

    /// Trim every field, returning `None` if any required field is left empty
    fn normalize(self) -> Option<Self>;
}

/// Content with a completion flag
pub trait Completable {
    fn is_completed(&self) -> bool;

    fn set_completed(&mut self, completed: bool);
}

/// A single persisted list entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record<C> {
    pub id: RecordId,
    #[serde(flatten)]
    pub content: C,
    #[serde(alias = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl<C> Record<C> {
    /// Create a new record stamped with the current time
    pub fn new(id: RecordId, content: C) -> Self {
        Self {
            id,
            content,
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

impl<C: Completable> Record<C> {
    pub fn is_completed(&self) -> bool {
        self.content.is_completed()
    }
}

/// Trim a field, returning `None` when nothing is left
pub(crate) fn trimmed(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_from_string() {
        let id: RecordId = serde_json::from_str("\"task-1\"").unwrap();
        assert_eq!(id.as_str(), "task-1");
    }

    #[test]
    fn test_record_id_from_legacy_number() {
        let id: RecordId = serde_json::from_str("1718000000000").unwrap();
        assert_eq!(id, RecordId::new("1718000000000"));
    }

    #[test]
    fn test_record_id_serializes_as_string() {
        let json = serde_json::to_string(&RecordId::new("note-7")).unwrap();
        assert_eq!(json, "\"note-7\"");
    }

    #[test]
    fn test_trimmed() {
        assert_eq!(trimmed("  hi  "), Some("hi".to_string()));
        assert_eq!(trimmed("   "), None);
        assert_eq!(trimmed(""), None);
    }
}
