//! Task model definitions

use serde::{Deserialize, Serialize};

use crate::record::{trimmed, Completable, Content, Record};
use crate::{Error, Result};

/// A to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create a new open task, trimming the text
    pub fn new(text: impl AsRef<str>) -> Result<Self> {
        let text = trimmed(text.as_ref())
            .ok_or_else(|| Error::Validation("Task text cannot be empty".to_string()))?;
        Ok(Self {
            text,
            completed: false,
        })
    }
}

impl Content for Task {
    type Draft = String;

    const KIND: &'static str = "task";

    fn from_draft(draft: String) -> Result<Self> {
        Self::new(draft)
    }

    fn apply_draft(&mut self, draft: String) -> Result<()> {
        let task = Self::new(draft)?;
        self.text = task.text;
        Ok(())
    }

    fn normalize(self) -> Option<Self> {
        let text = trimmed(&self.text)?;
        Some(Self { text, ..self })
    }
}

impl Completable for Task {
    fn is_completed(&self) -> bool {
        self.completed
    }

    fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}

/// A task together with its record envelope
pub type TaskRecord = Record<Task>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordId;

    #[test]
    fn test_create_task() {
        let task = Task::new("  Buy milk ").unwrap();
        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);
    }

    #[test]
    fn test_blank_task_rejected() {
        assert!(matches!(Task::new(""), Err(Error::Validation(_))));
        assert!(matches!(Task::new(" \t\n"), Err(Error::Validation(_))));
    }

    #[test]
    fn test_apply_draft_keeps_completion() {
        let mut task = Task::new("Write report").unwrap();
        task.completed = true;

        task.apply_draft("  Write final report".to_string()).unwrap();
        assert_eq!(task.text, "Write final report");
        assert!(task.completed);
    }

    #[test]
    fn test_apply_blank_draft_leaves_task() {
        let mut task = Task::new("Keep me").unwrap();
        assert!(task.apply_draft("   ".to_string()).is_err());
        assert_eq!(task.text, "Keep me");
    }

    #[test]
    fn test_normalize_keeps_completion() {
        let task = Task {
            text: " done \n".to_string(),
            completed: true,
        };
        let task = task.normalize().unwrap();
        assert_eq!(task.text, "done");
        assert!(task.completed);

        let blank = Task {
            text: "\t".to_string(),
            completed: false,
        };
        assert_eq!(blank.normalize(), None);
    }

    #[test]
    fn test_task_record_json_layout() {
        let record = Record::new(RecordId::new("task-1"), Task::new("Buy milk").unwrap());
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["id"], "task-1");
        assert_eq!(value["text"], "Buy milk");
        assert_eq!(value["completed"], false);
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_none());
    }

    #[test]
    fn test_legacy_task_record_decodes() {
        let json = r#"{"id":1718000000000,"text":"Old task","completed":true,"createdAt":"2024-06-10T06:13:20.000Z"}"#;
        let record: TaskRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.id.as_str(), "1718000000000");
        assert_eq!(record.content.text, "Old task");
        assert!(record.is_completed());
        assert!(record.updated_at.is_none());
    }
}
