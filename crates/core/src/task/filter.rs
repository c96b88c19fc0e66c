//! Completion filter and derived task views

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::record::{Completable, Record};
use crate::Error;

/// Which records the list view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub const VARIANTS: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    /// Whether a record with the given completion state passes the filter
    pub fn matches(self, completed: bool) -> bool {
        match self {
            Self::All => true,
            Self::Active => !completed,
            Self::Completed => completed,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            other => Err(Error::InvalidInput(format!(
                "Unknown filter '{}', expected one of: all, active, completed",
                other
            ))),
        }
    }
}

/// Records passing `filter`, in their original order
pub fn select_visible<C: Completable>(records: &[Record<C>], filter: Filter) -> Vec<&Record<C>> {
    records
        .iter()
        .filter(|record| filter.matches(record.is_completed()))
        .collect()
}

/// Task statistics for a header or footer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TaskCounts {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

impl TaskCounts {
    pub fn of<C: Completable>(records: &[Record<C>]) -> Self {
        let completed = records.iter().filter(|r| r.is_completed()).count();
        Self {
            total: records.len(),
            active: records.len() - completed,
            completed,
        }
    }
}
