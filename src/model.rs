use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub hash: String,
    pub author: String,
    pub timestamp: NaiveDate,
}

/// Commits for one author, in the order the log source emitted them.
#[derive(Debug, Clone, Default)]
pub struct CommitHistory {
    pub author: String,
    pub commits: Vec<Commit>,
}

impl CommitHistory {
    pub fn new(author: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            commits: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarCell {
    pub row: usize,
    pub col: usize,
    pub date: NaiveDate,
    pub count: u32,
    pub level: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub author: String,
    pub as_of: NaiveDate,
    pub start_date: NaiveDate,
    pub rows: usize,
    pub columns: usize,
    pub max_level: usize,
    pub total_commits: u64,
    pub cells: Vec<CalendarCell>,
}
