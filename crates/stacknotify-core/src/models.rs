use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Question model - an immutable snapshot of one fetched item
///
/// Two questions with the same id are the same logical entity even if a
/// later fetch carries updated counts; the tracker keys on id alone and
/// does not refresh the other fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: u64,
    pub title: String,
    /// Original tag order is kept for display; matching treats them as a set
    pub tags: Vec<String>,
    pub up_votes: i64,
    pub down_votes: i64,
    pub answer_count: u32,
    /// Sort/display only - admission order is decided by the tracker
    pub created_at: DateTime<Utc>,
    pub url: String,
}

impl Question {
    /// Net score; can go negative
    pub fn score(&self) -> i64 {
        self.up_votes - self.down_votes
    }
}
