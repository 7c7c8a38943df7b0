// Journal module
// Diary entries and the repository interface that stores them

mod memory;

pub use memory::InMemoryJournal;

use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Mood recorded when the client does not send one
pub const DEFAULT_MOOD: u8 = 5;

/// User assumed when a request names none
pub const DEFAULT_USER_ID: u64 = 1;

/// A stored diary entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: u64,
    pub user_id: u64,
    /// Serialized as YYYY-MM-DD
    pub date: NaiveDate,
    pub content: String,
    pub mood: u8,
    pub emotions: Vec<String>,
}

/// Fields for a new entry; the repository assigns the id
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub user_id: u64,
    pub date: NaiveDate,
    pub content: String,
    pub mood: u8,
    pub emotions: Vec<String>,
}

/// Partial update; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct EntryUpdate {
    pub content: Option<String>,
    pub mood: Option<u8>,
    pub emotions: Option<Vec<String>>,
}

impl EntryUpdate {
    /// Apply to an entry in place. An empty content string keeps the old text.
    pub fn apply(self, entry: &mut JournalEntry) {
        if let Some(content) = self.content.filter(|c| !c.is_empty()) {
            entry.content = content;
        }
        if let Some(mood) = self.mood {
            entry.mood = mood;
        }
        if let Some(emotions) = self.emotions {
            entry.emotions = emotions;
        }
    }
}

/// Storage for journal entries.
///
/// Implementations must be safe to share between request handlers.
pub trait JournalRepository: Send + Sync {
    /// All entries of a user, oldest id first
    fn list_for_user(&self, user_id: u64) -> Result<Vec<JournalEntry>>;

    /// Up to `limit` entries of a user, newest date first
    fn recent_for_user(&self, user_id: u64, limit: usize) -> Result<Vec<JournalEntry>>;

    fn get(&self, id: u64) -> Result<Option<JournalEntry>>;

    fn create(&self, entry: NewEntry) -> Result<JournalEntry>;

    /// Returns `None` when no entry has this id
    fn update(&self, id: u64, update: EntryUpdate) -> Result<Option<JournalEntry>>;

    /// Returns `false` when no entry has this id
    fn delete(&self, id: u64) -> Result<bool>;

    /// Number of stored entries
    fn count(&self) -> usize;
}
