// In-memory journal repository

use anyhow::Result;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{EntryUpdate, JournalEntry, JournalRepository, NewEntry};

/// Concurrent in-memory store; contents are lost on restart
pub struct InMemoryJournal {
    entries: DashMap<u64, JournalEntry>,
    next_id: AtomicU64,
}

impl InMemoryJournal {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    fn entries_for(&self, user_id: u64) -> Vec<JournalEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.value().user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect()
    }
}

impl Default for InMemoryJournal {
    fn default() -> Self {
        Self::new()
    }
}

impl JournalRepository for InMemoryJournal {
    fn list_for_user(&self, user_id: u64) -> Result<Vec<JournalEntry>> {
        let mut entries = self.entries_for(user_id);
        entries.sort_by_key(|entry| entry.id);
        Ok(entries)
    }

    fn recent_for_user(&self, user_id: u64, limit: usize) -> Result<Vec<JournalEntry>> {
        let mut entries = self.entries_for(user_id);
        // Same-day entries stay in creation order
        entries.sort_by(|a, b| b.date.cmp(&a.date).then(a.id.cmp(&b.id)));
        entries.truncate(limit);
        Ok(entries)
    }

    fn get(&self, id: u64) -> Result<Option<JournalEntry>> {
        Ok(self.entries.get(&id).map(|entry| entry.value().clone()))
    }

    fn create(&self, entry: NewEntry) -> Result<JournalEntry> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let stored = JournalEntry {
            id,
            user_id: entry.user_id,
            date: entry.date,
            content: entry.content,
            mood: entry.mood,
            emotions: entry.emotions,
        };
        self.entries.insert(id, stored.clone());

        tracing::debug!(entry_id = id, user_id = stored.user_id, "Created journal entry");
        Ok(stored)
    }

    fn update(&self, id: u64, update: EntryUpdate) -> Result<Option<JournalEntry>> {
        Ok(self.entries.get_mut(&id).map(|mut entry| {
            update.apply(entry.value_mut());
            entry.value().clone()
        }))
    }

    fn delete(&self, id: u64) -> Result<bool> {
        let removed = self.entries.remove(&id).is_some();
        if removed {
            tracing::debug!(entry_id = id, "Deleted journal entry");
        }
        Ok(removed)
    }

    fn count(&self) -> usize {
        self.entries.len()
    }
}
