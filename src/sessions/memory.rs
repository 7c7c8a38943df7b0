// In-memory session history

use anyhow::Result;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{NewSession, PmrSession, SessionRepository};

pub struct InMemorySessions {
    sessions: DashMap<u64, PmrSession>,
    next_id: AtomicU64,
}

impl InMemorySessions {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }
}

impl Default for InMemorySessions {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionRepository for InMemorySessions {
    fn record(&self, session: NewSession) -> Result<PmrSession> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let stored = PmrSession {
            id,
            user_id: session.user_id,
            exercise_id: session.exercise_id,
            date: session.date,
            duration: session.duration,
            completed_steps: session.completed_steps,
            rating: session.rating,
            notes: session.notes,
        };
        self.sessions.insert(id, stored.clone());

        tracing::debug!(
            session_id = id,
            user_id = stored.user_id,
            exercise_id = stored.exercise_id,
            "Recorded relaxation session"
        );
        Ok(stored)
    }

    fn history_for_user(&self, user_id: u64) -> Result<Vec<PmrSession>> {
        let mut sessions: Vec<PmrSession> = self
            .sessions
            .iter()
            .filter(|session| session.value().user_id == user_id)
            .map(|session| session.value().clone())
            .collect();
        sessions.sort_by_key(|session| session.id);
        Ok(sessions)
    }

    fn count(&self) -> usize {
        self.sessions.len()
    }
}
