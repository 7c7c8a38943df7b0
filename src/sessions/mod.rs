// Sessions module
// Completed muscle relaxation sessions and the repository that records them

mod memory;

pub use memory::InMemorySessions;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A completed relaxation session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PmrSession {
    pub id: u64,
    pub user_id: u64,
    pub exercise_id: u64,
    /// When the session was recorded
    pub date: DateTime<Utc>,
    /// Seconds actually practiced
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_steps: Option<u32>,
    /// Self-reported, `null` when not given
    pub rating: Option<u8>,
    pub notes: String,
}

/// Fields for a new session; the repository assigns the id
#[derive(Debug, Clone)]
pub struct NewSession {
    pub user_id: u64,
    pub exercise_id: u64,
    pub date: DateTime<Utc>,
    pub duration: Option<u32>,
    pub completed_steps: Option<u32>,
    pub rating: Option<u8>,
    pub notes: String,
}

/// Storage for session history. Shared between request handlers.
pub trait SessionRepository: Send + Sync {
    fn record(&self, session: NewSession) -> Result<PmrSession>;

    /// A user's sessions in the order they were recorded
    fn history_for_user(&self, user_id: u64) -> Result<Vec<PmrSession>>;

    fn count(&self) -> usize;
}
