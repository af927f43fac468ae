//! Core SessionStore implementation

use std::collections::HashMap;
use std::sync::RwLock;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

/// Unique identifier for a planning session
pub type SessionId = String;

/// Typed slot within a session
///
/// Each key holds at most one value; writing a key replaces the previous
/// value for that key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionKey {
    /// The immutable trip request captured at submission
    TripRequest,
    /// The generated bundle of itinerary variants
    ItineraryBundle,
    /// The user's finalized selection and cost summary
    FinalSelection,
}

impl SessionKey {
    /// Stable name, used in logs and by file-backed implementations
    pub fn name(&self) -> &'static str {
        match self {
            Self::TripRequest => "trip-request",
            Self::ItineraryBundle => "itinerary-bundle",
            Self::FinalSelection => "final-selection",
        }
    }
}

impl std::fmt::Display for SessionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Errors from session store operations
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session not found: {0}")]
    NotFound(SessionId),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// One session's slots plus bookkeeping
struct SessionRecord {
    created_at: i64,
    slots: HashMap<SessionKey, serde_json::Value>,
}

impl SessionRecord {
    fn new() -> Self {
        Self {
            created_at: chrono::Utc::now().timestamp_millis(),
            slots: HashMap::new(),
        }
    }
}

/// In-memory, thread-safe session store
///
/// All mutation happens under a single lock, so a reader always observes a
/// fully-consistent snapshot of a session's slots.
pub struct SessionStore {
    sessions: RwLock<HashMap<SessionId, SessionRecord>>,
}

impl SessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Start a new session, returning its id
    pub fn create(&self) -> SessionId {
        let id = Uuid::now_v7().to_string();
        let mut sessions = self.sessions.write().expect("session lock poisoned");
        sessions.insert(id.clone(), SessionRecord::new());
        info!(session_id = %id, "Session created");
        id
    }

    /// Store a value in a session slot, replacing any previous value
    pub fn put<T: Serialize>(&self, id: &str, key: SessionKey, value: &T) -> Result<(), SessionError> {
        let json = serde_json::to_value(value)?;
        let mut sessions = self.sessions.write().expect("session lock poisoned");
        let record = sessions
            .get_mut(id)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;
        record.slots.insert(key, json);
        debug!(session_id = %id, %key, "Session slot written");
        Ok(())
    }

    /// Read a value from a session slot
    ///
    /// Returns `Ok(None)` when the session exists but the slot is empty.
    pub fn get<T: DeserializeOwned>(&self, id: &str, key: SessionKey) -> Result<Option<T>, SessionError> {
        let sessions = self.sessions.read().expect("session lock poisoned");
        let record = sessions.get(id).ok_or_else(|| SessionError::NotFound(id.to_string()))?;

        match record.slots.get(&key) {
            Some(json) => Ok(Some(serde_json::from_value(json.clone())?)),
            None => Ok(None),
        }
    }

    /// Check whether a session exists
    pub fn contains(&self, id: &str) -> bool {
        self.sessions.read().expect("session lock poisoned").contains_key(id)
    }

    /// Session creation timestamp (unix ms), if the session exists
    pub fn created_at(&self, id: &str) -> Option<i64> {
        self.sessions
            .read()
            .expect("session lock poisoned")
            .get(id)
            .map(|r| r.created_at)
    }

    /// End a session, discarding all its state
    ///
    /// Returns true if the session existed.
    pub fn end(&self, id: &str) -> bool {
        let mut sessions = self.sessions.write().expect("session lock poisoned");
        let existed = sessions.remove(id).is_some();
        if existed {
            info!(session_id = %id, "Session ended");
        }
        existed
    }

    /// Number of live sessions
    pub fn len(&self) -> usize {
        self.sessions.read().expect("session lock poisoned").len()
    }

    /// True when no sessions are live
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
