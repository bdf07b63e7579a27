//! Session registry: one match per identifier instead of a process-wide
//! global, plus process-unique connection ids.

use crate::session::{ConnectionId, MatchSession};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

pub struct SessionRegistry {
    sessions: DashMap<String, Arc<MatchSession>>,
    next_connection: AtomicU64,
}

impl SessionRegistry {
    pub fn new() -> Self {
        SessionRegistry {
            sessions: DashMap::new(),
            next_connection: AtomicU64::new(0),
        }
    }

    /// Session for `match_id`, created empty on first use. Sessions are
    /// reset in place when they empty, never removed.
    pub fn session(&self, match_id: &str) -> Arc<MatchSession> {
        self.sessions
            .entry(match_id.to_owned())
            .or_insert_with(|| Arc::new(MatchSession::new()))
            .clone()
    }

    /// Hand out the next connection id.
    pub fn next_connection_id(&self) -> ConnectionId {
        self.next_connection.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        SessionRegistry::new()
    }
}
