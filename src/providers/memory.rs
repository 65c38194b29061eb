//! In-memory provider for embedding and tests

use std::collections::HashMap;
use tracing::debug;

use crate::provider::{LoadedSession, SessionProvider};
use crate::types::SessionId;
use crate::{ExportError, Result};

/// Provider serving sessions that were built in memory
#[derive(Debug, Default, Clone)]
pub struct MemoryProvider {
    sessions: HashMap<SessionId, LoadedSession>,
    requests: Vec<SessionId>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a session, keyed by its own id
    pub fn with_session(mut self, session: LoadedSession) -> Self {
        self.insert(session);
        self
    }

    pub fn insert(&mut self, session: LoadedSession) {
        self.sessions.insert(session.id.clone(), session);
    }

    /// Every id requested so far, in order
    pub fn requests(&self) -> &[SessionId] {
        &self.requests
    }
}

#[async_trait::async_trait]
impl SessionProvider for MemoryProvider {
    async fn load_session(&mut self, id: &SessionId) -> Result<LoadedSession> {
        self.requests.push(id.clone());
        debug!("Memory provider lookup for {}", id);

        self.sessions.get(id).cloned().ok_or_else(|| ExportError::session_not_found(id.to_string()))
    }
}
