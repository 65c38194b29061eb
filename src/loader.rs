//! Session loading with a one-season fallback

use tracing::{error, info, warn};

use crate::provider::{LoadedSession, SessionProvider};
use crate::types::SessionId;
use crate::{ExportError, Result};

/// Loads a session, retrying once with the previous season
///
/// No backoff and no further retries: the current season either exists in the
/// source or the same event one year earlier is used.
pub struct SessionLoader<P> {
    provider: P,
    fallback: bool,
}

impl<P: SessionProvider> SessionLoader<P> {
    pub fn new(provider: P) -> Self {
        Self { provider, fallback: true }
    }

    /// Enable or disable the previous-season retry
    pub fn with_fallback(mut self, fallback: bool) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Load `id`, or `id.previous_season()` if that fails
    pub async fn load(&mut self, id: &SessionId) -> Result<LoadedSession> {
        info!("Loading {} session...", id);

        let primary = match self.provider.load_session(id).await {
            Ok(session) => {
                info!("Session {} loaded successfully", id);
                return Ok(session);
            }
            Err(e) => e,
        };

        warn!("Error loading session {}: {}", id, primary);
        if !self.fallback {
            error!("Previous-season fallback disabled, giving up");
            return Err(primary);
        }

        let previous = id.previous_season();
        warn!("{} data might not be available yet. Trying {}...", id.year, previous.year);

        match self.provider.load_session(&previous).await {
            Ok(session) => {
                info!("Session {} loaded successfully", previous);
                Ok(session)
            }
            Err(fallback) => {
                error!("Error loading session {}: {}", previous, fallback);
                Err(ExportError::SessionUnavailable {
                    primary: primary.to_string(),
                    fallback: fallback.to_string(),
                })
            }
        }
    }
}
