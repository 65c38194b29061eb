//! Provider trait for telemetry sources

use crate::Result;
use crate::schema::{DriverEntry, PositionData, SessionInfo};
use crate::types::{RawPositionSample, SessionId};

/// A fully loaded session: driver list plus raw position series
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedSession {
    /// The session that was actually loaded (may differ from the request after fallback)
    pub id: SessionId,
    pub info: SessionInfo,
    pub positions: PositionData,
}

impl LoadedSession {
    pub fn new(id: SessionId, info: SessionInfo, positions: PositionData) -> Self {
        Self { id, info, positions }
    }

    /// Drivers that have a position series, in source order
    pub fn driver_numbers(&self) -> Vec<String> {
        self.positions.driver_numbers().into_iter().map(str::to_string).collect()
    }

    /// Raw position series for a driver
    pub fn positions(&self, driver_number: &str) -> Option<&[RawPositionSample]> {
        self.positions.samples(driver_number)
    }

    /// Name and team lookup for a driver
    pub fn driver(&self, driver_number: &str) -> Option<&DriverEntry> {
        self.info.driver(driver_number)
    }
}

/// Trait for telemetry sources
///
/// Providers abstract over where sessions come from (an on-disk archive,
/// memory, a remote service). Loading is all-or-nothing: a provider either
/// returns a complete session or an error.
#[async_trait::async_trait]
pub trait SessionProvider: Send {
    /// Load one session
    ///
    /// Returns:
    /// - `Ok(session)` - Session info and position data are available
    /// - `Err(ExportError::SessionNotFound)` - The source has no such session
    /// - `Err(e)` - Reading or decoding the session failed
    async fn load_session(&mut self, id: &SessionId) -> Result<LoadedSession>;
}
