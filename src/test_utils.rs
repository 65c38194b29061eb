//! Test utilities for fixture resolution and synthetic sessions
//!
//! Fixtures live under `test-data/` in the crate root. Synthetic sessions are
//! built in memory for tests that need exact control over the samples.

#![cfg(any(test, feature = "benchmark"))]

use std::path::{Path, PathBuf};

use crate::provider::LoadedSession;
use crate::schema::{DriverEntry, DriverPositions, PositionData, SessionInfo};
use crate::types::{RawPositionSample, SessionId, SessionKind};

/// Error returned when a required fixture cannot be located.
#[derive(Debug, Clone)]
pub struct FixtureError {
    message: String,
}

impl FixtureError {
    fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl std::fmt::Display for FixtureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for FixtureError {}

/// The crate's `test-data/` directory
pub fn test_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("test-data")
}

/// Require that a fixture exists on disk.
pub fn require_fixture<P: AsRef<Path>>(path: P) -> Result<PathBuf, FixtureError> {
    let path_ref = path.as_ref();
    if path_ref.exists() {
        Ok(path_ref.to_path_buf())
    } else {
        Err(FixtureError::new(format!("Missing fixture: {}", path_ref.display())))
    }
}

/// Root of the archived-session fixture (contains the 2024 British Grand Prix race)
pub fn require_archive_fixture() -> Result<PathBuf, FixtureError> {
    require_fixture(test_data_dir().join("archive"))
}

/// A scratch directory unique to this process and test name
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("trackcast-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

/// A driver lapping a circle at one sample every `step` seconds
///
/// Starts at `t = 0.1` so no sample sits on the origin.
pub fn circular_samples(count: usize, step: f64, radius: f64) -> Vec<RawPositionSample> {
    (0..count)
        .map(|i| {
            let t = 0.1 + i as f64 * step;
            let angle = t / 10.0;
            RawPositionSample::new(t, radius * angle.cos(), radius * angle.sin(), 150.0)
        })
        .collect()
}

/// Build an in-memory session from `(driver_number, full_name, team, samples)` rows
pub fn synthetic_session(
    id: SessionId,
    rows: Vec<(&str, &str, Option<&str>, Vec<RawPositionSample>)>,
) -> LoadedSession {
    let mut info = SessionInfo {
        year: Some(id.year),
        event_name: id.event.clone(),
        session_name: Some("Race".to_string()),
        drivers: Vec::with_capacity(rows.len()),
    };
    let mut positions = PositionData::default();

    for (number, name, team, samples) in rows {
        info.drivers.push(DriverEntry::new(number, name, team));
        positions.drivers.push(DriverPositions { driver_number: number.to_string(), samples });
    }

    LoadedSession::new(id, info, positions)
}

/// Session id used by synthetic sessions
pub fn british_gp(year: i32) -> SessionId {
    SessionId::new(year, "British Grand Prix", SessionKind::Race)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_fixture_exists() {
        let root = require_archive_fixture().expect("archive fixture should be checked in");
        assert!(root.join("2024").join("british-grand-prix").join("R").is_dir());
    }

    #[test]
    fn test_require_fixture_errors_when_missing() {
        let result = require_fixture(test_data_dir().join("__missing_fixture"));
        let message = result.unwrap_err().to_string();
        assert!(message.contains("Missing fixture"));
    }

    #[test]
    fn test_circular_samples_are_monotonic() {
        let samples = circular_samples(20, 0.25, 1000.0);
        assert_eq!(samples.len(), 20);
        assert!(samples.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
    }
}
