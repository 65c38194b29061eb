//! # Session Information Parsing
//!
//! Each archived session carries a `session.yaml` describing the event and the
//! drivers that took part. Only the fields the exporter needs are modelled;
//! unknown keys are ignored.
//!
//! ```text
//! Year: 2024
//! EventName: British Grand Prix
//! SessionName: Race
//! Drivers:
//!   - DriverNumber: "44"
//!     FullName: Lewis Hamilton
//!     TeamName: Mercedes
//! ```
//!
//! Archives produced by older tooling sometimes contain stray control
//! characters, so the raw text goes through
//! [`preprocess_session_yaml`](crate::yaml_utils::preprocess_session_yaml)
//! before deserialization.

use serde::{Deserialize, Serialize};

pub mod driver;

pub use driver::DriverEntry;

use crate::yaml_utils;

/// Session information as stored next to the position data
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
#[serde(default)]
pub struct SessionInfo {
    /// Season
    pub year: Option<i32>,
    /// Official event name
    pub event_name: String,
    /// Human readable session name ("Race", "Qualifying", ...)
    pub session_name: Option<String>,
    /// Drivers entered in the session
    pub drivers: Vec<DriverEntry>,
}

impl SessionInfo {
    /// Parse raw session YAML, stripping control characters first
    pub fn parse(yaml: &str) -> crate::Result<Self> {
        let cleaned = yaml_utils::preprocess_session_yaml(yaml)?;
        serde_yaml_ng::from_str(&cleaned)
            .map_err(|e| crate::ExportError::parse_error("SessionInfo deserialization", e))
    }

    /// Look up a driver by racing number
    pub fn driver(&self, driver_number: &str) -> Option<&DriverEntry> {
        self.drivers.iter().find(|d| d.driver_number == driver_number)
    }
}
