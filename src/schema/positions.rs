//! Per-driver position data as archived in `position_data.json`

use serde::{Deserialize, Serialize};

use crate::types::RawPositionSample;

/// Position series of one driver
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DriverPositions {
    pub driver_number: String,
    #[serde(default)]
    pub samples: Vec<RawPositionSample>,
}

/// All position series of a session, in archive order
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PositionData {
    #[serde(default)]
    pub drivers: Vec<DriverPositions>,
}

impl PositionData {
    /// Parse `position_data.json` contents
    pub fn parse(json: &str) -> crate::Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| crate::ExportError::parse_error("PositionData deserialization", e))
    }

    /// Driver identifiers in archive order, first occurrence wins
    pub fn driver_numbers(&self) -> Vec<&str> {
        let mut seen = Vec::with_capacity(self.drivers.len());
        for entry in &self.drivers {
            if !seen.contains(&entry.driver_number.as_str()) {
                seen.push(entry.driver_number.as_str());
            }
        }
        seen
    }

    /// Raw series for a driver, if the archive has one
    pub fn samples(&self, driver_number: &str) -> Option<&[RawPositionSample]> {
        self.drivers
            .iter()
            .find(|d| d.driver_number == driver_number)
            .map(|d| d.samples.as_slice())
    }
}
