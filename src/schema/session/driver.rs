//! Driver list entries from session info

use serde::{Deserialize, Serialize};

/// One entry of the session's driver list
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
#[serde(default)]
pub struct DriverEntry {
    /// Racing number, used as the driver identifier throughout
    pub driver_number: String,
    /// Full display name
    pub full_name: String,
    /// Team the driver raced for in this session
    pub team_name: Option<String>,
}

impl DriverEntry {
    pub fn new(
        driver_number: impl Into<String>,
        full_name: impl Into<String>,
        team_name: Option<&str>,
    ) -> Self {
        Self {
            driver_number: driver_number.into(),
            full_name: full_name.into(),
            team_name: team_name.map(str::to_string),
        }
    }
}
