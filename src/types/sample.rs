//! Raw position samples as recorded by the timing system

use serde::{Deserialize, Serialize};

/// One raw position reading for a car
///
/// Any axis may be missing when the transponder dropped out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawPositionSample {
    /// Seconds since session start
    #[serde(rename = "time")]
    pub timestamp: f64,

    /// Raw X in telemetry units
    pub x: Option<f64>,

    /// Raw Y in telemetry units
    pub y: Option<f64>,

    /// Raw Z (height) in telemetry units
    pub z: Option<f64>,
}

impl RawPositionSample {
    /// Create a sample with all three axes present
    pub fn new(timestamp: f64, x: f64, y: f64, z: f64) -> Self {
        Self { timestamp, x: Some(x), y: Some(y), z: Some(z) }
    }

    /// Whole-second bucket this sample falls into
    pub fn second(&self) -> i64 {
        self.timestamp.floor() as i64
    }

    /// Copy with non-finite axes treated as missing
    pub fn without_non_finite(self) -> Self {
        Self {
            x: self.x.filter(|v| v.is_finite()),
            y: self.y.filter(|v| v.is_finite()),
            z: self.z.filter(|v| v.is_finite()),
            ..self
        }
    }

    /// Fill axes that are still missing from a later reading
    pub fn fill_missing_from(&mut self, later: &Self) {
        let later = later.without_non_finite();
        self.x = self.x.or(later.x);
        self.y = self.y.or(later.y);
        self.z = self.z.or(later.z);
    }

    /// All three axes, if every one is present and finite
    pub fn axes(&self) -> Option<(f64, f64, f64)> {
        match (self.x, self.y, self.z) {
            (Some(x), Some(y), Some(z)) if x.is_finite() && y.is_finite() && z.is_finite() => {
                Some((x, y, z))
            }
            _ => None,
        }
    }
}
