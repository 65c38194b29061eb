//! Normalized coordinates in visualization space

use serde::{Deserialize, Serialize};

/// Fixed divisor applied to raw telemetry units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scale {
    /// Divide raw units by 100
    #[default]
    Hundredths,

    /// Divide raw units by 1000
    Thousandths,
}

impl Scale {
    /// Divisor applied to every raw axis
    pub fn divisor(self) -> f64 {
        match self {
            Scale::Hundredths => 100.0,
            Scale::Thousandths => 1000.0,
        }
    }
}

/// A scaled position with the vertical axis in `y`
///
/// Raw telemetry is Z-up; the visualization is Y-up, so raw Z lands in `y`
/// and raw Y lands in `z`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(specta::Type))]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Coordinate {
    /// Scale raw axes and swap Y/Z
    pub fn from_raw(raw_x: f64, raw_y: f64, raw_z: f64, scale: Scale) -> Self {
        let divisor = scale.divisor();
        Self { x: raw_x / divisor, y: raw_z / divisor, z: raw_y / divisor }
    }

    /// The "no telemetry" sentinel
    pub fn is_origin(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axes_are_permuted_and_scaled() {
        let c = Coordinate::from_raw(100.0, 200.0, 300.0, Scale::Hundredths);
        assert_eq!(c, Coordinate { x: 1.0, y: 3.0, z: 2.0 });

        let c = Coordinate::from_raw(1500.0, -2500.0, 500.0, Scale::Thousandths);
        assert_eq!(c, Coordinate { x: 1.5, y: 0.5, z: -2.5 });
    }

    #[test]
    fn origin_detection_includes_negative_zero() {
        assert!(Coordinate::from_raw(0.0, 0.0, 0.0, Scale::Hundredths).is_origin());
        assert!(Coordinate::from_raw(-0.0, 0.0, -0.0, Scale::Hundredths).is_origin());
        assert!(!Coordinate::from_raw(0.0, 0.0, 1.0, Scale::Hundredths).is_origin());
    }

    #[test]
    fn scale_deserializes_from_snake_case() {
        let scale: Scale = serde_yaml_ng::from_str("thousandths").unwrap();
        assert_eq!(scale, Scale::Thousandths);
        assert_eq!(Scale::default().divisor(), 100.0);
    }
}
