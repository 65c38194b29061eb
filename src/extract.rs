//! Per-driver coordinate extraction
//!
//! Turns one driver's raw position series into the coordinate sequence the
//! visualization plays back:
//!
//! ```text
//! raw samples ──► sort by time ──► first value per axis per second ──► drop incomplete
//!                                                                           │
//!        DriverTrack ◄── drop origin ◄── scale + swap Y/Z ◄─────────────────┘
//! ```
//!
//! Extraction never fails. A driver without usable data yields an empty track,
//! and the alignment step decides what an empty track means for the run.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::provider::LoadedSession;
use crate::roster::DriverRecord;
use crate::types::{Coordinate, RawPositionSample, Scale};

/// Knobs for the extraction step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExtractOptions {
    pub scale: Scale,
    pub include_metadata: bool,
}

/// Extraction result for one driver
#[derive(Debug, Clone, PartialEq)]
pub struct DriverTrack {
    pub driver_number: String,
    /// Present when metadata was requested
    pub record: Option<DriverRecord>,
    pub coordinates: Vec<Coordinate>,
}

impl DriverTrack {
    /// Track with no coordinates
    pub fn empty(driver_number: &str, include_metadata: bool) -> Self {
        Self {
            driver_number: driver_number.to_string(),
            record: include_metadata.then(|| DriverRecord::placeholder(driver_number)),
            coordinates: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}

/// Collapse every whole-second bucket into one sample
///
/// Samples are stably sorted by timestamp first, so among samples sharing a
/// timestamp the one that came first in the source wins. Each axis takes the
/// first present value in its bucket, which means a reading missing an axis
/// is completed by a later reading from the same second. The bucket keeps the
/// timestamp of its first sample. Samples with a non-finite timestamp are
/// discarded and non-finite axes count as missing.
pub fn downsample(samples: &[RawPositionSample]) -> Vec<RawPositionSample> {
    let mut sorted: Vec<RawPositionSample> =
        samples.iter().copied().filter(|s| s.timestamp.is_finite()).collect();
    // Timestamps are finite here; -0.0 and 0.0 compare equal and keep source order
    sorted.sort_by(|a, b| a.timestamp.partial_cmp(&b.timestamp).unwrap_or(Ordering::Equal));

    let mut result: Vec<RawPositionSample> = Vec::with_capacity(sorted.len() / 4 + 1);
    for sample in sorted {
        match result.last_mut() {
            Some(bucket) if bucket.second() == sample.second() => bucket.fill_missing_from(&sample),
            _ => result.push(sample.without_non_finite()),
        }
    }

    result
}

/// Scale, permute and filter downsampled samples
///
/// Samples missing an axis are dropped, as are coordinates at the origin.
pub fn normalize(samples: &[RawPositionSample], scale: Scale) -> Vec<Coordinate> {
    samples
        .iter()
        .filter_map(RawPositionSample::axes)
        .map(|(x, y, z)| Coordinate::from_raw(x, y, z, scale))
        .filter(|c| !c.is_origin())
        .collect()
}

/// Run the full per-driver pipeline on a raw series
pub fn extract_coordinates(samples: &[RawPositionSample], scale: Scale) -> Vec<Coordinate> {
    normalize(&downsample(samples), scale)
}

/// Extract one driver's track from a loaded session
pub fn extract_driver(
    session: &LoadedSession,
    driver_number: &str,
    options: &ExtractOptions,
) -> DriverTrack {
    let samples = match session.positions(driver_number) {
        Some(samples) if !samples.is_empty() => samples,
        _ => {
            warn!("No position data found for driver {}", driver_number);
            return DriverTrack::empty(driver_number, options.include_metadata);
        }
    };

    info!("Found {} position records for driver {}", samples.len(), driver_number);

    let downsampled = downsample(samples);
    let coordinates = normalize(&downsampled, options.scale);

    debug!(
        driver = driver_number,
        raw = samples.len(),
        seconds = downsampled.len(),
        kept = coordinates.len(),
        "Downsampled position series"
    );

    if coordinates.is_empty() {
        warn!("Driver {} has no usable coordinates after filtering", driver_number);
        return DriverTrack::empty(driver_number, options.include_metadata);
    }

    info!("Extracted {} non-zero coordinates for driver {}", coordinates.len(), driver_number);

    let record = options.include_metadata.then(|| match session.driver(driver_number) {
        Some(entry) => DriverRecord::from_entry(entry),
        None => {
            warn!("Driver {} missing from session driver list, using placeholder", driver_number);
            DriverRecord::placeholder(driver_number)
        }
    });

    DriverTrack { driver_number: driver_number.to_string(), record, coordinates }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{british_gp, circular_samples, synthetic_session};
    use proptest::prelude::*;

    fn sample(t: f64, x: f64, y: f64, z: f64) -> RawPositionSample {
        RawPositionSample::new(t, x, y, z)
    }

    #[test]
    fn first_sample_wins_and_origin_is_dropped() {
        let raw = vec![
            sample(0.2, 100.0, 200.0, 300.0),
            sample(0.2, 150.0, 250.0, 350.0),
            sample(1.4, 0.0, 0.0, 0.0),
        ];

        let coords = extract_coordinates(&raw, Scale::Hundredths);
        assert_eq!(coords, vec![Coordinate { x: 1.0, y: 3.0, z: 2.0 }]);
    }

    #[test]
    fn unsorted_input_is_sorted_before_bucketing() {
        let raw = vec![
            sample(2.5, 30.0, 30.0, 30.0),
            sample(0.9, 10.0, 10.0, 10.0),
            sample(2.1, 20.0, 20.0, 20.0),
            sample(0.1, 5.0, 5.0, 5.0),
        ];

        let down = downsample(&raw);
        let times: Vec<f64> = down.iter().map(|s| s.timestamp).collect();
        assert_eq!(times, vec![0.1, 2.1]);
    }

    #[test]
    fn missing_axis_is_filled_from_later_sample_in_same_second() {
        let mut leader = sample(3.0, 100.0, 200.0, 0.0);
        leader.z = None;
        let raw = vec![leader, sample(3.5, 900.0, 900.0, 400.0)];

        let coords = extract_coordinates(&raw, Scale::Hundredths);
        assert_eq!(coords, vec![Coordinate { x: 1.0, y: 4.0, z: 2.0 }]);

        let down = downsample(&raw);
        assert_eq!(down.len(), 1);
        assert_eq!(down[0].timestamp, 3.0);
    }

    #[test]
    fn second_without_any_value_for_an_axis_is_dropped() {
        let mut first = sample(3.0, 1.0, 1.0, 1.0);
        first.z = None;
        let mut second = sample(3.5, 200.0, 200.0, 200.0);
        second.z = Some(f64::NAN);
        let raw = vec![first, second, sample(4.0, 300.0, 300.0, 300.0)];

        let coords = extract_coordinates(&raw, Scale::Hundredths);
        assert_eq!(coords, vec![Coordinate { x: 3.0, y: 3.0, z: 3.0 }]);
    }

    #[test]
    fn negative_zero_timestamp_keeps_source_order() {
        let raw = vec![sample(0.0, 100.0, 100.0, 100.0), sample(-0.0, 200.0, 200.0, 200.0)];

        let down = downsample(&raw);
        assert_eq!(down.len(), 1);
        assert_eq!(down[0].x, Some(100.0));
    }

    #[test]
    fn non_finite_timestamps_are_discarded() {
        let raw = vec![sample(f64::NAN, 1.0, 1.0, 1.0), sample(0.5, 100.0, 100.0, 100.0)];
        assert_eq!(downsample(&raw).len(), 1);
    }

    #[test]
    fn thousandths_scale() {
        let coords = extract_coordinates(&[sample(0.0, 1000.0, 2000.0, 3000.0)], Scale::Thousandths);
        assert_eq!(coords, vec![Coordinate { x: 1.0, y: 3.0, z: 2.0 }]);
    }

    #[test]
    fn driver_without_samples_gets_placeholder() {
        let session = synthetic_session(
            british_gp(2024),
            vec![("5", "Empty Car", Some("Williams"), Vec::new())],
        );
        let options = ExtractOptions { scale: Scale::Hundredths, include_metadata: true };

        let track = extract_driver(&session, "5", &options);
        assert!(track.is_empty());
        let record = track.record.expect("metadata requested");
        assert_eq!(record.driver_name, "Driver 5");
        assert_eq!(record.driver_abbreviation, "DRV5");
        assert_eq!(record.team_color, "#cccccc");

        let unknown = extract_driver(&session, "77", &options);
        assert!(unknown.is_empty());
        assert_eq!(unknown.record.map(|r| r.driver_name), Some("Driver 77".to_string()));
    }

    #[test]
    fn driver_with_only_nulls_is_empty() {
        let nulls = vec![RawPositionSample { timestamp: 0.0, x: None, y: None, z: None }; 5];
        let session = synthetic_session(british_gp(2024), vec![("2", "Logan Sargeant", None, nulls)]);
        let options = ExtractOptions { scale: Scale::Hundredths, include_metadata: false };

        let track = extract_driver(&session, "2", &options);
        assert!(track.is_empty());
        assert!(track.record.is_none());
    }

    #[test]
    fn driver_with_data_gets_table_metadata() {
        let session = synthetic_session(
            british_gp(2024),
            vec![("44", "Lewis Hamilton", Some("Mercedes"), circular_samples(40, 0.25, 4000.0))],
        );
        let options = ExtractOptions { scale: Scale::Hundredths, include_metadata: true };

        let track = extract_driver(&session, "44", &options);
        assert_eq!(track.len(), 10);
        let record = track.record.expect("metadata requested");
        assert_eq!(record.driver_abbreviation, "HAM");
        assert_eq!(record.team_color, "#27F4D2");
    }

    fn arb_sample() -> impl Strategy<Value = RawPositionSample> {
        (
            0.0f64..120.0,
            prop::option::weighted(0.9, -3.0f64..3.0),
            prop::option::weighted(0.9, -3.0f64..3.0),
            prop::option::weighted(0.9, -3.0f64..3.0),
        )
            .prop_map(|(t, x, y, z)| RawPositionSample {
                timestamp: t,
                x: x.map(f64::round),
                y: y.map(f64::round),
                z: z.map(f64::round),
            })
    }

    proptest! {
        #[test]
        fn downsampling_is_idempotent(samples in prop::collection::vec(arb_sample(), 0..200)) {
            let once = downsample(&samples);
            let twice = downsample(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn at_most_one_sample_per_second(samples in prop::collection::vec(arb_sample(), 0..200)) {
            let down = downsample(&samples);
            prop_assert!(down.windows(2).all(|w| w[0].second() < w[1].second()));
        }

        #[test]
        fn no_origin_is_ever_emitted(samples in prop::collection::vec(arb_sample(), 0..200)) {
            // Rounded axes in [-3, 3] hit the origin often
            for coord in extract_coordinates(&samples, Scale::Hundredths) {
                prop_assert!(!(coord.x == 0.0 && coord.y == 0.0 && coord.z == 0.0));
            }
        }
    }
}
