//! In-memory model of the generated data file

use serde::{Deserialize, Serialize};

use crate::align::AlignedDataset;
use crate::roster::DriverRecord;
use crate::types::{Coordinate, Scale, SessionId};

/// Playback settings exposed as `coordinateConfig`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(specta::Type))]
#[serde(rename_all = "camelCase")]
pub struct PlaybackConfig {
    /// Milliseconds of wall-clock time per step
    pub time_step_duration: f64,
    /// Number of steps in every sequence
    pub total_time_steps: usize,
    /// Milliseconds between visualization updates
    pub update_interval: u64,
}

/// Everything the rendered file contains
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactDocument {
    /// Session the data came from
    pub session: SessionId,
    pub scale: Scale,
    /// Driver numbers, parallel to `coordinates`
    pub drivers: Vec<String>,
    /// One sequence per driver, all of length `config.total_time_steps`
    pub coordinates: Vec<Vec<Coordinate>>,
    /// Parallel metadata, when requested
    pub driver_info: Option<Vec<DriverRecord>>,
    pub config: PlaybackConfig,
}

impl ArtifactDocument {
    /// Build the document from an aligned dataset
    ///
    /// Metadata is emitted only when every track carries a record.
    pub fn from_dataset(
        dataset: AlignedDataset,
        session: SessionId,
        scale: Scale,
        time_step_ms: f64,
        update_interval_ms: u64,
    ) -> Self {
        let total_time_steps = dataset.steps();
        let tracks = dataset.into_tracks();

        let driver_info: Option<Vec<DriverRecord>> =
            tracks.iter().map(|t| t.record.clone()).collect();

        let mut drivers = Vec::with_capacity(tracks.len());
        let mut coordinates = Vec::with_capacity(tracks.len());
        for track in tracks {
            drivers.push(track.driver_number);
            coordinates.push(track.coordinates);
        }

        Self {
            session,
            scale,
            drivers,
            coordinates,
            driver_info,
            config: PlaybackConfig {
                time_step_duration: time_step_ms,
                total_time_steps,
                update_interval: update_interval_ms,
            },
        }
    }

    /// Each driver's coordinate at a step, as `getCoordinatesAtTimeStep` returns it
    pub fn coordinates_at(&self, step: usize) -> Option<Vec<Coordinate>> {
        if step >= self.config.total_time_steps {
            return None;
        }
        self.coordinates.iter().map(|seq| seq.get(step).copied()).collect()
    }

    /// Step index for an elapsed time in milliseconds, as `getCurrentTimeStep` computes it
    ///
    /// `floor(elapsed / timeStepDuration) mod totalTimeSteps`, always in range.
    pub fn current_time_step(&self, elapsed_ms: f64) -> usize {
        let total = self.config.total_time_steps;
        if total == 0 || !elapsed_ms.is_finite() {
            return 0;
        }
        let step = (elapsed_ms / self.config.time_step_duration).floor();
        step.rem_euclid(total as f64) as usize
    }
}
