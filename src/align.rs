//! Alignment of driver tracks to a common length
//!
//! Playback indexes every driver's sequence with the same time step, so all
//! emitted sequences must be equally long. Longer tracks lose their tail.

use tracing::{info, warn};

use crate::extract::DriverTrack;
use crate::{ExportError, Result};

/// Driver tracks truncated to a common length
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedDataset {
    tracks: Vec<DriverTrack>,
    steps: usize,
}

impl AlignedDataset {
    /// Tracks in their original relative order
    pub fn tracks(&self) -> &[DriverTrack] {
        &self.tracks
    }

    /// Common sequence length
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn into_tracks(self) -> Vec<DriverTrack> {
        self.tracks
    }
}

/// Truncate every non-empty track to the shortest non-empty length
///
/// Empty tracks are left out of the dataset. Fails when no track has data.
pub fn align(tracks: Vec<DriverTrack>) -> Result<AlignedDataset> {
    let total = tracks.len();
    let steps = tracks.iter().filter(|t| !t.is_empty()).map(DriverTrack::len).min();

    let Some(steps) = steps else {
        return Err(ExportError::NoCoordinateData { drivers: total });
    };

    let mut aligned = Vec::with_capacity(total);
    for mut track in tracks {
        if track.is_empty() {
            warn!("Driver {} has no coordinates and is left out of the output", track.driver_number);
            continue;
        }
        track.coordinates.truncate(steps);
        aligned.push(track);
    }

    info!("Aligned {} of {} drivers to {} positions each", aligned.len(), total, steps);

    Ok(AlignedDataset { tracks: aligned, steps })
}
