//! Export F1 car positions as a static data file for replay visualizations.
//!
//! trackcast reads archived position telemetry for one session, keeps one
//! sample per second for every driver, rescales and reorders the axes for a
//! Y-up scene, and writes a script the front-end loads directly.
//!
//! # Pipeline
//!
//! ```text
//! SessionProvider ──► SessionLoader ──► extract (per driver) ──► align ──► render ──► write
//!                     (year, then        (never fails)           (common
//!                      year - 1)                                  length)
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use trackcast::{ExportConfig, Trackcast};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> trackcast::Result<()> {
//!     let config = ExportConfig::default();
//!     let summary = Trackcast::export(config).await?;
//!     println!("{} drivers, {} steps", summary.drivers.len(), summary.steps);
//!     Ok(())
//! }
//! ```

// Core types and error handling
mod error;
#[cfg_attr(any(test, feature = "benchmark"), path = "test_utils.rs")]
#[cfg(any(test, feature = "benchmark"))]
pub mod test_utils;
pub mod types;
mod yaml_utils;

// Data sources
pub mod provider;
pub mod providers;
pub mod schema;

// Pipeline stages
pub mod align;
pub mod artifact;
pub mod config;
pub mod extract;
pub mod loader;
pub mod pipeline;
pub mod roster;

// Core exports
pub use error::*;
pub use types::*;

pub use align::{AlignedDataset, align};
pub use artifact::{ArtifactDocument, PlaybackConfig};
pub use config::{DriverSelection, ExportConfig};
pub use extract::{DriverTrack, ExtractOptions};
pub use loader::SessionLoader;
pub use pipeline::{ExportPipeline, ExportSummary};
pub use provider::{LoadedSession, SessionProvider};
pub use providers::{ArchiveProvider, MemoryProvider};
pub use roster::DriverRecord;
pub use schema::{PositionData, SessionInfo};

/// Entry point for running an export against the on-disk archive.
pub struct Trackcast;

impl Trackcast {
    /// Run the full pipeline with sessions read from `config.cache_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration is invalid
    /// - Neither the configured season nor the previous one can be loaded
    /// - No selected driver has a single usable coordinate
    /// - The artifact cannot be written
    ///
    /// A failure never leaves a partial file behind.
    pub async fn export(config: ExportConfig) -> Result<ExportSummary> {
        let provider = ArchiveProvider::new(&config.cache_dir);
        pipeline::export(provider, config).await
    }

    /// Run the full pipeline against any provider.
    pub async fn export_with<P: SessionProvider>(
        provider: P,
        config: ExportConfig,
    ) -> Result<ExportSummary> {
        pipeline::export(provider, config).await
    }
}
