//! End-to-end export: load, extract, align, render, write

use std::path::PathBuf;
use tracing::{debug, info};

use crate::align::align;
use crate::artifact::{ArtifactDocument, render_js, write_atomic};
use crate::config::{DriverSelection, ExportConfig};
use crate::extract::{DriverTrack, extract_driver};
use crate::loader::SessionLoader;
use crate::provider::{LoadedSession, SessionProvider};
use crate::types::SessionId;
use crate::Result;

/// What a successful run produced
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    /// Session the data actually came from
    pub session: SessionId,
    pub output: PathBuf,
    /// Drivers in the artifact, in cube order
    pub drivers: Vec<String>,
    /// Drivers that produced no coordinates
    pub skipped: Vec<String>,
    /// Positions per driver
    pub steps: usize,
}

/// Export pipeline bound to a provider and configuration
pub struct ExportPipeline<P> {
    loader: SessionLoader<P>,
    config: ExportConfig,
}

impl<P: SessionProvider> ExportPipeline<P> {
    pub fn new(provider: P, config: ExportConfig) -> Result<Self> {
        config.validate()?;
        let loader = SessionLoader::new(provider).with_fallback(config.fallback_to_previous_season);
        Ok(Self { loader, config })
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Drivers to extract, in output order
    pub fn select_drivers(&self, session: &LoadedSession) -> Vec<String> {
        match &self.config.drivers {
            DriverSelection::All => session.driver_numbers(),
            DriverSelection::Fixed(list) => list.clone(),
        }
    }

    /// Extract every selected driver; never fails
    pub fn extract_all(&self, session: &LoadedSession) -> Vec<DriverTrack> {
        let drivers = self.select_drivers(session);
        info!("Found {} drivers in the session: {:?}", drivers.len(), drivers);

        let options = self.config.extract_options();
        drivers
            .iter()
            .map(|driver| {
                debug!("Extracting data for driver {}", driver);
                extract_driver(session, driver, &options)
            })
            .collect()
    }

    /// Build the artifact document without touching the filesystem
    pub async fn build(&mut self) -> Result<(ArtifactDocument, Vec<String>)> {
        let requested = self.config.session_id();
        let session = self.loader.load(&requested).await?;

        let tracks = self.extract_all(&session);
        let skipped: Vec<String> =
            tracks.iter().filter(|t| t.is_empty()).map(|t| t.driver_number.clone()).collect();

        let dataset = align(tracks)?;
        let document = ArtifactDocument::from_dataset(
            dataset,
            session.id.clone(),
            self.config.scale,
            self.config.time_step_ms,
            self.config.update_interval_ms,
        );

        Ok((document, skipped))
    }

    /// Run the whole pipeline and write the artifact
    ///
    /// Nothing is written unless every step succeeds.
    pub async fn run(&mut self) -> Result<ExportSummary> {
        let (document, skipped) = self.build().await?;
        let contents = render_js(&document)?;

        let output = self.config.output.clone();
        write_atomic(&output, &contents).await?;

        info!(
            "Generated {} with {} coordinate positions",
            output.display(),
            document.config.total_time_steps
        );
        for (index, driver) in document.drivers.iter().enumerate() {
            info!("  - Cube {}: Driver {}", index + 1, driver);
        }

        Ok(ExportSummary {
            session: document.session,
            output,
            drivers: document.drivers,
            skipped,
            steps: document.config.total_time_steps,
        })
    }
}

/// Convenience wrapper: build a pipeline and run it once
pub async fn export<P: SessionProvider>(provider: P, config: ExportConfig) -> Result<ExportSummary> {
    ExportPipeline::new(provider, config)?.run().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ExportError;
    use crate::providers::MemoryProvider;
    use crate::test_utils::{british_gp, circular_samples, scratch_dir, synthetic_session};
    use crate::types::RawPositionSample;

    fn config_for(output: PathBuf) -> ExportConfig {
        ExportConfig { output, ..ExportConfig::default() }
    }

    #[tokio::test]
    async fn fixed_selection_keeps_configured_order() {
        let session = synthetic_session(
            british_gp(2025),
            vec![
                ("4", "Lando Norris", Some("McLaren"), circular_samples(40, 0.25, 4000.0)),
                ("81", "Oscar Piastri", Some("McLaren"), circular_samples(48, 0.25, 4100.0)),
                ("27", "Nico Hulkenberg", Some("Kick Sauber"), circular_samples(60, 0.25, 4200.0)),
            ],
        );
        let config = ExportConfig {
            drivers: DriverSelection::Fixed(vec!["27".into(), "4".into(), "99".into()]),
            ..ExportConfig::default()
        };

        let mut pipeline =
            ExportPipeline::new(MemoryProvider::new().with_session(session), config).unwrap();
        let (document, skipped) = pipeline.build().await.unwrap();

        assert_eq!(document.drivers, vec!["27", "4"]);
        assert_eq!(skipped, vec!["99"]);
        assert_eq!(document.config.total_time_steps, 10);
    }

    #[tokio::test]
    async fn all_drivers_empty_writes_nothing() {
        let nulls = vec![RawPositionSample { timestamp: 1.0, x: None, y: None, z: None }; 4];
        let origins = vec![RawPositionSample::new(2.0, 0.0, 0.0, 0.0); 4];
        let session = synthetic_session(
            british_gp(2025),
            vec![("1", "Max Verstappen", None, nulls), ("44", "Lewis Hamilton", None, origins)],
        );

        let dir = scratch_dir("pipeline-empty");
        let output = dir.join("f1-coordinates.js");
        let err = export(MemoryProvider::new().with_session(session), config_for(output.clone()))
            .await
            .unwrap_err();

        assert!(matches!(err, ExportError::NoCoordinateData { drivers: 2 }));
        assert!(!output.exists());
        assert!(!dir.exists());
    }

    #[tokio::test]
    async fn missing_sessions_write_nothing() {
        let dir = scratch_dir("pipeline-missing");
        let output = dir.join("f1-coordinates.js");

        let err = export(MemoryProvider::new(), config_for(output.clone())).await.unwrap_err();
        assert!(matches!(err, ExportError::SessionUnavailable { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn invalid_config_is_rejected_up_front() {
        let config = ExportConfig { time_step_ms: 0.0, ..ExportConfig::default() };
        assert!(ExportPipeline::new(MemoryProvider::new(), config).is_err());
    }
}
