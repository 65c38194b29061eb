//! Command-line entry point
//!
//! No flags: configuration comes from `trackcast.yaml` / `TRACKCAST_CONFIG`,
//! log level from `RUST_LOG`. Failures are logged and the process still exits
//! normally.

use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use trackcast::{ExportConfig, Trackcast};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();

    if let Err(e) = run().await {
        error!("{:#}", e);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = ExportConfig::discover()?;
    info!(
        "Exporting {} (cache: {}, output: {})",
        config.session_id(),
        config.cache_dir.display(),
        config.output.display()
    );

    match Trackcast::export(config).await {
        Ok(summary) => {
            info!(
                "Done: {} drivers x {} positions from {}",
                summary.drivers.len(),
                summary.steps,
                summary.session
            );
            if !summary.skipped.is_empty() {
                info!("Drivers without data: {:?}", summary.skipped);
            }
            Ok(())
        }
        Err(e) => {
            for suggestion in e.recovery_suggestions() {
                info!("  hint: {}", suggestion);
            }
            Err(e.into())
        }
    }
}
