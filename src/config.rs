//! Export configuration
//!
//! The binary takes no flags. Settings come from `trackcast.yaml` in the
//! working directory (or the file named by `TRACKCAST_CONFIG`); every field is
//! optional and falls back to the defaults below.
//!
//! ```yaml
//! year: 2025
//! event: British Grand Prix
//! session: R
//! scale: hundredths
//! drivers: ["4", "81", "27"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::extract::ExtractOptions;
use crate::types::{Scale, SessionId, SessionKind};
use crate::{ExportError, Result};

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "trackcast.yaml";

/// Environment variable overriding the config file location
pub const CONFIG_ENV_VAR: &str = "TRACKCAST_CONFIG";

/// Which drivers to export
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "SelectionRepr", into = "SelectionRepr")]
pub enum DriverSelection {
    /// Every driver with a position series, in source order
    #[default]
    All,
    /// A fixed list, in the given order
    Fixed(Vec<String>),
}

/// Wire form: the keyword `all` or a list of driver numbers
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum SelectionRepr {
    Keyword(String),
    List(Vec<String>),
}

impl TryFrom<SelectionRepr> for DriverSelection {
    type Error = String;

    fn try_from(repr: SelectionRepr) -> std::result::Result<Self, Self::Error> {
        match repr {
            SelectionRepr::Keyword(k) if k.eq_ignore_ascii_case("all") => Ok(DriverSelection::All),
            SelectionRepr::Keyword(k) => {
                Err(format!("expected \"all\" or a list of drivers, got {k:?}"))
            }
            SelectionRepr::List(list) => Ok(DriverSelection::Fixed(list)),
        }
    }
}

impl From<DriverSelection> for SelectionRepr {
    fn from(selection: DriverSelection) -> Self {
        match selection {
            DriverSelection::All => SelectionRepr::Keyword("all".to_string()),
            DriverSelection::Fixed(list) => SelectionRepr::List(list),
        }
    }
}

/// Complete export configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    pub year: i32,
    pub event: String,
    pub session: SessionKind,
    /// Retry with `year - 1` when the requested season cannot be loaded
    pub fallback_to_previous_season: bool,
    /// Root of the session archive
    pub cache_dir: PathBuf,
    /// Generated file location
    pub output: PathBuf,
    pub scale: Scale,
    pub drivers: DriverSelection,
    pub include_metadata: bool,
    /// Replay milliseconds per one-second step
    pub time_step_ms: f64,
    pub update_interval_ms: u64,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            year: 2025,
            event: "British Grand Prix".to_string(),
            session: SessionKind::Race,
            fallback_to_previous_season: true,
            cache_dir: PathBuf::from("cache"),
            output: PathBuf::from("assets/f1-coordinates.js"),
            scale: Scale::Hundredths,
            drivers: DriverSelection::All,
            include_metadata: true,
            time_step_ms: 33.33,
            update_interval_ms: 50,
        }
    }
}

impl ExportConfig {
    /// Parse a YAML config document and validate it
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml_ng::from_str(yaml)
                .map_err(|e| ExportError::parse_error("export configuration", e))?
        };
        config.validate()?;
        Ok(config)
    }

    /// Load from a file; a missing file is an error
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| ExportError::file_error(path.to_path_buf(), e))?;
        Self::from_yaml(&yaml)
    }

    /// Load from `TRACKCAST_CONFIG`, else `trackcast.yaml` if present, else defaults
    pub fn discover() -> anyhow::Result<Self> {
        use anyhow::Context;

        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            let path = PathBuf::from(path);
            return Self::from_file(&path)
                .with_context(|| format!("loading config from {}", path.display()));
        }

        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            return Self::from_file(default_path)
                .with_context(|| format!("loading config from {}", default_path.display()));
        }

        Ok(Self::default())
    }

    /// Reject settings the pipeline cannot honor
    pub fn validate(&self) -> Result<()> {
        if self.event.trim().is_empty() {
            return Err(ExportError::config_error("event must not be empty"));
        }
        if !(self.time_step_ms.is_finite() && self.time_step_ms > 0.0) {
            return Err(ExportError::config_error(format!(
                "time_step_ms must be positive, got {}",
                self.time_step_ms
            )));
        }
        if self.update_interval_ms == 0 {
            return Err(ExportError::config_error("update_interval_ms must be positive"));
        }
        if matches!(&self.drivers, DriverSelection::Fixed(list) if list.is_empty()) {
            return Err(ExportError::config_error("drivers list must not be empty"));
        }
        Ok(())
    }

    /// The session to request first
    pub fn session_id(&self) -> SessionId {
        SessionId::new(self.year, self.event.clone(), self.session)
    }

    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions { scale: self.scale, include_metadata: self.include_metadata }
    }
}
