//! Atomic artifact writes

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{ExportError, Result};

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write `contents` to `path` so readers never observe a partial file
///
/// Parent directories are created as needed. The contents go to a sibling
/// `.tmp` file first, which is then renamed over the target.
pub async fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if path.file_name().is_none() {
        return Err(ExportError::config_error(format!(
            "output path {} does not name a file",
            path.display()
        )));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| ExportError::file_error(parent.to_path_buf(), e))?;
    }

    let tmp = temp_path(path);
    debug!("Writing {} bytes to {}", contents.len(), tmp.display());

    if let Err(e) = tokio::fs::write(&tmp, contents).await {
        let _ = tokio::fs::remove_file(&tmp).await;
        return Err(ExportError::file_error(tmp, e));
    }

    if let Err(e) = tokio::fs::rename(&tmp, path).await {
        let _ = tokio::fs::remove_file(&tmp).await;
        return Err(ExportError::file_error(path.to_path_buf(), e));
    }

    Ok(())
}
