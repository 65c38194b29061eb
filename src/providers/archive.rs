//! Archive provider for cached sessions on disk
//!
//! Layout: `<root>/<year>/<event-slug>/<session-code>/{session.yaml,position_data.json}`

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::provider::{LoadedSession, SessionProvider};
use crate::schema::{PositionData, SessionInfo};
use crate::types::SessionId;
use crate::{ExportError, Result};

/// File name of the session info document
pub const SESSION_INFO_FILE: &str = "session.yaml";

/// File name of the position data document
pub const POSITION_DATA_FILE: &str = "position_data.json";

/// Provider reading sessions from a cache directory
#[derive(Debug, Clone)]
pub struct ArchiveProvider {
    root: PathBuf,
}

impl ArchiveProvider {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }

    /// Cache root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding one session's files
    pub fn session_dir(&self, id: &SessionId) -> PathBuf {
        self.root.join(id.year.to_string()).join(id.event_slug()).join(id.kind.code())
    }
}

async fn read_file(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path).await.map_err(|e| ExportError::file_error(path.to_path_buf(), e))
}

#[async_trait::async_trait]
impl SessionProvider for ArchiveProvider {
    async fn load_session(&mut self, id: &SessionId) -> Result<LoadedSession> {
        let dir = self.session_dir(id);
        debug!("Looking for session {} in {}", id, dir.display());

        let exists =
            tokio::fs::try_exists(&dir).await.map_err(|e| ExportError::file_error(dir.clone(), e))?;
        if !exists {
            return Err(ExportError::session_not_found(format!("{} ({})", id, dir.display())));
        }

        let info = SessionInfo::parse(&read_file(&dir.join(SESSION_INFO_FILE)).await?)?;
        let positions = PositionData::parse(&read_file(&dir.join(POSITION_DATA_FILE)).await?)?;

        info!(
            "Loaded archived session {}: {} drivers listed, {} position series",
            id,
            info.drivers.len(),
            positions.drivers.len()
        );

        Ok(LoadedSession::new(id.clone(), info, positions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;
    use crate::types::SessionKind;

    #[tokio::test]
    async fn loads_fixture_session() {
        let root = test_utils::require_archive_fixture().expect("archive fixture");
        let mut provider = ArchiveProvider::new(&root);

        let id = SessionId::new(2024, "British Grand Prix", SessionKind::Race);
        let session = provider.load_session(&id).await.expect("fixture session should load");

        assert_eq!(session.id, id);
        assert_eq!(session.info.event_name, "British Grand Prix");
        assert_eq!(session.driver_numbers(), vec!["1", "44", "4", "81", "2"]);
        assert!(session.positions("44").is_some_and(|s| !s.is_empty()));
        assert_eq!(
            session.driver("44").and_then(|d| d.team_name.as_deref()),
            Some("Mercedes")
        );
    }

    #[tokio::test]
    async fn missing_season_is_session_not_found() {
        let root = test_utils::require_archive_fixture().expect("archive fixture");
        let mut provider = ArchiveProvider::new(&root);

        let id = SessionId::new(2025, "British Grand Prix", SessionKind::Race);
        let err = provider.load_session(&id).await.unwrap_err();
        assert!(matches!(err, ExportError::SessionNotFound { .. }), "got {err:?}");
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn unreadable_session_dir_is_a_file_error() {
        let root = test_utils::scratch_dir("archive-not-a-dir");
        std::fs::create_dir_all(&root).unwrap();
        // The year level is a plain file, so the session path cannot be probed
        std::fs::write(root.join("2024"), b"not a directory").unwrap();

        let mut provider = ArchiveProvider::new(&root);
        let id = SessionId::new(2024, "British Grand Prix", SessionKind::Race);
        let err = provider.load_session(&id).await.unwrap_err();
        assert!(matches!(err, ExportError::File { .. }), "got {err:?}");

        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn session_dir_uses_slug_and_code() {
        let provider = ArchiveProvider::new("cache");
        let id = SessionId::new(2024, "British Grand Prix", SessionKind::Qualifying);
        assert_eq!(
            provider.session_dir(&id),
            Path::new("cache").join("2024").join("british-grand-prix").join("Q")
        );
    }
}
