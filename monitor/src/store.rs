//! File-backed persistence for the last observed height and status
//!
//! Two small text files survive restarts so a crash does not re-trigger
//! transition alerts. A missing file means nothing was recorded yet.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::warn;

use crate::constants::state::{LAST_HEIGHT_FILE, LAST_STATUS_FILE};
use crate::errors::PersistError;
use crate::health::{Height, MonitorState, Status};

#[derive(Debug, Clone)]
pub struct FileStateStore {
    state_dir: PathBuf,
}

impl FileStateStore {
    pub fn new(state_dir: impl Into<PathBuf>) -> Self {
        Self {
            state_dir: state_dir.into(),
        }
    }

    pub fn height_path(&self) -> PathBuf {
        self.state_dir.join(LAST_HEIGHT_FILE)
    }

    pub fn status_path(&self) -> PathBuf {
        self.state_dir.join(LAST_STATUS_FILE)
    }

    /// Load both values; unreadable or corrupt files count as unset
    pub async fn load(&self) -> MonitorState {
        let last_height = self.load_height().await.unwrap_or_else(|e| {
            warn!("{} - treating last height as unset", e);
            None
        });
        let last_status = self.load_status().await.unwrap_or_else(|e| {
            warn!("{} - treating last status as unset", e);
            None
        });

        MonitorState {
            last_height,
            last_status,
        }
    }

    pub async fn load_height(&self) -> Result<Option<Height>, PersistError> {
        let path = self.height_path();
        match read_trimmed(&path).await? {
            Some(content) => content
                .parse::<Height>()
                .map(Some)
                .map_err(|_| PersistError::Corrupt {
                    path: path.display().to_string(),
                    content,
                }),
            None => Ok(None),
        }
    }

    pub async fn load_status(&self) -> Result<Option<Status>, PersistError> {
        let path = self.status_path();
        match read_trimmed(&path).await? {
            Some(content) => content
                .parse::<Status>()
                .map(Some)
                .map_err(|_| PersistError::Corrupt {
                    path: path.display().to_string(),
                    content,
                }),
            None => Ok(None),
        }
    }

    pub async fn save_height(&self, height: Height) -> Result<(), PersistError> {
        self.write(&self.height_path(), &height.to_string()).await
    }

    pub async fn save_status(&self, status: Status) -> Result<(), PersistError> {
        self.write(&self.status_path(), status.as_str()).await
    }

    async fn write(&self, path: &Path, content: &str) -> Result<(), PersistError> {
        let write_error = |e: std::io::Error| PersistError::Write {
            path: path.display().to_string(),
            reason: e.to_string(),
        };

        fs::create_dir_all(&self.state_dir)
            .await
            .map_err(write_error)?;
        fs::write(path, content).await.map_err(write_error)
    }
}

async fn read_trimmed(path: &Path) -> Result<Option<String>, PersistError> {
    match fs::read_to_string(path).await {
        Ok(content) => Ok(Some(content.trim().to_string())),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(PersistError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        }),
    }
}
