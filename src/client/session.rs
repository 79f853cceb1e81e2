//! Stored login for the terminal client.

use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::{SESSION_DIR_NAME, SESSION_FILE_NAME};
use crate::errors::{AppError, AppResult};

#[cfg(unix)]
const SESSION_FILE_MODE: u32 = 0o600;

/// Token and the email it was issued for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub email: String,
    pub access_token: String,
}

/// JSON file holding the current [`Session`]
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.frontdesk/session.json`, or relative to the working directory
    /// when no home directory is known.
    pub fn default_location() -> Self {
        let dir = dirs::home_dir()
            .map(|home| home.join(SESSION_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from(SESSION_DIR_NAME));
        Self::new(dir.join(SESSION_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> AppResult<Option<Session>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map(Some).map_err(|e| {
                AppError::internal(format!("Corrupt session file {:?}: {}", self.path, e))
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::internal(format!(
                "Failed to read session file {:?}: {}",
                self.path, e
            ))),
        }
    }

    /// The stored session, or Unauthorized when nobody is logged in
    pub async fn require(&self) -> AppResult<Session> {
        self.load().await?.ok_or(AppError::Unauthorized)
    }

    pub async fn save(&self, session: &Session) -> AppResult<()> {
        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir).await.map_err(|e| {
                AppError::internal(format!("Failed to create {:?}: {}", dir, e))
            })?;
        }

        let body = serde_json::to_vec_pretty(session)
            .map_err(|e| AppError::internal(format!("Failed to encode session: {}", e)))?;
        tokio::fs::write(&self.path, body).await.map_err(|e| {
            AppError::internal(format!("Failed to write session file {:?}: {}", self.path, e))
        })?;

        // The file holds a bearer token: owner read/write only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            let perms = std::fs::Permissions::from_mode(SESSION_FILE_MODE);
            tokio::fs::set_permissions(&self.path, perms).await.map_err(|e| {
                AppError::internal(format!("Failed to restrict {:?}: {}", self.path, e))
            })?;
        }

        tracing::debug!(path = ?self.path, "Session saved");
        Ok(())
    }

    /// Remove the session file. Returns false if there was none.
    pub async fn clear(&self) -> AppResult<bool> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Failed to remove session file {:?}: {}",
                self.path, e
            ))),
        }
    }
}
