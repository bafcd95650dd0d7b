//! Session store persisted as a JSON file.
//!
//! The file is replaced atomically: the new session is written to a sibling
//! temp file which is then renamed over the old one, so a crash mid-write
//! never leaves a truncated session behind. An in-memory copy serves reads.

use async_trait::async_trait;
use sm_core::domain::entities::Session;
use sm_core::errors::SessionStoreError;
use sm_core::session::SessionStore;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

use crate::InfrastructureError;

/// Durable session store backed by a file
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    cached: RwLock<Session>,
}

impl FileSessionStore {
    /// Open the store, loading a previously saved session if the file exists.
    ///
    /// An unreadable or corrupt file starts a signed-out session.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, InfrastructureError> {
        let path = path.into();
        let session = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice::<Session>(&bytes).unwrap_or_else(|err| {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "Session file is corrupt, starting signed out"
                );
                Session::default()
            }),
            Err(err) if err.kind() == ErrorKind::NotFound => Session::default(),
            Err(err) => return Err(err.into()),
        };

        tracing::debug!(
            path = %path.display(),
            authenticated = session.is_authenticated(),
            "Session store opened"
        );

        Ok(Self {
            path,
            cached: RwLock::new(session),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "session.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn persist(&self, session: &Session) -> Result<(), InfrastructureError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let temp = self.temp_path();
        let bytes = serde_json::to_vec_pretty(session)?;
        tokio::fs::write(&temp, bytes).await?;
        tokio::fs::rename(&temp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn session(&self) -> Session {
        self.cached.read().await.clone()
    }

    async fn save_tokens(
        &self,
        access_token: &str,
        refresh_token: Option<&str>,
        email: Option<&str>,
    ) -> Result<(), SessionStoreError> {
        let mut cached = self.cached.write().await;
        let mut next = cached.clone();
        next.apply(access_token, refresh_token, email);

        self.persist(&next).await.map_err(|err| {
            tracing::error!(path = %self.path.display(), error = %err, "Failed to write session file");
            SessionStoreError::from(err)
        })?;
        *cached = next;
        Ok(())
    }

    async fn clear_tokens(&self) -> Result<(), SessionStoreError> {
        let mut cached = self.cached.write().await;
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => {
                tracing::error!(path = %self.path.display(), error = %err, "Failed to remove session file");
                return Err(InfrastructureError::from(err).into());
            }
        }
        *cached = Session::default();
        Ok(())
    }
}
