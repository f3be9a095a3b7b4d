//! File-backed session store.
//!
//! Entries live in a small JSON object (`{"token": "..."}`) written with
//! owner-only permissions. A missing file is an empty store.

use async_trait::async_trait;
use jobseeker_application::{SessionStore, StorageError, TOKEN_KEY};
use jobseeker_domain::SessionToken;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::debug;

type Entries = BTreeMap<String, String>;

pub struct FileSessionStore {
    path: PathBuf,
    // Guards read-modify-write cycles on the file
    lock: Mutex<()>,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// `<data_dir>/jobseeker/session.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("jobseeker").join("session.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Entries, StorageError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => return Err(e.into()),
        };
        if contents.trim().is_empty() {
            return Ok(Entries::new());
        }
        serde_json::from_str(&contents).map_err(|e| {
            StorageError::Corrupt(format!("{}: {}", self.path.display(), e))
        })
    }

    async fn save(&self, entries: &Entries) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let contents = serde_json::to_string_pretty(entries)
            .map_err(|e| StorageError::Corrupt(e.to_string()))?;

        let mut options = tokio::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o600);

        let mut file = options.open(&self.path).await?;
        file.write_all(contents.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn get_token(&self) -> Result<Option<SessionToken>, StorageError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.load().await?;
        Ok(SessionToken::from_stored(entries.remove(TOKEN_KEY)))
    }

    async fn set_token(&self, token: &SessionToken) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.load().await?;
        entries.insert(TOKEN_KEY.to_string(), token.as_str().to_string());
        self.save(&entries).await?;
        debug!("Session token written to {}", self.path.display());
        Ok(())
    }

    async fn clear_token(&self) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.load().await?;
        if entries.remove(TOKEN_KEY).is_none() {
            return Ok(());
        }

        if entries.is_empty() {
            match tokio::fs::remove_file(&self.path).await {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        } else {
            self.save(&entries).await?;
        }
        debug!("Session token removed from {}", self.path.display());
        Ok(())
    }
}
