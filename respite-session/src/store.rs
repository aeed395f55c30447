use async_trait::async_trait;
use respite_core::{RespiteError, Result, UserProfile};
use std::path::PathBuf;
use std::sync::RwLock;

/// Persistence for the single profile blob: read once at startup, rewritten
/// wholesale after onboarding and after each feedback submission.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// `Ok(None)` when no profile has been saved yet.
    async fn load(&self) -> Result<Option<UserProfile>>;
    async fn save(&self, profile: &UserProfile) -> Result<()>;
    /// Explicit reset: removes the stored profile entirely.
    async fn clear(&self) -> Result<()>;
}

/// Stores the profile as one JSON file. No schema versioning beyond the
/// file path itself.
pub struct FileProfileStore {
    path: PathBuf,
}

impl FileProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl ProfileStore for FileProfileStore {
    async fn load(&self) -> Result<Option<UserProfile>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => {
                let profile = serde_json::from_slice(&bytes)?;
                Ok(Some(profile))
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(RespiteError::Io(err)),
        }
    }

    async fn save(&self, profile: &UserProfile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let bytes = serde_json::to_vec_pretty(profile)?;
        tokio::fs::write(&self.path, bytes).await?;
        tracing::debug!(path = %self.path.display(), "profile saved");
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(RespiteError::Io(err)),
        }
    }
}

/// Test double keeping the profile in memory.
#[derive(Default)]
pub struct InMemoryProfileStore {
    profile: RwLock<Option<UserProfile>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn load(&self) -> Result<Option<UserProfile>> {
        Ok(self.profile.read().unwrap().clone())
    }

    async fn save(&self, profile: &UserProfile) -> Result<()> {
        *self.profile.write().unwrap() = Some(profile.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.profile.write().unwrap() = None;
        Ok(())
    }
}
