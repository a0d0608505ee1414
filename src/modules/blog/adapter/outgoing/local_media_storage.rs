use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use uuid::Uuid;

use crate::blog::application::domain::media::{ImageUpload, POST_IMAGE_DIR};
use crate::blog::application::ports::outgoing::{MediaStorage, MediaStorageError};

fn post_image_key(extension: &str) -> String {
    format!("{}/{}.{}", POST_IMAGE_DIR, Uuid::new_v4(), extension)
}

/// Stores uploads on the local filesystem under `root`.
#[derive(Clone, Debug)]
pub struct LocalMediaStorage {
    root: PathBuf,
}

impl LocalMediaStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Keys are relative and never climb out of the media root.
    fn resolve(&self, key: &str) -> Result<PathBuf, MediaStorageError> {
        let relative = Path::new(key);
        let safe = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
        if key.is_empty() || !safe {
            return Err(MediaStorageError::Io(format!("refusing media path {key:?}")));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl MediaStorage for LocalMediaStorage {
    async fn save_post_image(&self, upload: &ImageUpload) -> Result<String, MediaStorageError> {
        let key = post_image_key(upload.extension());
        let path = self.resolve(&key)?;

        if let Some(dir) = path.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| MediaStorageError::Io(e.to_string()))?;
        }
        tokio::fs::write(&path, &upload.bytes)
            .await
            .map_err(|e| MediaStorageError::Io(e.to_string()))?;

        tracing::debug!(key = %key, size = upload.bytes.len(), "Stored post image");
        Ok(key)
    }

    async fn remove(&self, key: &str) -> Result<(), MediaStorageError> {
        let path = self.resolve(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(MediaStorageError::Io(e.to_string())),
        }
    }
}
