use async_trait::async_trait;

use crate::blog::application::domain::media::ImageUpload;

#[derive(Debug, Clone, thiserror::Error)]
pub enum MediaStorageError {
    #[error("Storage I/O error: {0}")]
    Io(String),
}

#[async_trait]
pub trait MediaStorage: Send + Sync {
    /// Stores a post image and returns its path relative to the media root.
    async fn save_post_image(&self, upload: &ImageUpload) -> Result<String, MediaStorageError>;

    /// Removing a file that is already gone is not an error.
    async fn remove(&self, path: &str) -> Result<(), MediaStorageError>;
}
