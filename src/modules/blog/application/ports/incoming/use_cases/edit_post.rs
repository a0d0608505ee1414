use async_trait::async_trait;

use super::post_form::{EditablePost, PostChoices, PostForm};
use crate::auth::application::domain::entities::UserId;
use crate::blog::application::domain::media::ImageUpload;
use crate::shared::forms::FormErrors;

#[derive(Debug, Clone, thiserror::Error)]
pub enum EditPostError {
    #[error("Post not found")]
    NotFound,

    #[error("Only the author can edit this post")]
    NotAuthor,

    #[error("Invalid post form")]
    Invalid {
        errors: FormErrors,
        choices: PostChoices,
    },

    #[error("Media storage error: {0}")]
    MediaError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait EditPostUseCase: Send + Sync {
    /// Form pre-filled with the stored post.
    async fn load(&self, post_id: i32, requester: UserId) -> Result<EditablePost, EditPostError>;

    /// Settles `NotFound` / `NotAuthor` before the submission is read.
    async fn authorize(&self, post_id: i32, requester: UserId) -> Result<(), EditPostError>;

    /// Largest image upload the form accepts.
    fn max_image_bytes(&self) -> u64;

    async fn execute(
        &self,
        post_id: i32,
        requester: UserId,
        form: PostForm,
        image: Option<ImageUpload>,
    ) -> Result<(), EditPostError>;
}
