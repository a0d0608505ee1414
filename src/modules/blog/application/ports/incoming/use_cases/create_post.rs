use async_trait::async_trait;

use super::post_form::{PostChoices, PostForm};
use crate::auth::application::domain::entities::UserId;
use crate::blog::application::domain::media::ImageUpload;
use crate::shared::forms::FormErrors;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreatePostError {
    /// Carries the choices so the form can be shown again.
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
pub trait CreatePostUseCase: Send + Sync {
    async fn choices(&self) -> Result<PostChoices, CreatePostError>;

    /// Largest image upload the form accepts.
    fn max_image_bytes(&self) -> u64;

    /// Returns the id of the new post.
    async fn execute(
        &self,
        author: UserId,
        form: PostForm,
        image: Option<ImageUpload>,
    ) -> Result<i32, CreatePostError>;
}
