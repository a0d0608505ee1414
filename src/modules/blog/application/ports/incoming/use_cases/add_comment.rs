use async_trait::async_trait;

use super::comment_form::CommentForm;
use crate::auth::application::domain::entities::UserId;
use crate::shared::forms::FormErrors;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddCommentError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Invalid comment form")]
    Invalid(FormErrors),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AddCommentUseCase: Send + Sync {
    /// Returns the id of the new comment.
    async fn execute(
        &self,
        post_id: i32,
        author: UserId,
        form: CommentForm,
    ) -> Result<i32, AddCommentError>;
}
