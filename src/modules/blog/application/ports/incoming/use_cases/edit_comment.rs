use async_trait::async_trait;

use super::comment_form::CommentForm;
use crate::auth::application::domain::entities::UserId;
use crate::blog::application::domain::entities::CommentView;
use crate::shared::forms::FormErrors;

#[derive(Debug, Clone, thiserror::Error)]
pub enum EditCommentError {
    #[error("Comment not found")]
    NotFound,

    #[error("Only the author can edit this comment")]
    Forbidden,

    #[error("Invalid comment form")]
    Invalid {
        errors: FormErrors,
        comment: CommentView,
    },

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait EditCommentUseCase: Send + Sync {
    async fn load(
        &self,
        post_id: i32,
        comment_id: i32,
        requester: UserId,
    ) -> Result<CommentView, EditCommentError>;

    async fn execute(
        &self,
        post_id: i32,
        comment_id: i32,
        requester: UserId,
        form: CommentForm,
    ) -> Result<(), EditCommentError>;
}
