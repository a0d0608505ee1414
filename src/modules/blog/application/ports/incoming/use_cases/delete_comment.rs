use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::blog::application::domain::entities::CommentView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteCommentError {
    #[error("Comment not found")]
    NotFound,

    #[error("Only the author can delete this comment")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// The comment is looked up within the given post.
#[async_trait]
pub trait DeleteCommentUseCase: Send + Sync {
    async fn load(
        &self,
        post_id: i32,
        comment_id: i32,
        requester: UserId,
    ) -> Result<CommentView, DeleteCommentError>;

    async fn execute(
        &self,
        post_id: i32,
        comment_id: i32,
        requester: UserId,
    ) -> Result<(), DeleteCommentError>;
}
