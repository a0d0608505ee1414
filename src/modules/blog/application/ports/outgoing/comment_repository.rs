use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq)]
pub struct NewComment {
    pub post_id: i32,
    pub author: UserId,
    pub text: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CommentRepositoryError {
    #[error("Comment not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Returns the new comment id.
    async fn create(&self, comment: NewComment) -> Result<i32, CommentRepositoryError>;

    async fn update_text(&self, comment_id: i32, text: &str) -> Result<(), CommentRepositoryError>;

    async fn delete(&self, comment_id: i32) -> Result<(), CommentRepositoryError>;
}
