use async_trait::async_trait;

use crate::blog::application::domain::entities::CommentView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CommentQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CommentQuery: Send + Sync {
    /// Oldest first.
    async fn list_for_post(&self, post_id: i32) -> Result<Vec<CommentView>, CommentQueryError>;

    /// `None` when the comment is missing or belongs to another post.
    async fn find_in_post(
        &self,
        post_id: i32,
        comment_id: i32,
    ) -> Result<Option<CommentView>, CommentQueryError>;
}
