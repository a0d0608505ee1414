use async_trait::async_trait;

use crate::blog::application::domain::entities::PostView;
use crate::blog::application::domain::visibility::{PostScope, PostVisibility};

#[derive(Debug, Clone, thiserror::Error)]
pub enum PostQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side for posts. Every returned view carries its author, category,
/// location and comment count.
#[async_trait]
pub trait PostQuery: Send + Sync {
    async fn count(
        &self,
        scope: PostScope,
        visibility: PostVisibility,
    ) -> Result<u64, PostQueryError>;

    /// Ordered by `pub_date DESC, id DESC`.
    async fn list(
        &self,
        scope: PostScope,
        visibility: PostVisibility,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<PostView>, PostQueryError>;

    /// Unfiltered lookup; callers apply visibility rules themselves.
    async fn find_by_id(&self, post_id: i32) -> Result<Option<PostView>, PostQueryError>;

    async fn exists(&self, post_id: i32) -> Result<bool, PostQueryError>;
}
