use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::auth::application::domain::entities::UserId;

/// Column values written on create and on edit.
#[derive(Debug, Clone, PartialEq)]
pub struct PostData {
    pub title: String,
    pub text: String,
    pub pub_date: DateTime<Utc>,
    pub category_id: Option<i32>,
    pub location_id: Option<i32>,
    pub is_published: bool,
    pub image: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PostRepositoryError {
    #[error("Post not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Returns the new post id.
    async fn create(&self, author: UserId, data: PostData) -> Result<i32, PostRepositoryError>;

    async fn update(&self, post_id: i32, data: PostData) -> Result<(), PostRepositoryError>;

    /// Comments go with the post.
    async fn delete(&self, post_id: i32) -> Result<(), PostRepositoryError>;
}
