use async_trait::async_trait;

use crate::blog::application::domain::entities::Category;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CategoryQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CategoryQuery: Send + Sync {
    async fn find_published_by_slug(&self, slug: &str)
        -> Result<Option<Category>, CategoryQueryError>;

    /// Every category, ordered by title. Used for the post form choices.
    async fn list_all(&self) -> Result<Vec<Category>, CategoryQueryError>;
}
