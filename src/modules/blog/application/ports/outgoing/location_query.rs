use async_trait::async_trait;

use crate::blog::application::domain::entities::Location;

#[derive(Debug, Clone, thiserror::Error)]
pub enum LocationQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait LocationQuery: Send + Sync {
    /// Ordered by name.
    async fn list_all(&self) -> Result<Vec<Location>, LocationQueryError>;
}
