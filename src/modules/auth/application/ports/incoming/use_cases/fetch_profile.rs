use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::{UserId, UserProfile};

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchProfileError {
    #[error("User not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait FetchProfileUseCase: Send + Sync {
    async fn by_username(&self, username: &str) -> Result<UserProfile, FetchProfileError>;
    async fn by_id(&self, user_id: UserId) -> Result<UserProfile, FetchProfileError>;
}
