use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::{UserId, UserProfile};

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub username: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateProfileData {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Username already taken")]
    UsernameTaken,

    #[error("User not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<UserProfile, UserRepositoryError>;

    async fn update_profile(
        &self,
        user_id: UserId,
        data: UpdateProfileData,
    ) -> Result<UserProfile, UserRepositoryError>;
}
