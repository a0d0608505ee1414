use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::auth::application::ports::incoming::use_cases::{
    LoginCommand, LoginError, LoginOutput, LoginUserUseCase,
};
use crate::modules::auth::application::ports::outgoing::{
    PasswordHasher, TokenProvider, UserQuery,
};

pub struct LoginUserService<Q>
where
    Q: UserQuery,
{
    user_query: Q,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> LoginUserService<Q>
where
    Q: UserQuery,
{
    pub fn new(
        user_query: Q,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            user_query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> LoginUserUseCase for LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, command: LoginCommand) -> Result<LoginOutput, LoginError> {
        // 1️⃣ Find user by username
        let user = self
            .user_query
            .find_by_username(command.username())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        // 2️⃣ Verify password
        let is_valid = self
            .password_hasher
            .verify_password(command.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            warn!(username = %command.username(), "Login rejected: wrong password");
            return Err(LoginError::InvalidCredentials);
        }

        // 3️⃣ Issue session token
        let access_token = self
            .token_provider
            .generate_access_token(UserId::from(user.id), &user.username)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        info!(user_id = %user.id, "User logged in");

        Ok(LoginOutput {
            access_token,
            user: user.into_profile(),
        })
    }
}
