use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::modules::auth::application::domain::policies::USERNAME_TAKEN_MESSAGE;
use crate::modules::auth::application::ports::incoming::use_cases::{
    UpdateProfileCommand, UpdateProfileError, UpdateProfileOutput, UpdateProfileUseCase,
};
use crate::modules::auth::application::ports::outgoing::{
    TokenProvider, UserQuery, UserRepository, UserRepositoryError,
};
use crate::shared::forms::FormErrors;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct UpdateProfileService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    user_query: Q,
    user_repository: R,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q, R> UpdateProfileService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        user_query: Q,
        user_repository: R,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            user_query,
            user_repository,
            token_provider,
        }
    }
}

fn username_taken() -> UpdateProfileError {
    UpdateProfileError::Invalid(FormErrors::single("username", USERNAME_TAKEN_MESSAGE))
}

#[async_trait]
impl<Q, R> UpdateProfileUseCase for UpdateProfileService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdateProfileCommand,
    ) -> Result<UpdateProfileOutput, UpdateProfileError> {
        let user_id = command.user_id();

        // 1️⃣ A new username must not belong to someone else
        let holder = self
            .user_query
            .find_by_username(&command.data().username)
            .await
            .map_err(|e| UpdateProfileError::RepositoryError(e.to_string()))?;
        if matches!(holder, Some(ref other) if other.id != user_id.value()) {
            return Err(username_taken());
        }

        // 2️⃣ Save
        let profile = self
            .user_repository
            .update_profile(user_id, command.into_data())
            .await
            .map_err(|e| match e {
                UserRepositoryError::NotFound => UpdateProfileError::NotFound,
                UserRepositoryError::UsernameTaken => username_taken(),
                UserRepositoryError::DatabaseError(msg) => {
                    UpdateProfileError::RepositoryError(msg)
                }
            })?;

        // 3️⃣ Re-issue token with the current username
        let access_token = self
            .token_provider
            .generate_access_token(profile.id, &profile.username)
            .map_err(|e| UpdateProfileError::TokenGenerationFailed(e.to_string()))?;

        info!(user_id = %profile.id, "Profile updated");

        Ok(UpdateProfileOutput {
            profile,
            access_token,
        })
    }
}
