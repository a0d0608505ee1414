use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::modules::auth::application::domain::entities::UserProfile;
use crate::modules::auth::application::domain::policies::USERNAME_TAKEN_MESSAGE;
use crate::modules::auth::application::ports::incoming::password_policy::PasswordPolicy;
use crate::modules::auth::application::ports::incoming::use_cases::{
    RegisterUserCommand, RegisterUserError, RegisterUserUseCase, RegistrationForm,
};
use crate::modules::auth::application::ports::outgoing::{
    CreateUserData, PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};
use crate::shared::forms::FormErrors;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct RegisterUserService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    user_query: Q,
    user_repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    password_policy: Arc<dyn PasswordPolicy + Send + Sync>,
}

impl<Q, R> RegisterUserService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        user_query: Q,
        user_repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        password_policy: Arc<dyn PasswordPolicy + Send + Sync>,
    ) -> Self {
        Self {
            user_query,
            user_repository,
            password_hasher,
            password_policy,
        }
    }
}

fn username_taken() -> RegisterUserError {
    RegisterUserError::Invalid(FormErrors::single("username", USERNAME_TAKEN_MESSAGE))
}

#[async_trait]
impl<Q, R> RegisterUserUseCase for RegisterUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, form: RegistrationForm) -> Result<UserProfile, RegisterUserError> {
        // 1️⃣ Validate fields
        let command = RegisterUserCommand::new(&form, self.password_policy.as_ref())
            .map_err(RegisterUserError::Invalid)?;

        // 2️⃣ Username must be free
        let existing = self
            .user_query
            .find_by_username(command.username())
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;
        if existing.is_some() {
            return Err(username_taken());
        }

        // 3️⃣ Hash password
        let password_hash = self
            .password_hasher
            .hash_password(command.password())
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        // 4️⃣ Persist
        let profile = self
            .user_repository
            .create_user(CreateUserData {
                username: command.username().to_string(),
                password_hash,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UsernameTaken => username_taken(),
                other => RegisterUserError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %profile.id, username = %profile.username, "User registered");
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mockall::mock;
    use uuid::Uuid;

    use crate::modules::auth::application::domain::entities::UserId;
    use crate::modules::auth::application::ports::outgoing::{
        HashError, UpdateProfileData, UserQueryError, UserQueryResult,
    };
    use crate::modules::auth::application::services::password::BasicPasswordPolicy;

    // ========================================================================
    // Mocks
    // ========================================================================

    #[derive(Clone)]
    struct MockUserQuery {
        existing: Result<Option<UserQueryResult>, UserQueryError>,
    }

    #[async_trait]
    impl UserQuery for MockUserQuery {
        async fn find_by_id(
            &self,
            _user_id: UserId,
        ) -> Result<Option<UserQueryResult>, UserQueryError> {
            unimplemented!("not used in registration")
        }

        async fn find_by_username(
            &self,
            _username: &str,
        ) -> Result<Option<UserQueryResult>, UserQueryError> {
            self.existing.clone()
        }
    }

    mock! {
        pub UserRepositoryMock {}
        #[async_trait]
        impl UserRepository for UserRepositoryMock {
            async fn create_user(&self, data: CreateUserData) -> Result<UserProfile, UserRepositoryError>;
            async fn update_profile(
                &self,
                user_id: UserId,
                data: UpdateProfileData,
            ) -> Result<UserProfile, UserRepositoryError>;
        }
    }

    struct StubHasher {
        result: Result<String, HashError>,
    }

    #[async_trait]
    impl PasswordHasher for StubHasher {
        async fn hash_password(&self, _password: &str) -> Result<String, HashError> {
            self.result.clone()
        }

        async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
            unimplemented!("not used in registration")
        }
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn form() -> RegistrationForm {
        RegistrationForm {
            username: "anna".to_string(),
            password1: "s3cret-pass".to_string(),
            password2: "s3cret-pass".to_string(),
        }
    }

    fn profile(username: &str) -> UserProfile {
        UserProfile {
            id: UserId::from(Uuid::new_v4()),
            username: username.to_string(),
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            date_joined: Utc::now(),
        }
    }

    fn existing_row() -> UserQueryResult {
        UserQueryResult {
            id: Uuid::new_v4(),
            username: "anna".to_string(),
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            password_hash: "hash".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn service(
        existing: Result<Option<UserQueryResult>, UserQueryError>,
        repo: MockUserRepositoryMock,
        hash: Result<String, HashError>,
    ) -> RegisterUserService<MockUserQuery, MockUserRepositoryMock> {
        RegisterUserService::new(
            MockUserQuery { existing },
            repo,
            Arc::new(StubHasher { result: hash }),
            Arc::new(BasicPasswordPolicy),
        )
    }

    // ========================================================================
    // Tests
    // ========================================================================

    #[tokio::test]
    async fn registers_with_hashed_password() {
        // Arrange
        let mut repo = MockUserRepositoryMock::new();
        repo.expect_create_user()
            .withf(|data| data.username == "anna" && data.password_hash == "argon2-hash")
            .times(1)
            .returning(|data| Ok(profile(&data.username)));

        let service = service(Ok(None), repo, Ok("argon2-hash".to_string()));

        // Act
        let result = service.execute(form()).await;

        // Assert
        assert_eq!(result.unwrap().username, "anna");
    }

    #[tokio::test]
    async fn taken_username_is_a_form_error_and_nothing_is_created() {
        let mut repo = MockUserRepositoryMock::new();
        repo.expect_create_user().never();

        let service = service(Ok(Some(existing_row())), repo, Ok("hash".to_string()));

        match service.execute(form()).await {
            Err(RegisterUserError::Invalid(errors)) => {
                assert_eq!(errors.get("username"), [USERNAME_TAKEN_MESSAGE.to_string()]);
            }
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unique_violation_on_insert_maps_to_form_error() {
        let mut repo = MockUserRepositoryMock::new();
        repo.expect_create_user()
            .returning(|_| Err(UserRepositoryError::UsernameTaken));

        let service = service(Ok(None), repo, Ok("hash".to_string()));

        assert!(matches!(
            service.execute(form()).await,
            Err(RegisterUserError::Invalid(_))
        ));
    }

    #[tokio::test]
    async fn hashing_failure_is_reported() {
        let mut repo = MockUserRepositoryMock::new();
        repo.expect_create_user().never();

        let service = service(Ok(None), repo, Err(HashError::TaskFailed));

        assert!(matches!(
            service.execute(form()).await,
            Err(RegisterUserError::HashingFailed(_))
        ));
    }

    #[tokio::test]
    async fn invalid_form_touches_nothing() {
        let mut repo = MockUserRepositoryMock::new();
        repo.expect_create_user().never();

        let result = service(Ok(None), repo, Ok("hash".to_string()))
            .execute(RegistrationForm {
                password2: "different".to_string(),
                ..form()
            })
            .await;

        assert!(matches!(result, Err(RegisterUserError::Invalid(e)) if e.has("password2")));
    }

    #[tokio::test]
    async fn query_failure_is_repository_error() {
        let repo = MockUserRepositoryMock::new();
        let service = service(
            Err(UserQueryError::DatabaseError("down".to_string())),
            repo,
            Ok("hash".to_string()),
        );

        assert!(matches!(
            service.execute(form()).await,
            Err(RegisterUserError::RepositoryError(_))
        ));
    }
}
