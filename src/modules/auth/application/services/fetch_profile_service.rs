use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::{UserId, UserProfile};
use crate::modules::auth::application::ports::incoming::use_cases::{
    FetchProfileError, FetchProfileUseCase,
};
use crate::modules::auth::application::ports::outgoing::{
    UserQuery, UserQueryError, UserQueryResult,
};

#[derive(Debug, Clone)]
pub struct FetchProfileService<Q>
where
    Q: UserQuery,
{
    user_query: Q,
}

impl<Q> FetchProfileService<Q>
where
    Q: UserQuery,
{
    pub fn new(user_query: Q) -> Self {
        Self { user_query }
    }

    fn to_profile(
        result: Result<Option<UserQueryResult>, UserQueryError>,
    ) -> Result<UserProfile, FetchProfileError> {
        match result {
            Ok(Some(user)) => Ok(user.into_profile()),
            Ok(None) => Err(FetchProfileError::NotFound),
            Err(UserQueryError::DatabaseError(msg)) => Err(FetchProfileError::RepositoryError(msg)),
        }
    }
}

#[async_trait]
impl<Q> FetchProfileUseCase for FetchProfileService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn by_username(&self, username: &str) -> Result<UserProfile, FetchProfileError> {
        Self::to_profile(self.user_query.find_by_username(username).await)
    }

    async fn by_id(&self, user_id: UserId) -> Result<UserProfile, FetchProfileError> {
        Self::to_profile(self.user_query.find_by_id(user_id).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[derive(Clone)]
    struct MockUserQuery {
        result: Result<Option<UserQueryResult>, UserQueryError>,
    }

    #[async_trait]
    impl UserQuery for MockUserQuery {
        async fn find_by_id(
            &self,
            _user_id: UserId,
        ) -> Result<Option<UserQueryResult>, UserQueryError> {
            self.result.clone()
        }

        async fn find_by_username(
            &self,
            _username: &str,
        ) -> Result<Option<UserQueryResult>, UserQueryError> {
            self.result.clone()
        }
    }

    fn row(id: Uuid) -> UserQueryResult {
        UserQueryResult {
            id,
            username: "anna".to_string(),
            email: "anna@example.com".to_string(),
            first_name: "Anna".to_string(),
            last_name: "Petrova".to_string(),
            password_hash: "hash".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn found_user_becomes_profile() {
        let id = Uuid::new_v4();
        let service = FetchProfileService::new(MockUserQuery {
            result: Ok(Some(row(id))),
        });

        let profile = service.by_username("anna").await.unwrap();

        assert_eq!(profile.id, UserId::from(id));
        assert_eq!(profile.full_name(), "Anna Petrova");
    }

    #[tokio::test]
    async fn missing_user_is_not_found() {
        let service = FetchProfileService::new(MockUserQuery { result: Ok(None) });

        assert!(matches!(
            service.by_id(UserId::from(Uuid::new_v4())).await,
            Err(FetchProfileError::NotFound)
        ));
    }

    #[tokio::test]
    async fn database_error_is_repository_error() {
        let service = FetchProfileService::new(MockUserQuery {
            result: Err(UserQueryError::DatabaseError("down".to_string())),
        });

        assert!(matches!(
            service.by_username("anna").await,
            Err(FetchProfileError::RepositoryError(msg)) if msg == "down"
        ));
    }
}
