use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use uuid::Uuid;

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel,
};
use crate::modules::auth::application::domain::entities::{UserId, UserProfile};
use crate::modules::auth::application::ports::outgoing::{
    CreateUserData, UpdateProfileData, UserRepository, UserRepositoryError,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_profile(model: UserModel) -> UserProfile {
        UserProfile {
            id: UserId::from(model.id),
            username: model.username,
            email: model.email,
            first_name: model.first_name,
            last_name: model.last_name,
            date_joined: model.created_at.with_timezone(&chrono::Utc),
        }
    }

    fn map_write_error(e: DbErr) -> UserRepositoryError {
        let err_str = e.to_string().to_lowercase();
        if err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint")
        {
            return UserRepositoryError::UsernameTaken;
        }
        UserRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<UserProfile, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(data.username),
            email: Set(String::new()),
            first_name: Set(String::new()),
            last_name: Set(String::new()),
            password_hash: Set(data.password_hash),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Ok(Self::map_to_profile(inserted))
    }

    async fn update_profile(
        &self,
        user_id: UserId,
        data: UpdateProfileData,
    ) -> Result<UserProfile, UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::NotFound)?;

        let mut active_user: UserActiveModel = user.into();
        active_user.username = Set(data.username);
        active_user.email = Set(data.email);
        active_user.first_name = Set(data.first_name);
        active_user.last_name = Set(data.last_name);

        let updated = active_user
            .update(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Ok(Self::map_to_profile(updated))
    }
}
