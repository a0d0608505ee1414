use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};

use super::sea_orm_entity::comments;
use crate::blog::application::ports::outgoing::{
    CommentRepository, CommentRepositoryError, NewComment,
};

#[derive(Clone, Debug)]
pub struct CommentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CommentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> CommentRepositoryError {
    CommentRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl CommentRepository for CommentRepositoryPostgres {
    async fn create(&self, comment: NewComment) -> Result<i32, CommentRepositoryError> {
        let row = comments::ActiveModel {
            id: NotSet,
            text: Set(comment.text),
            post_id: Set(comment.post_id),
            author_id: Set(comment.author.value()),
            is_published: Set(true),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = row.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(inserted.id)
    }

    async fn update_text(&self, comment_id: i32, text: &str) -> Result<(), CommentRepositoryError> {
        let result = comments::Entity::update_many()
            .col_expr(comments::Column::Text, Expr::value(text))
            .filter(comments::Column::Id.eq(comment_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CommentRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, comment_id: i32) -> Result<(), CommentRepositoryError> {
        let result = comments::Entity::delete_by_id(comment_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CommentRepositoryError::NotFound);
        }
        Ok(())
    }
}
