use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use super::mapping::load_authors;
use super::sea_orm_entity::comments;
use crate::blog::application::domain::entities::CommentView;
use crate::blog::application::ports::outgoing::{CommentQuery, CommentQueryError};

#[derive(Clone, Debug)]
pub struct CommentQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CommentQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn with_authors(&self, rows: Vec<comments::Model>) -> Result<Vec<CommentView>, DbErr> {
        let authors = load_authors(&self.db, rows.iter().map(|c| c.author_id)).await?;

        rows.into_iter()
            .map(|row| {
                let author = authors.get(&row.author_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!("author {} of comment {}", row.author_id, row.id))
                })?;
                Ok(CommentView {
                    id: row.id,
                    post_id: row.post_id,
                    text: row.text,
                    is_published: row.is_published,
                    created_at: row.created_at.with_timezone(&Utc),
                    author,
                })
            })
            .collect()
    }
}

fn map_db_err(e: DbErr) -> CommentQueryError {
    CommentQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl CommentQuery for CommentQueryPostgres {
    async fn list_for_post(&self, post_id: i32) -> Result<Vec<CommentView>, CommentQueryError> {
        let rows = comments::Entity::find()
            .filter(comments::Column::PostId.eq(post_id))
            .order_by_asc(comments::Column::CreatedAt)
            .order_by_asc(comments::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.with_authors(rows).await.map_err(map_db_err)
    }

    async fn find_in_post(
        &self,
        post_id: i32,
        comment_id: i32,
    ) -> Result<Option<CommentView>, CommentQueryError> {
        let row = comments::Entity::find()
            .filter(comments::Column::Id.eq(comment_id))
            .filter(comments::Column::PostId.eq(post_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        let Some(row) = row else {
            return Ok(None);
        };
        let mut found = self.with_authors(vec![row]).await.map_err(map_db_err)?;
        Ok(found.pop())
    }
}
