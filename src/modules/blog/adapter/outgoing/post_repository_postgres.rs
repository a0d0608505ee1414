use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};

use super::sea_orm_entity::posts;
use crate::auth::application::domain::entities::UserId;
use crate::blog::application::ports::outgoing::{PostData, PostRepository, PostRepositoryError};

#[derive(Clone, Debug)]
pub struct PostRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PostRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn columns(data: PostData) -> posts::ActiveModel {
        posts::ActiveModel {
            id: NotSet,
            title: Set(data.title),
            text: Set(data.text),
            pub_date: Set(data.pub_date.fixed_offset()),
            author_id: NotSet,
            location_id: Set(data.location_id),
            category_id: Set(data.category_id),
            image: Set(data.image),
            is_published: Set(data.is_published),
            created_at: NotSet,
        }
    }
}

fn map_db_err(e: DbErr) -> PostRepositoryError {
    PostRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl PostRepository for PostRepositoryPostgres {
    async fn create(&self, author: UserId, data: PostData) -> Result<i32, PostRepositoryError> {
        let mut row = Self::columns(data);
        row.author_id = Set(author.value());
        row.created_at = Set(Utc::now().fixed_offset());

        let inserted = row.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(inserted.id)
    }

    async fn update(&self, post_id: i32, data: PostData) -> Result<(), PostRepositoryError> {
        let result = posts::Entity::update_many()
            .set(Self::columns(data))
            .filter(posts::Column::Id.eq(post_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(PostRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, post_id: i32) -> Result<(), PostRepositoryError> {
        let result = posts::Entity::delete_by_id(post_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(PostRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blog::adapter::outgoing::post_query_postgres::tests::post_model;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use uuid::Uuid;

    fn data() -> PostData {
        PostData {
            title: "Trip".into(),
            text: "Went north".into(),
            pub_date: Utc::now(),
            category_id: Some(1),
            location_id: None,
            is_published: true,
            image: None,
        }
    }

    fn exec(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    #[tokio::test]
    async fn create_returns_new_id() {
        let author = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![post_model(17, author, Some(1))]])
            .into_connection();

        let repo = PostRepositoryPostgres::new(Arc::new(db));

        assert_eq!(repo.create(UserId::from(author), data()).await.unwrap(), 17);
    }

    #[tokio::test]
    async fn update_of_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(0)])
            .into_connection();

        let repo = PostRepositoryPostgres::new(Arc::new(db));

        assert!(matches!(repo.update(5, data()).await, Err(PostRepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn update_sets_columns_for_one_row() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results([exec(1)])
                .into_connection(),
        );

        let repo = PostRepositoryPostgres::new(Arc::clone(&db));
        repo.update(5, data()).await.unwrap();
        drop(repo);

        let log = Arc::try_unwrap(db).unwrap().into_transaction_log();
        let sql = log[0].statements()[0].sql.clone();
        assert!(sql.starts_with(r#"UPDATE "posts" SET"#), "{sql}");
        assert!(!sql.contains("author_id"), "{sql}");
        assert!(sql.contains(r#"WHERE "posts"."id" = $"#), "{sql}");
    }

    #[tokio::test]
    async fn delete_reports_missing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(1), exec(0)])
            .into_connection();

        let repo = PostRepositoryPostgres::new(Arc::new(db));

        assert!(repo.delete(1).await.is_ok());
        assert!(matches!(repo.delete(1).await, Err(PostRepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn insert_failure_is_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("violates foreign key".into())])
            .into_connection();

        let repo = PostRepositoryPostgres::new(Arc::new(db));
        let result = repo.create(UserId::from(Uuid::new_v4()), data()).await;

        assert!(matches!(result, Err(PostRepositoryError::DatabaseError(_))));
    }
}
