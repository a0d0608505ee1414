use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use super::mapping::to_category;
use super::sea_orm_entity::categories::{Column, Entity};
use crate::blog::application::domain::entities::Category;
use crate::blog::application::ports::outgoing::{CategoryQuery, CategoryQueryError};

#[derive(Clone, Debug)]
pub struct CategoryQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CategoryQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryQuery for CategoryQueryPostgres {
    async fn find_published_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<Category>, CategoryQueryError> {
        let row = Entity::find()
            .filter(Column::Slug.eq(slug))
            .filter(Column::IsPublished.eq(true))
            .one(&*self.db)
            .await
            .map_err(|e| CategoryQueryError::DatabaseError(e.to_string()))?;

        Ok(row.map(to_category))
    }

    async fn list_all(&self) -> Result<Vec<Category>, CategoryQueryError> {
        let rows = Entity::find()
            .order_by_asc(Column::Title)
            .all(&*self.db)
            .await
            .map_err(|e| CategoryQueryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(to_category).collect())
    }
}
