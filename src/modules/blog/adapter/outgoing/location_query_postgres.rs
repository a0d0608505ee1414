use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use super::mapping::to_location;
use super::sea_orm_entity::locations::{Column, Entity};
use crate::blog::application::domain::entities::Location;
use crate::blog::application::ports::outgoing::{LocationQuery, LocationQueryError};

#[derive(Clone, Debug)]
pub struct LocationQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl LocationQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LocationQuery for LocationQueryPostgres {
    async fn list_all(&self) -> Result<Vec<Location>, LocationQueryError> {
        let rows = Entity::find()
            .order_by_asc(Column::Name)
            .all(&*self.db)
            .await
            .map_err(|e| LocationQueryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(to_location).collect())
    }
}
