use std::collections::{HashMap, HashSet};

use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

use super::sea_orm_entity::{categories, locations};
use crate::auth::application::domain::entities::UserId;
use crate::blog::application::domain::entities::{AuthorRef, Category, Location};
use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;

pub(super) fn to_category(model: categories::Model) -> Category {
    Category {
        id: model.id,
        title: model.title,
        description: model.description,
        slug: model.slug,
        is_published: model.is_published,
        created_at: model.created_at.with_timezone(&Utc),
    }
}

pub(super) fn to_location(model: locations::Model) -> Location {
    Location {
        id: model.id,
        name: model.name,
        is_published: model.is_published,
        created_at: model.created_at.with_timezone(&Utc),
    }
}

pub(super) fn to_author(model: users::Model) -> AuthorRef {
    AuthorRef {
        id: UserId::from(model.id),
        username: model.username,
        first_name: model.first_name,
        last_name: model.last_name,
    }
}

/// One `IN (...)` query for all distinct authors; no query for an empty set.
pub(super) async fn load_authors(
    db: &DatabaseConnection,
    ids: impl IntoIterator<Item = Uuid>,
) -> Result<HashMap<Uuid, AuthorRef>, DbErr> {
    let ids: HashSet<Uuid> = ids.into_iter().collect();
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = users::Entity::find()
        .filter(users::Column::Id.is_in(ids))
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|model| (model.id, to_author(model)))
        .collect())
}
