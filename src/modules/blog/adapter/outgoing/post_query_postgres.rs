use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};

use super::mapping::{load_authors, to_category, to_location};
use super::sea_orm_entity::{categories, comments, locations, posts};
use crate::blog::application::domain::entities::PostView;
use crate::blog::application::domain::visibility::{PostScope, PostVisibility};
use crate::blog::application::ports::outgoing::{PostQuery, PostQueryError};

#[derive(Debug, FromQueryResult)]
struct CommentCountRow {
    post_id: i32,
    comment_count: i64,
}

#[derive(Clone, Debug)]
pub struct PostQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PostQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn filtered(scope: PostScope, visibility: PostVisibility) -> Select<posts::Entity> {
        let mut query = posts::Entity::find();

        query = match scope {
            PostScope::All => query,
            PostScope::Category(id) => query.filter(posts::Column::CategoryId.eq(id)),
            PostScope::Author(author) => query.filter(posts::Column::AuthorId.eq(author.value())),
        };

        if let PostVisibility::Public { now } = visibility {
            query = query
                .join(JoinType::InnerJoin, posts::Relation::Categories.def())
                .filter(posts::Column::IsPublished.eq(true))
                .filter(categories::Column::IsPublished.eq(true))
                .filter(posts::Column::PubDate.lte(now));
        }

        query
    }

    /// Loads categories, locations, authors and comment counts for a page
    /// of posts with one query each.
    async fn hydrate(&self, rows: Vec<posts::Model>) -> Result<Vec<PostView>, DbErr> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        let db = &*self.db;

        let category_ids: HashSet<i32> = rows.iter().filter_map(|p| p.category_id).collect();
        let categories: HashMap<i32, _> = if category_ids.is_empty() {
            HashMap::new()
        } else {
            categories::Entity::find()
                .filter(categories::Column::Id.is_in(category_ids))
                .all(db)
                .await?
                .into_iter()
                .map(|m| (m.id, to_category(m)))
                .collect()
        };

        let location_ids: HashSet<i32> = rows.iter().filter_map(|p| p.location_id).collect();
        let locations: HashMap<i32, _> = if location_ids.is_empty() {
            HashMap::new()
        } else {
            locations::Entity::find()
                .filter(locations::Column::Id.is_in(location_ids))
                .all(db)
                .await?
                .into_iter()
                .map(|m| (m.id, to_location(m)))
                .collect()
        };

        let authors = load_authors(db, rows.iter().map(|p| p.author_id)).await?;

        let post_ids: Vec<i32> = rows.iter().map(|p| p.id).collect();
        let counts: HashMap<i32, u64> = comments::Entity::find()
            .select_only()
            .column(comments::Column::PostId)
            .column_as(
                SimpleExpr::from(Func::count(Expr::col((comments::Entity, comments::Column::Id)))),
                "comment_count",
            )
            .filter(comments::Column::PostId.is_in(post_ids))
            .group_by(comments::Column::PostId)
            .into_model::<CommentCountRow>()
            .all(db)
            .await?
            .into_iter()
            .map(|row| (row.post_id, row.comment_count.max(0) as u64))
            .collect();

        rows.into_iter()
            .map(|row| {
                let author = authors.get(&row.author_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!("author {} of post {}", row.author_id, row.id))
                })?;

                Ok(PostView {
                    id: row.id,
                    title: row.title,
                    text: row.text,
                    pub_date: row.pub_date.with_timezone(&Utc),
                    is_published: row.is_published,
                    created_at: row.created_at.with_timezone(&Utc),
                    image: row.image,
                    image_url: None,
                    author,
                    category: row.category_id.and_then(|id| categories.get(&id).cloned()),
                    location: row.location_id.and_then(|id| locations.get(&id).cloned()),
                    comment_count: counts.get(&row.id).copied().unwrap_or(0),
                })
            })
            .collect()
    }
}

fn map_db_err(e: DbErr) -> PostQueryError {
    PostQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl PostQuery for PostQueryPostgres {
    async fn count(
        &self,
        scope: PostScope,
        visibility: PostVisibility,
    ) -> Result<u64, PostQueryError> {
        Self::filtered(scope, visibility)
            .count(&*self.db)
            .await
            .map_err(map_db_err)
    }

    async fn list(
        &self,
        scope: PostScope,
        visibility: PostVisibility,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<PostView>, PostQueryError> {
        let rows = Self::filtered(scope, visibility)
            .order_by_desc(posts::Column::PubDate)
            .order_by_desc(posts::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.hydrate(rows).await.map_err(map_db_err)
    }

    async fn find_by_id(&self, post_id: i32) -> Result<Option<PostView>, PostQueryError> {
        let Some(row) = posts::Entity::find_by_id(post_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let mut views = self.hydrate(vec![row]).await.map_err(map_db_err)?;
        Ok(views.pop())
    }

    async fn exists(&self, post_id: i32) -> Result<bool, PostQueryError> {
        let count = posts::Entity::find_by_id(post_id)
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(count > 0)
    }
}
