use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use crate::auth::application::domain::entities::UserId;
use crate::blog::application::domain::entities::PostView;
use crate::blog::application::domain::visibility::{PostScope, PostVisibility};
use crate::blog::application::ports::incoming::use_cases::{
    CategoryPosts, ListPostsError, ListPostsUseCase,
};
use crate::blog::application::ports::outgoing::{CategoryQuery, PostQuery};
use crate::shared::pagination::{Page, PageRequest, Paginator};

#[derive(Debug, Clone)]
pub struct ListPostsService<P, C>
where
    P: PostQuery,
    C: CategoryQuery,
{
    posts: P,
    categories: C,
}

impl<P, C> ListPostsService<P, C>
where
    P: PostQuery,
    C: CategoryQuery,
{
    pub fn new(posts: P, categories: C) -> Self {
        Self { posts, categories }
    }

    async fn paginate(
        &self,
        scope: PostScope,
        visibility: PostVisibility,
        request: PageRequest,
    ) -> Result<Page<PostView>, ListPostsError> {
        // 1️⃣ Count what the filter lets through
        let total = self
            .posts
            .count(scope, visibility)
            .await
            .map_err(|e| ListPostsError::RepositoryError(e.to_string()))?;

        // 2️⃣ Clamp the requested page
        let paginator = Paginator::new(total, request.per_page);
        let number = paginator.clamp(request.page);
        if number != request.page {
            debug!(requested = request.page, served = number, "Page number clamped");
        }

        if total == 0 {
            return Ok(Page::empty(request.per_page));
        }

        // 3️⃣ Load one page
        let items = self
            .posts
            .list(scope, visibility, paginator.offset(number), paginator.per_page())
            .await
            .map_err(|e| ListPostsError::RepositoryError(e.to_string()))?;

        Ok(Page::new(items, number, &paginator))
    }
}

#[async_trait]
impl<P, C> ListPostsUseCase for ListPostsService<P, C>
where
    P: PostQuery + Send + Sync,
    C: CategoryQuery + Send + Sync,
{
    async fn index(&self, page: PageRequest) -> Result<Page<PostView>, ListPostsError> {
        self.paginate(PostScope::All, PostVisibility::public(Utc::now()), page)
            .await
    }

    async fn by_category(
        &self,
        slug: &str,
        page: PageRequest,
    ) -> Result<CategoryPosts, ListPostsError> {
        let category = self
            .categories
            .find_published_by_slug(slug)
            .await
            .map_err(|e| ListPostsError::RepositoryError(e.to_string()))?
            .ok_or(ListPostsError::CategoryNotFound)?;

        let page = self
            .paginate(
                PostScope::Category(category.id),
                PostVisibility::public(Utc::now()),
                page,
            )
            .await?;

        Ok(CategoryPosts { category, page })
    }

    async fn by_author(
        &self,
        author: UserId,
        viewer: Option<UserId>,
        page: PageRequest,
    ) -> Result<Page<PostView>, ListPostsError> {
        let visibility = PostVisibility::for_profile(author, viewer, Utc::now());
        self.paginate(PostScope::Author(author), visibility, page)
            .await
    }
}
