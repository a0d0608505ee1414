use async_trait::async_trait;
use serde::Serialize;

use crate::auth::application::domain::entities::UserId;
use crate::blog::application::domain::entities::{Category, PostView};
use crate::shared::pagination::{Page, PageRequest};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPosts {
    pub category: Category,
    pub page: Page<PostView>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListPostsError {
    #[error("Category not found")]
    CategoryNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListPostsUseCase: Send + Sync {
    /// Publicly visible posts, newest first.
    async fn index(&self, page: PageRequest) -> Result<Page<PostView>, ListPostsError>;

    /// Visible posts of one published category.
    async fn by_category(
        &self,
        slug: &str,
        page: PageRequest,
    ) -> Result<CategoryPosts, ListPostsError>;

    /// An author's posts; all of them when the viewer is the author.
    async fn by_author(
        &self,
        author: UserId,
        viewer: Option<UserId>,
        page: PageRequest,
    ) -> Result<Page<PostView>, ListPostsError>;
}
