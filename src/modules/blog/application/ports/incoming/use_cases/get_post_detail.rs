use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::blog::application::domain::entities::{CommentView, PostView};

#[derive(Debug, Clone, PartialEq)]
pub struct PostDetail {
    pub post: PostView,
    pub comments: Vec<CommentView>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPostDetailError {
    #[error("Post not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetPostDetailUseCase: Send + Sync {
    async fn execute(
        &self,
        post_id: i32,
        viewer: Option<UserId>,
    ) -> Result<PostDetail, GetPostDetailError>;
}
