use async_trait::async_trait;

use super::post_form::EditablePost;
use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeletePostError {
    #[error("Post not found")]
    NotFound,

    #[error("Only the author can delete this post")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Anonymous requesters are refused like any other non-author.
#[async_trait]
pub trait DeletePostUseCase: Send + Sync {
    async fn load(
        &self,
        post_id: i32,
        requester: Option<UserId>,
    ) -> Result<EditablePost, DeletePostError>;

    async fn execute(&self, post_id: i32, requester: Option<UserId>)
        -> Result<(), DeletePostError>;
}
