use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::blog::application::domain::entities::CommentView;
use crate::blog::application::ports::incoming::use_cases::{
    DeleteCommentError, DeleteCommentUseCase,
};
use crate::blog::application::ports::outgoing::{
    CommentQuery, CommentRepository, CommentRepositoryError,
};

#[derive(Debug, Clone)]
pub struct DeleteCommentService<C, R>
where
    C: CommentQuery,
    R: CommentRepository,
{
    comments: C,
    repository: R,
}

impl<C, R> DeleteCommentService<C, R>
where
    C: CommentQuery,
    R: CommentRepository,
{
    pub fn new(comments: C, repository: R) -> Self {
        Self {
            comments,
            repository,
        }
    }
}

#[async_trait]
impl<C, R> DeleteCommentUseCase for DeleteCommentService<C, R>
where
    C: CommentQuery + Send + Sync,
    R: CommentRepository + Send + Sync,
{
    async fn load(
        &self,
        post_id: i32,
        comment_id: i32,
        requester: UserId,
    ) -> Result<CommentView, DeleteCommentError> {
        let comment = self
            .comments
            .find_in_post(post_id, comment_id)
            .await
            .map_err(|e| DeleteCommentError::RepositoryError(e.to_string()))?
            .ok_or(DeleteCommentError::NotFound)?;

        if !comment.is_authored_by(requester) {
            return Err(DeleteCommentError::Forbidden);
        }
        Ok(comment)
    }

    async fn execute(
        &self,
        post_id: i32,
        comment_id: i32,
        requester: UserId,
    ) -> Result<(), DeleteCommentError> {
        self.load(post_id, comment_id, requester).await?;

        self.repository
            .delete(comment_id)
            .await
            .map_err(|e| match e {
                CommentRepositoryError::NotFound => DeleteCommentError::NotFound,
                CommentRepositoryError::DatabaseError(msg) => {
                    DeleteCommentError::RepositoryError(msg)
                }
            })?;

        info!(post_id, comment_id, "Comment deleted");
        Ok(())
    }
}
