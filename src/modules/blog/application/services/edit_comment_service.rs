use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::blog::application::domain::entities::CommentView;
use crate::blog::application::ports::incoming::use_cases::{
    CommentCommand, CommentForm, EditCommentError, EditCommentUseCase,
};
use crate::blog::application::ports::outgoing::{
    CommentQuery, CommentRepository, CommentRepositoryError,
};

#[derive(Debug, Clone)]
pub struct EditCommentService<C, R>
where
    C: CommentQuery,
    R: CommentRepository,
{
    comments: C,
    repository: R,
}

impl<C, R> EditCommentService<C, R>
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
impl<C, R> EditCommentUseCase for EditCommentService<C, R>
where
    C: CommentQuery + Send + Sync,
    R: CommentRepository + Send + Sync,
{
    async fn load(
        &self,
        post_id: i32,
        comment_id: i32,
        requester: UserId,
    ) -> Result<CommentView, EditCommentError> {
        let comment = self
            .comments
            .find_in_post(post_id, comment_id)
            .await
            .map_err(|e| EditCommentError::RepositoryError(e.to_string()))?
            .ok_or(EditCommentError::NotFound)?;

        if !comment.is_authored_by(requester) {
            return Err(EditCommentError::Forbidden);
        }
        Ok(comment)
    }

    async fn execute(
        &self,
        post_id: i32,
        comment_id: i32,
        requester: UserId,
        form: CommentForm,
    ) -> Result<(), EditCommentError> {
        // 1️⃣ Ownership
        let comment = self.load(post_id, comment_id, requester).await?;

        // 2️⃣ Validate
        let command = match CommentCommand::new(&form) {
            Ok(command) => command,
            Err(errors) => return Err(EditCommentError::Invalid { errors, comment }),
        };

        // 3️⃣ Save
        self.repository
            .update_text(comment_id, command.text())
            .await
            .map_err(|e| match e {
                CommentRepositoryError::NotFound => EditCommentError::NotFound,
                CommentRepositoryError::DatabaseError(msg) => EditCommentError::RepositoryError(msg),
            })?;

        info!(post_id, comment_id, "Comment edited");
        Ok(())
    }
}
