use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::blog::application::ports::incoming::use_cases::{
    AddCommentError, AddCommentUseCase, CommentCommand, CommentForm,
};
use crate::blog::application::ports::outgoing::{CommentRepository, NewComment, PostQuery};

#[derive(Debug, Clone)]
pub struct AddCommentService<P, R>
where
    P: PostQuery,
    R: CommentRepository,
{
    posts: P,
    repository: R,
}

impl<P, R> AddCommentService<P, R>
where
    P: PostQuery,
    R: CommentRepository,
{
    pub fn new(posts: P, repository: R) -> Self {
        Self { posts, repository }
    }
}

#[async_trait]
impl<P, R> AddCommentUseCase for AddCommentService<P, R>
where
    P: PostQuery + Send + Sync,
    R: CommentRepository + Send + Sync,
{
    async fn execute(
        &self,
        post_id: i32,
        author: UserId,
        form: CommentForm,
    ) -> Result<i32, AddCommentError> {
        // 1️⃣ The post must exist
        let exists = self
            .posts
            .exists(post_id)
            .await
            .map_err(|e| AddCommentError::RepositoryError(e.to_string()))?;
        if !exists {
            return Err(AddCommentError::PostNotFound);
        }

        // 2️⃣ Validate
        let command = CommentCommand::new(&form).map_err(AddCommentError::Invalid)?;

        // 3️⃣ Insert
        let comment_id = self
            .repository
            .create(NewComment {
                post_id,
                author,
                text: command.into_text(),
            })
            .await
            .map_err(|e| AddCommentError::RepositoryError(e.to_string()))?;

        info!(post_id, comment_id, author = %author, "Comment added");
        Ok(comment_id)
    }
}
