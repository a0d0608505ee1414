use async_trait::async_trait;
use tracing::info;

use super::post_choices::PostChoicesLoader;
use crate::auth::application::domain::entities::UserId;
use crate::blog::application::domain::entities::PostView;
use crate::blog::application::ports::incoming::use_cases::{
    DeletePostError, DeletePostUseCase, EditablePost, PostForm,
};
use crate::blog::application::ports::outgoing::{PostQuery, PostRepository, PostRepositoryError};

#[derive(Clone)]
pub struct DeletePostService<P, R>
where
    P: PostQuery,
    R: PostRepository,
{
    posts: P,
    repository: R,
    choices: PostChoicesLoader,
}

impl<P, R> DeletePostService<P, R>
where
    P: PostQuery,
    R: PostRepository,
{
    pub fn new(posts: P, repository: R, choices: PostChoicesLoader) -> Self {
        Self {
            posts,
            repository,
            choices,
        }
    }

    async fn owned_post(
        &self,
        post_id: i32,
        requester: Option<UserId>,
    ) -> Result<PostView, DeletePostError> {
        let post = self
            .posts
            .find_by_id(post_id)
            .await
            .map_err(|e| DeletePostError::RepositoryError(e.to_string()))?
            .ok_or(DeletePostError::NotFound)?;

        match requester {
            Some(user) if post.is_authored_by(user) => Ok(post),
            _ => Err(DeletePostError::Forbidden),
        }
    }
}

#[async_trait]
impl<P, R> DeletePostUseCase for DeletePostService<P, R>
where
    P: PostQuery + Send + Sync,
    R: PostRepository + Send + Sync,
{
    async fn load(
        &self,
        post_id: i32,
        requester: Option<UserId>,
    ) -> Result<EditablePost, DeletePostError> {
        let post = self.owned_post(post_id, requester).await?;
        let choices = self
            .choices
            .load()
            .await
            .map_err(DeletePostError::RepositoryError)?;

        Ok(EditablePost {
            form: PostForm::from(&post),
            choices,
        })
    }

    async fn execute(
        &self,
        post_id: i32,
        requester: Option<UserId>,
    ) -> Result<(), DeletePostError> {
        let post = self.owned_post(post_id, requester).await?;

        self.repository
            .delete(post_id)
            .await
            .map_err(|e| match e {
                PostRepositoryError::NotFound => DeletePostError::NotFound,
                PostRepositoryError::DatabaseError(msg) => DeletePostError::RepositoryError(msg),
            })?;

        info!(post_id, title = %post, "Post deleted");
        Ok(())
    }
}
