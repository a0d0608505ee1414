use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use crate::auth::application::domain::entities::UserId;
use crate::blog::application::domain::visibility::is_visible_to;
use crate::blog::application::ports::incoming::use_cases::{
    GetPostDetailError, GetPostDetailUseCase, PostDetail,
};
use crate::blog::application::ports::outgoing::{CommentQuery, PostQuery};

#[derive(Debug, Clone)]
pub struct GetPostDetailService<P, C>
where
    P: PostQuery,
    C: CommentQuery,
{
    posts: P,
    comments: C,
}

impl<P, C> GetPostDetailService<P, C>
where
    P: PostQuery,
    C: CommentQuery,
{
    pub fn new(posts: P, comments: C) -> Self {
        Self { posts, comments }
    }
}

#[async_trait]
impl<P, C> GetPostDetailUseCase for GetPostDetailService<P, C>
where
    P: PostQuery + Send + Sync,
    C: CommentQuery + Send + Sync,
{
    async fn execute(
        &self,
        post_id: i32,
        viewer: Option<UserId>,
    ) -> Result<PostDetail, GetPostDetailError> {
        // 1️⃣ Load the post
        let post = self
            .posts
            .find_by_id(post_id)
            .await
            .map_err(|e| GetPostDetailError::RepositoryError(e.to_string()))?
            .ok_or(GetPostDetailError::NotFound)?;

        // 2️⃣ Hidden posts look missing to everyone but their author
        if !is_visible_to(&post, viewer, Utc::now()) {
            debug!(post_id, "Hidden post requested by non-author");
            return Err(GetPostDetailError::NotFound);
        }

        // 3️⃣ Attach comments
        let comments = self
            .comments
            .list_for_post(post_id)
            .await
            .map_err(|e| GetPostDetailError::RepositoryError(e.to_string()))?;

        Ok(PostDetail { post, comments })
    }
}
