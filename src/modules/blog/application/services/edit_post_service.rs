use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use super::post_choices::PostChoicesLoader;
use crate::auth::application::domain::entities::UserId;
use crate::blog::application::domain::entities::PostView;
use crate::blog::application::domain::media::{ImagePolicy, ImageUpload};
use crate::blog::application::ports::incoming::use_cases::{
    EditPostError, EditPostUseCase, EditablePost, ImageChange, PostCommand, PostForm,
};
use crate::blog::application::ports::outgoing::{
    MediaStorage, PostQuery, PostRepository, PostRepositoryError,
};

#[derive(Clone)]
pub struct EditPostService<P, R>
where
    P: PostQuery,
    R: PostRepository,
{
    posts: P,
    repository: R,
    choices: PostChoicesLoader,
    media: Arc<dyn MediaStorage + Send + Sync>,
    policy: ImagePolicy,
}

impl<P, R> EditPostService<P, R>
where
    P: PostQuery,
    R: PostRepository,
{
    pub fn new(
        posts: P,
        repository: R,
        choices: PostChoicesLoader,
        media: Arc<dyn MediaStorage + Send + Sync>,
        policy: ImagePolicy,
    ) -> Self {
        Self {
            posts,
            repository,
            choices,
            media,
            policy,
        }
    }

    async fn owned_post(&self, post_id: i32, requester: UserId) -> Result<PostView, EditPostError> {
        let post = self
            .posts
            .find_by_id(post_id)
            .await
            .map_err(|e| EditPostError::RepositoryError(e.to_string()))?
            .ok_or(EditPostError::NotFound)?;

        if !post.is_authored_by(requester) {
            return Err(EditPostError::NotAuthor);
        }
        Ok(post)
    }

    async fn discard_image(&self, path: &str) {
        if let Err(e) = self.media.remove(path).await {
            warn!(path = %path, error = %e, "Could not remove replaced post image");
        }
    }
}

#[async_trait]
impl<P, R> EditPostUseCase for EditPostService<P, R>
where
    P: PostQuery + Send + Sync,
    R: PostRepository + Send + Sync,
{
    async fn load(&self, post_id: i32, requester: UserId) -> Result<EditablePost, EditPostError> {
        let post = self.owned_post(post_id, requester).await?;
        let choices = self
            .choices
            .load()
            .await
            .map_err(EditPostError::RepositoryError)?;

        Ok(EditablePost {
            form: PostForm::from(&post),
            choices,
        })
    }

    async fn authorize(&self, post_id: i32, requester: UserId) -> Result<(), EditPostError> {
        self.owned_post(post_id, requester).await.map(|_| ())
    }

    fn max_image_bytes(&self) -> u64 {
        self.policy.max_file_size_bytes
    }

    async fn execute(
        &self,
        post_id: i32,
        requester: UserId,
        form: PostForm,
        image: Option<ImageUpload>,
    ) -> Result<(), EditPostError> {
        // 1️⃣ Only the author gets past this point
        let post = self.owned_post(post_id, requester).await?;

        // 2️⃣ Validate
        let choices = self
            .choices
            .load()
            .await
            .map_err(EditPostError::RepositoryError)?;
        let command = PostCommand::new(&form, image, &choices, &self.policy)
            .map_err(|errors| EditPostError::Invalid { errors, choices })?;

        // 3️⃣ Settle the image column
        let image_path = match command.image_change() {
            ImageChange::Keep => post.image.clone(),
            ImageChange::Clear => None,
            ImageChange::Replace(upload) => Some(
                self.media
                    .save_post_image(upload)
                    .await
                    .map_err(|e| EditPostError::MediaError(e.to_string()))?,
            ),
        };

        // 4️⃣ Update
        let data = command.into_post_data(image_path.clone());
        if let Err(e) = self.repository.update(post_id, data).await {
            if image_path != post.image {
                if let Some(new_path) = &image_path {
                    self.discard_image(new_path).await;
                }
            }
            return Err(match e {
                PostRepositoryError::NotFound => EditPostError::NotFound,
                PostRepositoryError::DatabaseError(msg) => EditPostError::RepositoryError(msg),
            });
        }

        // 5️⃣ Drop the file the post no longer points at
        if let Some(old_path) = post.image.as_deref() {
            if image_path.as_deref() != Some(old_path) {
                self.discard_image(old_path).await;
            }
        }

        info!(post_id, "Post updated");
        Ok(())
    }
}
