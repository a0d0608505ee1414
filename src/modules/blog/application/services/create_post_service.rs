use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use super::post_choices::PostChoicesLoader;
use crate::auth::application::domain::entities::UserId;
use crate::blog::application::domain::media::{ImagePolicy, ImageUpload};
use crate::blog::application::ports::incoming::use_cases::{
    CreatePostError, CreatePostUseCase, ImageChange, PostChoices, PostCommand, PostForm,
};
use crate::blog::application::ports::outgoing::{MediaStorage, PostRepository};

#[derive(Clone)]
pub struct CreatePostService<R>
where
    R: PostRepository,
{
    repository: R,
    choices: PostChoicesLoader,
    media: Arc<dyn MediaStorage + Send + Sync>,
    policy: ImagePolicy,
}

impl<R> CreatePostService<R>
where
    R: PostRepository,
{
    pub fn new(
        repository: R,
        choices: PostChoicesLoader,
        media: Arc<dyn MediaStorage + Send + Sync>,
        policy: ImagePolicy,
    ) -> Self {
        Self {
            repository,
            choices,
            media,
            policy,
        }
    }
}

#[async_trait]
impl<R> CreatePostUseCase for CreatePostService<R>
where
    R: PostRepository + Send + Sync,
{
    async fn choices(&self) -> Result<PostChoices, CreatePostError> {
        self.choices
            .load()
            .await
            .map_err(CreatePostError::RepositoryError)
    }

    fn max_image_bytes(&self) -> u64 {
        self.policy.max_file_size_bytes
    }

    async fn execute(
        &self,
        author: UserId,
        form: PostForm,
        image: Option<ImageUpload>,
    ) -> Result<i32, CreatePostError> {
        // 1️⃣ Validate against the current choices
        let choices = self.choices().await?;
        let command = PostCommand::new(&form, image, &choices, &self.policy)
            .map_err(|errors| CreatePostError::Invalid { errors, choices })?;

        // 2️⃣ Store the image first so the row can point at it
        let image_path = match command.image_change() {
            ImageChange::Replace(upload) => Some(
                self.media
                    .save_post_image(upload)
                    .await
                    .map_err(|e| CreatePostError::MediaError(e.to_string()))?,
            ),
            ImageChange::Keep | ImageChange::Clear => None,
        };

        // 3️⃣ Insert
        let title = command.title().to_string();
        let data = command.into_post_data(image_path.clone());
        let post_id = match self.repository.create(author, data).await {
            Ok(id) => id,
            Err(e) => {
                if let Some(path) = image_path {
                    if let Err(cleanup) = self.media.remove(&path).await {
                        warn!(path = %path, error = %cleanup, "Orphaned post image left behind");
                    }
                }
                return Err(CreatePostError::RepositoryError(e.to_string()));
            }
        };

        info!(post_id, author = %author, title = %title, "Post created");
        Ok(post_id)
    }
}
