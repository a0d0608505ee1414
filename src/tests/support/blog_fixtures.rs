use async_trait::async_trait;
use chrono::{Duration, Utc};
use mockall::mock;
use std::sync::Mutex;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::blog::application::domain::entities::{AuthorRef, Category, CommentView, Location, PostView};
use crate::blog::application::domain::media::ImageUpload;
use crate::blog::application::domain::visibility::{is_publicly_visible, PostScope, PostVisibility};
use crate::blog::application::ports::outgoing::{
    CategoryQuery, CategoryQueryError, CommentQuery, CommentQueryError, CommentRepository,
    CommentRepositoryError, LocationQuery, LocationQueryError, MediaStorage, MediaStorageError,
    NewComment, PostData, PostQuery, PostQueryError, PostRepository, PostRepositoryError,
};

// ============================================================================
// Records
// ============================================================================

pub fn user_id() -> UserId {
    UserId::from(Uuid::new_v4())
}

pub fn author_ref(id: UserId, username: &str) -> AuthorRef {
    AuthorRef {
        id,
        username: username.to_string(),
        first_name: String::new(),
        last_name: String::new(),
    }
}

pub fn category(id: i32, slug: &str, is_published: bool) -> Category {
    Category {
        id,
        title: format!("Category {slug}"),
        description: String::new(),
        slug: slug.to_string(),
        is_published,
        created_at: Utc::now(),
    }
}

pub fn location(id: i32, name: &str) -> Location {
    Location {
        id,
        name: name.to_string(),
        is_published: true,
        created_at: Utc::now(),
    }
}

/// Published post in published category 1, dated `id` hours ago.
pub fn post(id: i32, author: UserId) -> PostView {
    PostView {
        id,
        title: format!("Post {id}"),
        text: "Some text".to_string(),
        pub_date: Utc::now() - Duration::hours(i64::from(id)),
        is_published: true,
        created_at: Utc::now(),
        image: None,
        image_url: None,
        author: author_ref(author, "author"),
        category: Some(category(1, "travel", true)),
        location: None,
        comment_count: 0,
    }
}

pub fn hidden_post(id: i32, author: UserId) -> PostView {
    PostView {
        is_published: false,
        ..post(id, author)
    }
}

pub fn future_post(id: i32, author: UserId) -> PostView {
    PostView {
        pub_date: Utc::now() + Duration::days(2),
        ..post(id, author)
    }
}

pub fn comment(id: i32, post_id: i32, author: UserId) -> CommentView {
    CommentView {
        id,
        post_id,
        text: format!("Comment {id}"),
        is_published: true,
        created_at: Utc::now(),
        author: author_ref(author, "commenter"),
    }
}

pub fn png_upload() -> ImageUpload {
    ImageUpload {
        file_name: "photo.png".to_string(),
        content_type: "image/png".to_string(),
        size: 4,
        bytes: vec![0x89, b'P', b'N', b'G'],
    }
}

// ============================================================================
// In-memory read ports
// ============================================================================

/// Applies scope and visibility in memory, the way the SQL adapter does.
#[derive(Default)]
pub struct InMemoryPostQuery {
    pub posts: Vec<PostView>,
    pub error: Option<String>,
    pub list_calls: Mutex<Vec<(u64, u64)>>,
}

impl InMemoryPostQuery {
    pub fn with(posts: Vec<PostView>) -> Self {
        Self {
            posts,
            ..Self::default()
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            error: Some(msg.to_string()),
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), PostQueryError> {
        match &self.error {
            Some(msg) => Err(PostQueryError::DatabaseError(msg.clone())),
            None => Ok(()),
        }
    }

    fn matching(&self, scope: PostScope, visibility: PostVisibility) -> Vec<PostView> {
        let mut posts: Vec<PostView> = self
            .posts
            .iter()
            .filter(|p| match scope {
                PostScope::All => true,
                PostScope::Category(id) => p.category.as_ref().is_some_and(|c| c.id == id),
                PostScope::Author(author) => p.author.id == author,
            })
            .filter(|p| match visibility {
                PostVisibility::Public { now } => is_publicly_visible(p, now),
                PostVisibility::Unrestricted => true,
            })
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.pub_date.cmp(&a.pub_date).then(b.id.cmp(&a.id)));
        posts
    }
}

#[async_trait]
impl PostQuery for InMemoryPostQuery {
    async fn count(
        &self,
        scope: PostScope,
        visibility: PostVisibility,
    ) -> Result<u64, PostQueryError> {
        self.check()?;
        Ok(self.matching(scope, visibility).len() as u64)
    }

    async fn list(
        &self,
        scope: PostScope,
        visibility: PostVisibility,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<PostView>, PostQueryError> {
        self.check()?;
        self.list_calls.lock().unwrap().push((offset, limit));
        Ok(self
            .matching(scope, visibility)
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn find_by_id(&self, post_id: i32) -> Result<Option<PostView>, PostQueryError> {
        self.check()?;
        Ok(self.posts.iter().find(|p| p.id == post_id).cloned())
    }

    async fn exists(&self, post_id: i32) -> Result<bool, PostQueryError> {
        self.check()?;
        Ok(self.posts.iter().any(|p| p.id == post_id))
    }
}

#[derive(Default)]
pub struct InMemoryCategoryQuery {
    pub categories: Vec<Category>,
}

#[async_trait]
impl CategoryQuery for InMemoryCategoryQuery {
    async fn find_published_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<Category>, CategoryQueryError> {
        Ok(self
            .categories
            .iter()
            .find(|c| c.slug == slug && c.is_published)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Category>, CategoryQueryError> {
        Ok(self.categories.clone())
    }
}

#[derive(Default)]
pub struct InMemoryLocationQuery {
    pub locations: Vec<Location>,
}

#[async_trait]
impl LocationQuery for InMemoryLocationQuery {
    async fn list_all(&self) -> Result<Vec<Location>, LocationQueryError> {
        Ok(self.locations.clone())
    }
}

#[derive(Default)]
pub struct InMemoryCommentQuery {
    pub comments: Vec<CommentView>,
}

impl InMemoryCommentQuery {
    pub fn with(comments: Vec<CommentView>) -> Self {
        Self { comments }
    }
}

#[async_trait]
impl CommentQuery for InMemoryCommentQuery {
    async fn list_for_post(&self, post_id: i32) -> Result<Vec<CommentView>, CommentQueryError> {
        Ok(self
            .comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect())
    }

    async fn find_in_post(
        &self,
        post_id: i32,
        comment_id: i32,
    ) -> Result<Option<CommentView>, CommentQueryError> {
        Ok(self
            .comments
            .iter()
            .find(|c| c.post_id == post_id && c.id == comment_id)
            .cloned())
    }
}

// ============================================================================
// Write-port mocks
// ============================================================================

mock! {
    pub PostRepositoryMock {}
    #[async_trait]
    impl PostRepository for PostRepositoryMock {
        async fn create(&self, author: UserId, data: PostData) -> Result<i32, PostRepositoryError>;
        async fn update(&self, post_id: i32, data: PostData) -> Result<(), PostRepositoryError>;
        async fn delete(&self, post_id: i32) -> Result<(), PostRepositoryError>;
    }
}

mock! {
    pub CommentRepositoryMock {}
    #[async_trait]
    impl CommentRepository for CommentRepositoryMock {
        async fn create(&self, comment: NewComment) -> Result<i32, CommentRepositoryError>;
        async fn update_text(&self, comment_id: i32, text: &str) -> Result<(), CommentRepositoryError>;
        async fn delete(&self, comment_id: i32) -> Result<(), CommentRepositoryError>;
    }
}

mock! {
    pub MediaStorageMock {}
    #[async_trait]
    impl MediaStorage for MediaStorageMock {
        async fn save_post_image(&self, upload: &ImageUpload) -> Result<String, MediaStorageError>;
        async fn remove(&self, path: &str) -> Result<(), MediaStorageError>;
    }
}

/// Media storage that must not be touched.
pub fn untouched_media() -> MockMediaStorageMock {
    let mut media = MockMediaStorageMock::new();
    media.expect_save_post_image().never();
    media.expect_remove().never();
    media
}
