use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::entities::{UserId, UserProfile};
use crate::auth::application::ports::incoming::use_cases::{
    FetchProfileError, FetchProfileUseCase, LoginCommand, LoginError, LoginOutput,
    LoginUserUseCase, RegisterUserError, RegisterUserUseCase, RegistrationForm,
    UpdateProfileCommand, UpdateProfileError, UpdateProfileOutput, UpdateProfileUseCase,
};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::blog::application::domain::entities::{CommentView, PostView};
use crate::blog::application::domain::media::{ImagePolicy, ImageUpload};
use crate::blog::application::ports::incoming::use_cases::{
    AddCommentError, AddCommentUseCase, CategoryPosts, CommentForm, CreatePostError,
    CreatePostUseCase, DeleteCommentError, DeleteCommentUseCase, DeletePostError,
    DeletePostUseCase, EditCommentError, EditCommentUseCase, EditPostError, EditPostUseCase,
    EditablePost, GetPostDetailError, GetPostDetailUseCase, ListPostsError, ListPostsUseCase,
    PostChoices, PostDetail, PostForm,
};
use crate::shared::pagination::{Page, PageRequest, Paginator};
use crate::tests::support::blog_fixtures::{category, location};

// ============================================================================
// Tokens
// ============================================================================

pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(JwtTokenService::new(JwtConfig {
        secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
        issuer: "blogicum-test".to_string(),
        access_token_expiry: 3600,
    }))
}

/// `Authorization` header value for a signed-in user.
pub fn bearer_for(user_id: UserId, username: &str) -> String {
    let token = test_token_provider()
        .generate_access_token(user_id, username)
        .unwrap();
    format!("Bearer {token}")
}

pub fn profile(username: &str) -> UserProfile {
    UserProfile {
        id: UserId::from(Uuid::new_v4()),
        username: username.to_string(),
        email: format!("{username}@example.com"),
        first_name: "Anna".to_string(),
        last_name: "Petrova".to_string(),
        date_joined: Utc::now(),
    }
}

pub fn test_choices() -> PostChoices {
    PostChoices::from_rows(&[category(1, "travel", true)], &[location(5, "Moscow")])
}

// ============================================================================
// Auth use cases
// ============================================================================

#[derive(Clone)]
pub struct StubLoginUserUseCase {
    result: Result<LoginOutput, LoginError>,
}

impl StubLoginUserUseCase {
    pub fn success() -> Self {
        Self {
            result: Ok(LoginOutput {
                access_token: "test-token".to_string(),
                user: profile("anna"),
            }),
        }
    }

    pub fn error(err: LoginError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl LoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _command: LoginCommand) -> Result<LoginOutput, LoginError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubRegisterUserUseCase {
    result: Result<UserProfile, RegisterUserError>,
}

impl StubRegisterUserUseCase {
    pub fn success() -> Self {
        Self {
            result: Ok(profile("anna")),
        }
    }

    pub fn error(err: RegisterUserError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl RegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(&self, _form: RegistrationForm) -> Result<UserProfile, RegisterUserError> {
        self.result.clone()
    }
}

/// Answers every lookup with the same profile, or the same error.
#[derive(Clone)]
pub struct StubFetchProfileUseCase {
    result: Result<UserProfile, FetchProfileError>,
}

impl StubFetchProfileUseCase {
    pub fn found(username: &str) -> Self {
        Self {
            result: Ok(profile(username)),
        }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(FetchProfileError::NotFound),
        }
    }
}

#[async_trait]
impl FetchProfileUseCase for StubFetchProfileUseCase {
    async fn by_username(&self, _username: &str) -> Result<UserProfile, FetchProfileError> {
        self.result.clone()
    }

    async fn by_id(&self, _user_id: UserId) -> Result<UserProfile, FetchProfileError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubUpdateProfileUseCase {
    result: Result<UpdateProfileOutput, UpdateProfileError>,
}

impl StubUpdateProfileUseCase {
    pub fn success() -> Self {
        Self {
            result: Ok(UpdateProfileOutput {
                profile: profile("anna-new"),
                access_token: "test-token".to_string(),
            }),
        }
    }

    pub fn error(err: UpdateProfileError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl UpdateProfileUseCase for StubUpdateProfileUseCase {
    async fn execute(
        &self,
        _command: UpdateProfileCommand,
    ) -> Result<UpdateProfileOutput, UpdateProfileError> {
        self.result.clone()
    }
}

// ============================================================================
// Blog use cases
// ============================================================================

/// Returns the same posts for every listing, echoing the requested page number.
#[derive(Clone)]
pub struct StubListPostsUseCase {
    result: Result<Vec<PostView>, ListPostsError>,
}

impl StubListPostsUseCase {
    pub fn with_posts(posts: Vec<PostView>) -> Self {
        Self { result: Ok(posts) }
    }

    pub fn error(err: ListPostsError) -> Self {
        Self { result: Err(err) }
    }

    fn page(&self, request: PageRequest) -> Result<Page<PostView>, ListPostsError> {
        let posts = self.result.clone()?;
        let paginator = Paginator::new(posts.len() as u64, request.per_page);
        Ok(Page::new(posts, request.page, &paginator))
    }
}

#[async_trait]
impl ListPostsUseCase for StubListPostsUseCase {
    async fn index(&self, page: PageRequest) -> Result<Page<PostView>, ListPostsError> {
        self.page(page)
    }

    /// Only the `travel` category exists.
    async fn by_category(
        &self,
        slug: &str,
        page: PageRequest,
    ) -> Result<CategoryPosts, ListPostsError> {
        if slug != "travel" {
            return Err(ListPostsError::CategoryNotFound);
        }
        Ok(CategoryPosts {
            category: category(1, "travel", true),
            page: self.page(page)?,
        })
    }

    async fn by_author(
        &self,
        _author: UserId,
        _viewer: Option<UserId>,
        page: PageRequest,
    ) -> Result<Page<PostView>, ListPostsError> {
        self.page(page)
    }
}

#[derive(Clone)]
pub struct StubPostDetailUseCase {
    result: Result<PostDetail, GetPostDetailError>,
}

impl StubPostDetailUseCase {
    pub fn found(detail: PostDetail) -> Self {
        Self { result: Ok(detail) }
    }

    pub fn error(err: GetPostDetailError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl GetPostDetailUseCase for StubPostDetailUseCase {
    async fn execute(
        &self,
        _post_id: i32,
        _viewer: Option<UserId>,
    ) -> Result<PostDetail, GetPostDetailError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubCreatePostUseCase {
    result: Result<i32, CreatePostError>,
}

impl StubCreatePostUseCase {
    pub fn success(post_id: i32) -> Self {
        Self {
            result: Ok(post_id),
        }
    }

    pub fn error(err: CreatePostError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl CreatePostUseCase for StubCreatePostUseCase {
    async fn choices(&self) -> Result<PostChoices, CreatePostError> {
        Ok(test_choices())
    }

    fn max_image_bytes(&self) -> u64 {
        ImagePolicy::default().max_file_size_bytes
    }

    async fn execute(
        &self,
        _author: UserId,
        _form: PostForm,
        _image: Option<ImageUpload>,
    ) -> Result<i32, CreatePostError> {
        self.result.clone()
    }
}

fn editable(post: &PostView) -> EditablePost {
    EditablePost {
        form: PostForm::from(post),
        choices: test_choices(),
    }
}

/// `load` and `execute` either both succeed or both fail with the same error.
/// `authorize` fails only for lookup and ownership errors.
#[derive(Clone)]
pub struct StubEditPostUseCase {
    result: Result<EditablePost, EditPostError>,
}

impl StubEditPostUseCase {
    pub fn editable(post: &PostView) -> Self {
        Self {
            result: Ok(editable(post)),
        }
    }

    pub fn error(err: EditPostError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl EditPostUseCase for StubEditPostUseCase {
    async fn load(&self, _post_id: i32, _requester: UserId) -> Result<EditablePost, EditPostError> {
        self.result.clone()
    }

    /// Only lookup and ownership failures surface before the form is read.
    async fn authorize(&self, _post_id: i32, _requester: UserId) -> Result<(), EditPostError> {
        match &self.result {
            Err(
                err @ (EditPostError::NotFound
                | EditPostError::NotAuthor
                | EditPostError::RepositoryError(_)),
            ) => Err(err.clone()),
            _ => Ok(()),
        }
    }

    fn max_image_bytes(&self) -> u64 {
        ImagePolicy::default().max_file_size_bytes
    }

    async fn execute(
        &self,
        _post_id: i32,
        _requester: UserId,
        _form: PostForm,
        _image: Option<ImageUpload>,
    ) -> Result<(), EditPostError> {
        self.result.clone().map(|_| ())
    }
}

#[derive(Clone)]
pub struct StubDeletePostUseCase {
    result: Result<EditablePost, DeletePostError>,
}

impl StubDeletePostUseCase {
    pub fn deletable(post: &PostView) -> Self {
        Self {
            result: Ok(editable(post)),
        }
    }

    pub fn error(err: DeletePostError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl DeletePostUseCase for StubDeletePostUseCase {
    async fn load(
        &self,
        _post_id: i32,
        _requester: Option<UserId>,
    ) -> Result<EditablePost, DeletePostError> {
        self.result.clone()
    }

    async fn execute(
        &self,
        _post_id: i32,
        _requester: Option<UserId>,
    ) -> Result<(), DeletePostError> {
        self.result.clone().map(|_| ())
    }
}

#[derive(Clone)]
pub struct StubAddCommentUseCase {
    result: Result<i32, AddCommentError>,
}

impl StubAddCommentUseCase {
    pub fn success(comment_id: i32) -> Self {
        Self {
            result: Ok(comment_id),
        }
    }

    pub fn error(err: AddCommentError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl AddCommentUseCase for StubAddCommentUseCase {
    async fn execute(
        &self,
        _post_id: i32,
        _author: UserId,
        _form: CommentForm,
    ) -> Result<i32, AddCommentError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubEditCommentUseCase {
    result: Result<CommentView, EditCommentError>,
}

impl StubEditCommentUseCase {
    pub fn editable(comment: CommentView) -> Self {
        Self {
            result: Ok(comment),
        }
    }

    pub fn error(err: EditCommentError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl EditCommentUseCase for StubEditCommentUseCase {
    async fn load(
        &self,
        _post_id: i32,
        _comment_id: i32,
        _requester: UserId,
    ) -> Result<CommentView, EditCommentError> {
        self.result.clone()
    }

    async fn execute(
        &self,
        _post_id: i32,
        _comment_id: i32,
        _requester: UserId,
        _form: CommentForm,
    ) -> Result<(), EditCommentError> {
        self.result.clone().map(|_| ())
    }
}

#[derive(Clone)]
pub struct StubDeleteCommentUseCase {
    result: Result<CommentView, DeleteCommentError>,
}

impl StubDeleteCommentUseCase {
    pub fn deletable(comment: CommentView) -> Self {
        Self {
            result: Ok(comment),
        }
    }

    pub fn error(err: DeleteCommentError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl DeleteCommentUseCase for StubDeleteCommentUseCase {
    async fn load(
        &self,
        _post_id: i32,
        _comment_id: i32,
        _requester: UserId,
    ) -> Result<CommentView, DeleteCommentError> {
        self.result.clone()
    }

    async fn execute(
        &self,
        _post_id: i32,
        _comment_id: i32,
        _requester: UserId,
    ) -> Result<(), DeleteCommentError> {
        self.result.clone().map(|_| ())
    }
}
