use std::sync::Arc;

use actix_web::web;

use crate::auth::adapter::incoming::web::session_cookie::SessionCookieConfig;
use crate::auth::application::ports::incoming::use_cases::{
    FetchProfileUseCase, LoginError, LoginUserUseCase, RegisterUserError, RegisterUserUseCase,
    UpdateProfileError, UpdateProfileUseCase,
};
use crate::auth::application::AuthUseCases;
use crate::blog::application::ports::incoming::use_cases::{
    AddCommentError, AddCommentUseCase, CreatePostError, CreatePostUseCase, DeleteCommentError,
    DeleteCommentUseCase, DeletePostError, DeletePostUseCase, EditCommentError,
    EditCommentUseCase, EditPostError, EditPostUseCase, GetPostDetailError, GetPostDetailUseCase,
    ListPostsUseCase,
};
use crate::blog::application::BlogUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

const UNUSED: &str = "not used in this test";

/// AppState whose use cases are stubs; every default answers "not found" or fails.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    blog: BlogUseCases,
    media_url: String,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: AuthUseCases {
                register: Arc::new(StubRegisterUserUseCase::error(
                    RegisterUserError::RepositoryError(UNUSED.into()),
                )),
                login: Arc::new(StubLoginUserUseCase::error(LoginError::QueryError(
                    UNUSED.into(),
                ))),
                fetch_profile: Arc::new(StubFetchProfileUseCase::not_found()),
                update_profile: Arc::new(StubUpdateProfileUseCase::error(
                    UpdateProfileError::RepositoryError(UNUSED.into()),
                )),
            },
            blog: BlogUseCases {
                list_posts: Arc::new(StubListPostsUseCase::with_posts(vec![])),
                post_detail: Arc::new(StubPostDetailUseCase::error(GetPostDetailError::NotFound)),
                create_post: Arc::new(StubCreatePostUseCase::error(
                    CreatePostError::RepositoryError(UNUSED.into()),
                )),
                edit_post: Arc::new(StubEditPostUseCase::error(EditPostError::NotFound)),
                delete_post: Arc::new(StubDeletePostUseCase::error(DeletePostError::NotFound)),
                add_comment: Arc::new(StubAddCommentUseCase::error(AddCommentError::PostNotFound)),
                edit_comment: Arc::new(StubEditCommentUseCase::error(EditCommentError::NotFound)),
                delete_comment: Arc::new(StubDeleteCommentUseCase::error(
                    DeleteCommentError::NotFound,
                )),
            },
            media_url: "/media".to_string(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_login(mut self, uc: impl LoginUserUseCase + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_register(mut self, uc: impl RegisterUserUseCase + 'static) -> Self {
        self.auth.register = Arc::new(uc);
        self
    }

    pub fn with_fetch_profile(mut self, uc: impl FetchProfileUseCase + 'static) -> Self {
        self.auth.fetch_profile = Arc::new(uc);
        self
    }

    pub fn with_update_profile(mut self, uc: impl UpdateProfileUseCase + 'static) -> Self {
        self.auth.update_profile = Arc::new(uc);
        self
    }

    pub fn with_list_posts(mut self, uc: impl ListPostsUseCase + 'static) -> Self {
        self.blog.list_posts = Arc::new(uc);
        self
    }

    pub fn with_post_detail(mut self, uc: impl GetPostDetailUseCase + 'static) -> Self {
        self.blog.post_detail = Arc::new(uc);
        self
    }

    pub fn with_create_post(mut self, uc: impl CreatePostUseCase + 'static) -> Self {
        self.blog.create_post = Arc::new(uc);
        self
    }

    pub fn with_edit_post(mut self, uc: impl EditPostUseCase + 'static) -> Self {
        self.blog.edit_post = Arc::new(uc);
        self
    }

    pub fn with_delete_post(mut self, uc: impl DeletePostUseCase + 'static) -> Self {
        self.blog.delete_post = Arc::new(uc);
        self
    }

    pub fn with_add_comment(mut self, uc: impl AddCommentUseCase + 'static) -> Self {
        self.blog.add_comment = Arc::new(uc);
        self
    }

    pub fn with_edit_comment(mut self, uc: impl EditCommentUseCase + 'static) -> Self {
        self.blog.edit_comment = Arc::new(uc);
        self
    }

    pub fn with_delete_comment(mut self, uc: impl DeleteCommentUseCase + 'static) -> Self {
        self.blog.delete_comment = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            blog: self.blog,
            session_cookie: SessionCookieConfig::default(),
            media_url: self.media_url,
        })
    }
}
