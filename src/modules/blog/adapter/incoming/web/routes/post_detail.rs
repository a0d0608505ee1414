use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;

use crate::blog::application::domain::entities::{CommentView, PostView};
use crate::blog::application::ports::incoming::use_cases::{CommentForm, GetPostDetailError};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::forms::FormContext;
use crate::shared::web::Page;
use crate::AppState;

pub const POST_DETAIL_TEMPLATE: &str = "blog/detail.html";

#[derive(Serialize)]
struct PostDetailPage {
    post: PostView,
    form: FormContext<CommentForm>,
    comments: Vec<CommentView>,
}

#[get("/posts/{post_id:\\d+}/")]
pub async fn post_detail_handler(
    path: web::Path<i32>,
    viewer: Option<AuthenticatedUser>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data
        .blog
        .post_detail
        .execute(post_id, viewer.map(|u| u.user_id))
        .await
    {
        Ok(detail) => Page::render(
            POST_DETAIL_TEMPLATE,
            PostDetailPage {
                post: detail.post.with_image_url(&data.media_url),
                form: FormContext::unbound(CommentForm::default()),
                comments: detail.comments,
            },
        ),
        Err(GetPostDetailError::NotFound) => Page::not_found("POST_NOT_FOUND", "Post not found"),
        Err(GetPostDetailError::RepositoryError(e)) => {
            error!(post_id, error = %e, "Repository error loading post");
            Page::internal_error()
        }
    }
}
