use actix_web::{post, web, Responder};
use tracing::error;

use crate::blog::application::ports::incoming::use_cases::{AddCommentError, CommentForm};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::web::{named_routes, Page};
use crate::AppState;

/// Every outcome but a missing post lands back on the post page.
#[post("/posts/{post_id:\\d+}/comment/")]
pub async fn add_comment_handler(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    form: web::Form<CommentForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data
        .blog
        .add_comment
        .execute(post_id, user.user_id, form.into_inner())
        .await
    {
        Ok(_) | Err(AddCommentError::Invalid(_)) => {
            Page::redirect(named_routes::post_detail(post_id))
        }
        Err(AddCommentError::PostNotFound) => Page::not_found("POST_NOT_FOUND", "Post not found"),
        Err(AddCommentError::RepositoryError(e)) => {
            error!(post_id, error = %e, "Repository error adding comment");
            Page::internal_error()
        }
    }
}
