use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::error;

use super::COMMENT_TEMPLATE;
use crate::blog::application::domain::entities::CommentView;
use crate::blog::application::ports::incoming::use_cases::DeleteCommentError;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::web::{named_routes, Page};
use crate::AppState;

#[derive(Serialize)]
struct DeleteCommentPage {
    comment: CommentView,
}

#[get("/posts/{post_id:\\d+}/delete_comment/{comment_id:\\d+}/")]
pub async fn delete_comment_form_handler(
    path: web::Path<(i32, i32)>,
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let (post_id, comment_id) = path.into_inner();

    match data.blog.delete_comment.load(post_id, comment_id, user.user_id).await {
        Ok(comment) => Page::render(COMMENT_TEMPLATE, DeleteCommentPage { comment }),
        Err(err) => map_delete_comment_error(err, comment_id),
    }
}

#[post("/posts/{post_id:\\d+}/delete_comment/{comment_id:\\d+}/")]
pub async fn delete_comment_handler(
    path: web::Path<(i32, i32)>,
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let (post_id, comment_id) = path.into_inner();

    match data
        .blog
        .delete_comment
        .execute(post_id, comment_id, user.user_id)
        .await
    {
        Ok(()) => Page::redirect(named_routes::post_detail(post_id)),
        Err(err) => map_delete_comment_error(err, comment_id),
    }
}

fn map_delete_comment_error(err: DeleteCommentError, comment_id: i32) -> HttpResponse {
    match err {
        DeleteCommentError::NotFound => Page::not_found("COMMENT_NOT_FOUND", "Comment not found"),
        DeleteCommentError::Forbidden => {
            Page::forbidden("PERMISSION_DENIED", "Only the author can delete this comment")
        }
        DeleteCommentError::RepositoryError(e) => {
            error!(comment_id, error = %e, "Repository error deleting comment");
            Page::internal_error()
        }
    }
}
