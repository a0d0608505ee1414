use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::error;

use super::COMMENT_TEMPLATE;
use crate::blog::application::domain::entities::CommentView;
use crate::blog::application::ports::incoming::use_cases::{CommentForm, EditCommentError};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::forms::FormContext;
use crate::shared::web::{named_routes, Page};
use crate::AppState;

#[derive(Serialize)]
struct EditCommentPage {
    form: FormContext<CommentForm>,
    comment: CommentView,
}

fn render_comment_form(form: FormContext<CommentForm>, comment: CommentView) -> HttpResponse {
    Page::render(COMMENT_TEMPLATE, EditCommentPage { form, comment })
}

#[get("/posts/{post_id:\\d+}/edit_comment/{comment_id:\\d+}/")]
pub async fn edit_comment_form_handler(
    path: web::Path<(i32, i32)>,
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let (post_id, comment_id) = path.into_inner();

    match data.blog.edit_comment.load(post_id, comment_id, user.user_id).await {
        Ok(comment) => {
            let form = CommentForm {
                text: comment.text.clone(),
            };
            render_comment_form(FormContext::unbound(form), comment)
        }
        Err(err) => map_edit_comment_error(err, comment_id, CommentForm::default()),
    }
}

#[post("/posts/{post_id:\\d+}/edit_comment/{comment_id:\\d+}/")]
pub async fn edit_comment_handler(
    path: web::Path<(i32, i32)>,
    user: AuthenticatedUser,
    form: web::Form<CommentForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (post_id, comment_id) = path.into_inner();
    let form = form.into_inner();

    match data
        .blog
        .edit_comment
        .execute(post_id, comment_id, user.user_id, form.clone())
        .await
    {
        Ok(()) => Page::redirect(named_routes::post_detail(post_id)),
        Err(err) => map_edit_comment_error(err, comment_id, form),
    }
}

fn map_edit_comment_error(err: EditCommentError, comment_id: i32, form: CommentForm) -> HttpResponse {
    match err {
        EditCommentError::NotFound => Page::not_found("COMMENT_NOT_FOUND", "Comment not found"),
        EditCommentError::Forbidden => {
            Page::forbidden("PERMISSION_DENIED", "Only the author can edit this comment")
        }
        EditCommentError::Invalid { errors, comment } => {
            render_comment_form(FormContext::bound(form, errors), comment)
        }
        EditCommentError::RepositoryError(e) => {
            error!(comment_id, error = %e, "Repository error editing comment");
            Page::internal_error()
        }
    }
}
