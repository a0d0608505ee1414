use actix_multipart::Multipart;
use actix_web::{get, post, web, HttpResponse, Responder};
use tracing::{error, warn};

use super::render_post_form;
use crate::blog::adapter::incoming::web::post_multipart::read_post_submission;
use crate::blog::application::ports::incoming::use_cases::{EditPostError, PostForm};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::forms::FormContext;
use crate::shared::web::{named_routes, Page};
use crate::AppState;

#[get("/posts/{post_id:\\d+}/edit/")]
pub async fn edit_post_form_handler(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data.blog.edit_post.load(post_id, user.user_id).await {
        Ok(editable) => {
            render_post_form(FormContext::unbound(editable.form).with_choices(editable.choices))
        }
        Err(err) => map_edit_post_error(err, post_id, PostForm::default()),
    }
}

/// Non-authors are sent back to the post untouched.
#[post("/posts/{post_id:\\d+}/edit/")]
pub async fn edit_post_handler(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();
    let edit_post = &data.blog.edit_post;

    if let Err(err) = edit_post.authorize(post_id, user.user_id).await {
        return map_edit_post_error(err, post_id, PostForm::default());
    }

    let submission = match read_post_submission(payload, edit_post.max_image_bytes()).await {
        Ok(submission) => submission,
        Err(e) => return Page::bad_request("INVALID_FORM_DATA", &e.to_string()),
    };
    let form = submission.form;

    match edit_post
        .execute(post_id, user.user_id, form.clone(), submission.image)
        .await
    {
        Ok(()) => Page::redirect(named_routes::post_detail(post_id)),
        Err(err) => map_edit_post_error(err, post_id, form),
    }
}

fn map_edit_post_error(err: EditPostError, post_id: i32, form: PostForm) -> HttpResponse {
    match err {
        EditPostError::NotFound => Page::not_found("POST_NOT_FOUND", "Post not found"),
        EditPostError::NotAuthor => {
            warn!(post_id, "Edit attempt by non-author");
            Page::redirect(named_routes::post_detail(post_id))
        }
        EditPostError::Invalid { errors, choices } => {
            render_post_form(FormContext::bound(form, errors).with_choices(choices))
        }
        EditPostError::MediaError(e) => {
            error!(post_id, error = %e, "Media storage error editing post");
            Page::internal_error()
        }
        EditPostError::RepositoryError(e) => {
            error!(post_id, error = %e, "Repository error editing post");
            Page::internal_error()
        }
    }
}
