use actix_multipart::Multipart;
use actix_web::{get, post, web, HttpResponse, Responder};
use tracing::error;

use super::render_post_form;
use crate::blog::adapter::incoming::web::post_multipart::read_post_submission;
use crate::blog::application::ports::incoming::use_cases::{CreatePostError, PostForm};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::forms::FormContext;
use crate::shared::web::{named_routes, Page};
use crate::AppState;

#[get("/posts/create/")]
pub async fn create_post_form_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.blog.create_post.choices().await {
        Ok(choices) => render_post_form(FormContext::unbound(PostForm::default()).with_choices(choices)),
        Err(err) => map_create_post_error(err, PostForm::default()),
    }
}

#[post("/posts/create/")]
pub async fn create_post_handler(
    user: AuthenticatedUser,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let max_image_bytes = data.blog.create_post.max_image_bytes();
    let submission = match read_post_submission(payload, max_image_bytes).await {
        Ok(submission) => submission,
        Err(e) => return Page::bad_request("INVALID_FORM_DATA", &e.to_string()),
    };
    let form = submission.form;

    match data
        .blog
        .create_post
        .execute(user.user_id, form.clone(), submission.image)
        .await
    {
        Ok(_) => Page::redirect(named_routes::profile(&user.username)),
        Err(err) => map_create_post_error(err, form),
    }
}

fn map_create_post_error(err: CreatePostError, form: PostForm) -> HttpResponse {
    match err {
        CreatePostError::Invalid { errors, choices } => {
            render_post_form(FormContext::bound(form, errors).with_choices(choices))
        }
        CreatePostError::MediaError(e) => {
            error!(error = %e, "Media storage error creating post");
            Page::internal_error()
        }
        CreatePostError::RepositoryError(e) => {
            error!(error = %e, "Repository error creating post");
            Page::internal_error()
        }
    }
}
