use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::auth::adapter::incoming::web::session_cookie::with_cookie;
use crate::modules::auth::application::ports::incoming::use_cases::{
    FetchProfileError, ProfileForm, UpdateProfileCommand, UpdateProfileError,
};
use crate::shared::forms::FormContext;
use crate::shared::web::Page;
use crate::AppState;

pub const EDIT_PROFILE_TEMPLATE: &str = "blog/user.html";

//
// ──────────────────────────────────────────────────────────
// Context
// ──────────────────────────────────────────────────────────
//

#[derive(Serialize)]
struct EditProfilePage {
    form: FormContext<ProfileForm>,
}

fn render_profile_form(form: FormContext<ProfileForm>) -> HttpResponse {
    Page::render(EDIT_PROFILE_TEMPLATE, EditProfilePage { form })
}

//
// ──────────────────────────────────────────────────────────
// Routes
// ──────────────────────────────────────────────────────────
//

#[get("/edit_profile/")]
pub async fn edit_profile_form_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.fetch_profile.by_id(user.user_id).await {
        Ok(profile) => render_profile_form(FormContext::unbound(ProfileForm::from(&profile))),
        Err(FetchProfileError::NotFound) => Page::not_found("USER_NOT_FOUND", "User not found"),
        Err(FetchProfileError::RepositoryError(e)) => {
            error!("Repository error loading profile {}: {}", user.user_id, e);
            Page::internal_error()
        }
    }
}

/// Saves and re-renders the form in place; the session cookie is re-issued.
#[post("/edit_profile/")]
pub async fn edit_profile_handler(
    user: AuthenticatedUser,
    form: web::Form<ProfileForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let form = form.into_inner();

    let command = match UpdateProfileCommand::new(user.user_id, &form) {
        Ok(command) => command,
        Err(errors) => return render_profile_form(FormContext::bound(form, errors)),
    };

    match data.auth.update_profile.execute(command).await {
        Ok(output) => with_cookie(
            render_profile_form(FormContext::bound(
                ProfileForm::from(&output.profile),
                Default::default(),
            )),
            &data.session_cookie.issue(&output.access_token),
        ),
        Err(err) => map_update_profile_error(err, form),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_update_profile_error(err: UpdateProfileError, form: ProfileForm) -> HttpResponse {
    match err {
        UpdateProfileError::Invalid(errors) => render_profile_form(FormContext::bound(form, errors)),
        UpdateProfileError::NotFound => Page::not_found("USER_NOT_FOUND", "User not found"),
        UpdateProfileError::TokenGenerationFailed(e) => {
            error!(error = %e, "Token generation failed after profile update");
            Page::internal_error()
        }
        UpdateProfileError::RepositoryError(e) => {
            error!(error = %e, "Repository error updating profile");
            Page::internal_error()
        }
    }
}
