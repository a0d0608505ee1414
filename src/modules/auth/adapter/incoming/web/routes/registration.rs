use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::error;

use crate::modules::auth::application::ports::incoming::use_cases::{
    RegisterUserError, RegistrationForm,
};
use crate::shared::forms::FormContext;
use crate::shared::web::{named_routes, Page};
use crate::AppState;

pub const REGISTRATION_TEMPLATE: &str = "registration/registration_form.html";

#[derive(Serialize)]
struct RegistrationPage {
    form: FormContext<RegistrationForm>,
}

fn render_registration(form: FormContext<RegistrationForm>) -> HttpResponse {
    Page::render(REGISTRATION_TEMPLATE, RegistrationPage { form })
}

#[get("/auth/registration/")]
pub async fn registration_form_handler() -> impl Responder {
    render_registration(FormContext::unbound(RegistrationForm::default()))
}

#[post("/auth/registration/")]
pub async fn registration_handler(
    form: web::Form<RegistrationForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let form = form.into_inner();

    match data.auth.register.execute(form.clone()).await {
        Ok(_) => Page::redirect(named_routes::index()),
        Err(err) => map_register_error(err, form),
    }
}

fn map_register_error(err: RegisterUserError, form: RegistrationForm) -> HttpResponse {
    match err {
        RegisterUserError::Invalid(errors) => {
            render_registration(FormContext::bound(form, errors))
        }
        RegisterUserError::HashingFailed(e) => {
            error!(error = %e, "Password hashing failed during registration");
            Page::internal_error()
        }
        RegisterUserError::RepositoryError(e) => {
            error!(error = %e, "Repository error during registration");
            Page::internal_error()
        }
    }
}
