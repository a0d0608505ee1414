use actix_web::{get, post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::modules::auth::adapter::incoming::web::session_cookie::with_cookie;
use crate::modules::auth::application::ports::incoming::use_cases::login_user::INVALID_LOGIN_MESSAGE;
use crate::modules::auth::application::ports::incoming::use_cases::{
    LoginCommand, LoginError, LoginForm,
};
use crate::shared::forms::{FormContext, FormErrors, NON_FIELD_ERRORS};
use crate::shared::web::{named_routes, Page};
use crate::AppState;

pub const LOGIN_TEMPLATE: &str = "registration/login.html";

//
// ──────────────────────────────────────────────────────────
// Request / Context
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    pub next: Option<String>,
}

#[derive(Serialize)]
struct LoginPage {
    form: FormContext<LoginForm>,
}

fn render_login(form: FormContext<LoginForm>) -> HttpResponse {
    Page::render(LOGIN_TEMPLATE, LoginPage { form })
}

//
// ──────────────────────────────────────────────────────────
// Routes
// ──────────────────────────────────────────────────────────
//

#[get("/auth/login/")]
pub async fn login_form_handler(query: web::Query<LoginQuery>) -> impl Responder {
    render_login(FormContext::unbound(LoginForm {
        next: query.into_inner().next,
        ..LoginForm::default()
    }))
}

#[post("/auth/login/")]
pub async fn login_handler(
    form: web::Form<LoginForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let form = form.into_inner();

    let command = match LoginCommand::new(&form) {
        Ok(command) => command,
        Err(errors) => return render_login(FormContext::bound(form, errors)),
    };

    info!(username = %command.username(), "Login attempt");

    match data.auth.login.execute(command).await {
        Ok(output) => {
            let target = named_routes::safe_next(form.next.as_deref())
                .unwrap_or_else(named_routes::index);
            with_cookie(
                Page::redirect(target),
                &data.session_cookie.issue(&output.access_token),
            )
        }
        Err(err) => map_login_error(err, form),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_login_error(err: LoginError, form: LoginForm) -> HttpResponse {
    match err {
        LoginError::InvalidCredentials => render_login(FormContext::bound(
            form,
            FormErrors::single(NON_FIELD_ERRORS, INVALID_LOGIN_MESSAGE),
        )),
        LoginError::PasswordVerificationFailed(e) => {
            error!(error = %e, "Password verification failed");
            Page::internal_error()
        }
        LoginError::TokenGenerationFailed(e) => {
            error!(error = %e, "Token generation failed");
            Page::internal_error()
        }
        LoginError::QueryError(e) => {
            error!(error = %e, "Database query failed");
            Page::internal_error()
        }
    }
}
