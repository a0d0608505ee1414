use actix_web::{post, web, Responder};
use tracing::info;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::auth::adapter::incoming::web::session_cookie::with_cookie;
use crate::shared::web::{EmptyContext, Page};
use crate::AppState;

pub const LOGGED_OUT_TEMPLATE: &str = "registration/logged_out.html";

/// Stateless tokens: logging out only drops the cookie.
#[post("/auth/logout/")]
pub async fn logout_handler(
    user: Option<AuthenticatedUser>,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Some(user) = user {
        info!(user_id = %user.user_id, "User logged out");
    }

    with_cookie(
        Page::render(LOGGED_OUT_TEMPLATE, EmptyContext::default()),
        &data.session_cookie.clear(),
    )
}
