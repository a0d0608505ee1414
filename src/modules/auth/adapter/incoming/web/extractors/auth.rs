use std::{
    future::{ready, Ready},
    sync::Arc,
};

use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};

use crate::modules::auth::adapter::incoming::web::session_cookie::ACCESS_TOKEN_COOKIE;
use crate::modules::auth::application::domain::entities::{UserId, UserProfile};
use crate::modules::auth::application::ports::incoming::use_cases::FetchProfileError;
use crate::modules::auth::application::ports::outgoing::token_provider::{
    TokenProvider, ACCESS_TOKEN_TYPE,
};
use crate::shared::web::{named_routes, Page};
use crate::AppState;

/// The logged-in user behind the request.
///
/// Extracting it directly makes a route login-required: anonymous requests are
/// redirected to the login page with `next` pointing back. Use
/// `Option<AuthenticatedUser>` where anonymous visitors are allowed.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub username: String,
}

fn create_page_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn login_redirect(req: &HttpRequest) -> ActixError {
    let next = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| req.path().to_string());
    create_page_error(Page::redirect(named_routes::login_with_next(&next)))
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider =
            match req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>() {
                Some(provider) => provider,
                None => {
                    tracing::error!("TokenProvider is not registered as app data");
                    return ready(Err(create_page_error(Page::internal_error())));
                }
            };

        let Some(token) = extract_token(req) else {
            return ready(Err(login_redirect(req)));
        };

        match token_provider.verify_token(&token) {
            Ok(claims) if claims.token_type == ACCESS_TOKEN_TYPE => ready(Ok(AuthenticatedUser {
                user_id: UserId::from(claims.sub),
                username: claims.username,
            })),
            Ok(claims) => {
                tracing::warn!(token_type = %claims.token_type, "Rejected non-access token");
                ready(Err(login_redirect(req)))
            }
            Err(e) => {
                tracing::debug!(error = %e, "Session token rejected");
                ready(Err(login_redirect(req)))
            }
        }
    }
}

/// Cookie first, then `Authorization: Bearer`.
fn extract_token(req: &HttpRequest) -> Option<String> {
    if let Some(cookie) = req.cookie(ACCESS_TOKEN_COOKIE) {
        if !cookie.value().is_empty() {
            return Some(cookie.value().to_string());
        }
    }

    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

pub async fn resolve_profile_or_response(
    data: &web::Data<AppState>,
    username: &str,
) -> Result<UserProfile, HttpResponse> {
    match data.auth.fetch_profile.by_username(username).await {
        Ok(profile) => Ok(profile),

        Err(FetchProfileError::NotFound) => {
            Err(Page::not_found("USER_NOT_FOUND", "User not found"))
        }

        Err(FetchProfileError::RepositoryError(msg)) => {
            tracing::error!("Repository error resolving username {}: {}", username, msg);
            Err(Page::internal_error())
        }
    }
}
