use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::HttpResponse;

use crate::shared::web::Page;

pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

#[derive(Debug, Clone, Copy)]
pub struct SessionCookieConfig {
    pub max_age_secs: i64,
    pub secure: bool,
}

impl Default for SessionCookieConfig {
    fn default() -> Self {
        Self {
            max_age_secs: 1_209_600,
            secure: false,
        }
    }
}

impl SessionCookieConfig {
    pub fn issue(&self, token: &str) -> Cookie<'static> {
        Cookie::build(ACCESS_TOKEN_COOKIE, token.to_string())
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .max_age(Duration::seconds(self.max_age_secs))
            .finish()
    }

    pub fn clear(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build(ACCESS_TOKEN_COOKIE, "")
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .finish();
        cookie.make_removal();
        cookie
    }
}

pub fn with_cookie(mut response: HttpResponse, cookie: &Cookie<'_>) -> HttpResponse {
    if let Err(e) = response.add_cookie(cookie) {
        tracing::error!(error = %e, "Failed to attach session cookie");
        return Page::internal_error();
    }
    response
}
