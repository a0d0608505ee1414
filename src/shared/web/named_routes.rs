// src/shared/web/named_routes.rs
//! URL builders for the routes other handlers redirect to.

pub const LOGIN_PATH: &str = "/auth/login/";

pub fn index() -> String {
    "/".to_string()
}

pub fn post_detail(post_id: i32) -> String {
    format!("/posts/{post_id}/")
}

pub fn edit_post(post_id: i32) -> String {
    format!("/posts/{post_id}/edit/")
}

pub fn profile(username: &str) -> String {
    format!("/profile/{}/", urlencoding::encode(username))
}

pub fn category_posts(slug: &str) -> String {
    format!("/category/{}/", urlencoding::encode(slug))
}

pub fn login_with_next(next: &str) -> String {
    format!("{LOGIN_PATH}?next={}", urlencoding::encode(next))
}

/// Only same-site absolute paths are accepted as a post-login target.
///
/// Browsers drop tabs and newlines from a `Location` before resolving it, so
/// `/\t/host` ends up as `//host`. Any control character rejects the target.
pub fn safe_next(next: Option<&str>) -> Option<String> {
    let next = next?.trim();
    if next.chars().any(char::is_control) {
        return None;
    }
    let is_local = next.starts_with('/') && !next.starts_with("//") && !next.contains('\\');
    is_local.then(|| next.to_string())
}
