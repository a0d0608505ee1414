use std::sync::LazyLock;

use regex::Regex;

use crate::shared::forms::{check_max_length, FormErrors};

pub const USERNAME_MAX_LENGTH: usize = 150;
pub const NAME_MAX_LENGTH: usize = 150;
pub const EMAIL_MAX_LENGTH: usize = 254;

pub const INVALID_USERNAME_MESSAGE: &str =
    "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.";
pub const USERNAME_TAKEN_MESSAGE: &str = "A user with that username already exists.";
pub const INVALID_EMAIL_MESSAGE: &str = "Enter a valid email address.";

static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.@+-]+$").expect("valid username regex"));

/// Records length and character-set violations for an already trimmed, non-empty username.
pub fn check_username(errors: &mut FormErrors, field: &str, username: &str) {
    if username.is_empty() {
        return;
    }
    check_max_length(errors, field, username, USERNAME_MAX_LENGTH);
    if !USERNAME_RE.is_match(username) {
        errors.add(field, INVALID_USERNAME_MESSAGE);
    }
}

/// Empty email is allowed.
pub fn check_email(errors: &mut FormErrors, field: &str, email: &str) {
    if email.is_empty() {
        return;
    }
    check_max_length(errors, field, email, EMAIL_MAX_LENGTH);
    if !email_address::EmailAddress::is_valid(email) {
        errors.add(field, INVALID_EMAIL_MESSAGE);
    }
}
