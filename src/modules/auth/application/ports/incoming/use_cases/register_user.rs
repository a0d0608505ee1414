use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::modules::auth::application::domain::entities::UserProfile;
use crate::modules::auth::application::domain::policies::check_username;
use crate::modules::auth::application::ports::incoming::password_policy::PasswordPolicy;
use crate::shared::forms::{clean_required, FormErrors, REQUIRED_MESSAGE};

pub const PASSWORD_MISMATCH_MESSAGE: &str = "The two password fields didn't match.";

//
// ──────────────────────────────────────────────────────────
// Form
// ──────────────────────────────────────────────────────────
//

/// Raw registration fields. Passwords are never echoed back to the template.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RegistrationForm {
    #[serde(default)]
    pub username: String,
    #[serde(default, skip_serializing)]
    pub password1: String,
    #[serde(default, skip_serializing)]
    pub password2: String,
}

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    username: String,
    password: String,
}

impl RegisterUserCommand {
    pub fn new(form: &RegistrationForm, policy: &dyn PasswordPolicy) -> Result<Self, FormErrors> {
        let mut errors = FormErrors::new();

        let username = clean_required(&mut errors, "username", &form.username);
        check_username(&mut errors, "username", &username);

        if form.password1.is_empty() {
            errors.add("password1", REQUIRED_MESSAGE);
        }
        if form.password2.is_empty() {
            errors.add("password2", REQUIRED_MESSAGE);
        }

        if !form.password1.is_empty() && !form.password2.is_empty() {
            if form.password1 != form.password2 {
                errors.add("password2", PASSWORD_MISMATCH_MESSAGE);
            } else if let Err(e) = policy.validate(&form.password2) {
                errors.add("password2", e.to_string());
            }
        }

        errors.into_result(Self {
            username,
            password: form.password1.clone(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Invalid registration data: {0}")]
    Invalid(FormErrors),

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    /// Validates the form, then creates the account.
    async fn execute(&self, form: RegistrationForm) -> Result<UserProfile, RegisterUserError>;
}
