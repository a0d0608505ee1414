use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::modules::auth::application::domain::entities::UserProfile;
use crate::shared::forms::{clean_required, FormErrors, REQUIRED_MESSAGE};

pub const INVALID_LOGIN_MESSAGE: &str =
    "Please enter a correct username and password. Note that both fields may be case-sensitive.";

// ========================= Login Form =========================

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default, skip_serializing)]
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

/// Validated credentials. Only presence is checked here.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    username: String,
    password: String,
}

impl LoginCommand {
    pub fn new(form: &LoginForm) -> Result<Self, FormErrors> {
        let mut errors = FormErrors::new();
        let username = clean_required(&mut errors, "username", &form.username);
        if form.password.is_empty() {
            errors.add("password", REQUIRED_MESSAGE);
        }

        errors.into_result(Self {
            username,
            password: form.password.clone(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ====================== Login Error =============================

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

// ============================ Login Output =================================

#[derive(Debug, Clone)]
pub struct LoginOutput {
    pub access_token: String,
    pub user: UserProfile,
}

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(&self, command: LoginCommand) -> Result<LoginOutput, LoginError>;
}
