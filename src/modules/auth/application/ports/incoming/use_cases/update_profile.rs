use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::modules::auth::application::domain::entities::{UserId, UserProfile};
use crate::modules::auth::application::domain::policies::{
    check_email, check_username, NAME_MAX_LENGTH,
};
use crate::modules::auth::application::ports::outgoing::UpdateProfileData;
use crate::shared::forms::{check_max_length, clean_required, FormErrors};

//
// ──────────────────────────────────────────────────────────
// Form
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ProfileForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

impl From<&UserProfile> for ProfileForm {
    fn from(profile: &UserProfile) -> Self {
        Self {
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            username: profile.username.clone(),
            email: profile.email.clone(),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    user_id: UserId,
    data: UpdateProfileData,
}

impl UpdateProfileCommand {
    pub fn new(user_id: UserId, form: &ProfileForm) -> Result<Self, FormErrors> {
        let mut errors = FormErrors::new();

        let username = clean_required(&mut errors, "username", &form.username);
        check_username(&mut errors, "username", &username);

        let email = form.email.trim().to_string();
        check_email(&mut errors, "email", &email);

        let first_name = form.first_name.trim().to_string();
        check_max_length(&mut errors, "first_name", &first_name, NAME_MAX_LENGTH);
        let last_name = form.last_name.trim().to_string();
        check_max_length(&mut errors, "last_name", &last_name, NAME_MAX_LENGTH);

        errors.into_result(Self {
            user_id,
            data: UpdateProfileData {
                username,
                email,
                first_name,
                last_name,
            },
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn data(&self) -> &UpdateProfileData {
        &self.data
    }

    pub fn into_data(self) -> UpdateProfileData {
        self.data
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors & Output
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("Invalid profile data: {0}")]
    Invalid(FormErrors),

    #[error("User not found")]
    NotFound,

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// The token is re-issued because it carries the username.
#[derive(Debug, Clone)]
pub struct UpdateProfileOutput {
    pub profile: UserProfile,
    pub access_token: String,
}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpdateProfileCommand,
    ) -> Result<UpdateProfileOutput, UpdateProfileError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn form() -> ProfileForm {
        ProfileForm {
            first_name: " Anna ".to_string(),
            last_name: "Petrova".to_string(),
            username: "anna".to_string(),
            email: "anna@example.com".to_string(),
        }
    }

    #[test]
    fn valid_form_is_trimmed() {
        let command = UpdateProfileCommand::new(UserId::from(Uuid::new_v4()), &form()).unwrap();

        assert_eq!(command.data().first_name, "Anna");
        assert_eq!(command.data().email, "anna@example.com");
    }

    #[test]
    fn username_is_required_email_is_optional() {
        let errors = UpdateProfileCommand::new(
            UserId::from(Uuid::new_v4()),
            &ProfileForm {
                username: " ".to_string(),
                email: String::new(),
                ..form()
            },
        )
        .unwrap_err();

        assert!(errors.has("username"));
        assert!(!errors.has("email"));
    }

    #[test]
    fn invalid_email_is_reported() {
        let errors = UpdateProfileCommand::new(
            UserId::from(Uuid::new_v4()),
            &ProfileForm {
                email: "nope".to_string(),
                ..form()
            },
        )
        .unwrap_err();

        assert!(errors.has("email"));
    }
}
