use crate::modules::auth::application::ports::incoming::password_policy::{
    PasswordPolicy, PasswordPolicyError, MIN_PASSWORD_LENGTH,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct BasicPasswordPolicy;

impl PasswordPolicy for BasicPasswordPolicy {
    fn validate(&self, password: &str) -> Result<(), PasswordPolicyError> {
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort(MIN_PASSWORD_LENGTH));
        }

        if password.chars().all(|c| c.is_ascii_digit()) {
            return Err(PasswordPolicyError::EntirelyNumeric);
        }

        Ok(())
    }
}
