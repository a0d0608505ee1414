pub const MIN_PASSWORD_LENGTH: usize = 8;

pub trait PasswordPolicy: Send + Sync {
    fn validate(&self, password: &str) -> Result<(), PasswordPolicyError>;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PasswordPolicyError {
    #[error("This password is too short. It must contain at least {0} characters.")]
    TooShort(usize),

    #[error("This password is entirely numeric.")]
    EntirelyNumeric,
}
