use crate::config::{parse_or, required, string_or, ConfigError, Lookup};

/// HS256 needs at least 32 bytes of key material.
pub const MIN_SECRET_LENGTH: usize = 32;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64, // seconds
}

impl JwtConfig {
    /// Load JWT configuration from the given lookup (normally the environment).
    pub fn from_lookup(lookup: Lookup<'_>) -> Result<Self, ConfigError> {
        let secret_key = required(lookup, "JWT_SECRET")?;
        if secret_key.len() < MIN_SECRET_LENGTH {
            return Err(ConfigError::Constraint(format!(
                "JWT_SECRET must be at least {MIN_SECRET_LENGTH} characters long for HS256"
            )));
        }

        // two weeks
        let access_token_expiry = parse_or(lookup, "JWT_ACCESS_EXPIRY", 1_209_600_i64)?;
        if access_token_expiry <= 0 {
            return Err(ConfigError::Constraint(
                "JWT_ACCESS_EXPIRY must be a positive number of seconds".to_string(),
            ));
        }

        Ok(Self {
            secret_key,
            issuer: string_or(lookup, "JWT_ISSUER", "blogicum"),
            access_token_expiry,
        })
    }
}
