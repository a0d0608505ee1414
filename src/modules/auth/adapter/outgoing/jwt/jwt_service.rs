use std::fmt;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider, ACCESS_TOKEN_TYPE,
};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn generate_token(
        &self,
        user_id: UserId,
        username: &str,
        token_type: &str,
        expiry_seconds: i64,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(expiry_seconds);

        let claims = TokenClaims {
            sub: user_id.value(),
            username: username.to_string(),
            iss: self.config.issuer.clone(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            token_type: token_type.to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_access_token(
        &self,
        user_id: UserId,
        username: &str,
    ) -> Result<String, TokenError> {
        self.generate_token(
            user_id,
            username,
            ACCESS_TOKEN_TYPE,
            self.config.access_token_expiry,
        )
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;
        validation.set_issuer(&[self.config.issuer.as_str()]);

        let decoded =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: Token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Token verification failed: Token not yet valid");
                        TokenError::TokenNotYetValid
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: Invalid token signature detected");
                        TokenError::InvalidSignature
                    }
                    ErrorKind::InvalidIssuer => {
                        tracing::warn!("Token verification failed: Foreign issuer");
                        TokenError::InvalidSignature
                    }
                    _ => {
                        tracing::warn!("Token verification failed: Malformed token");
                        TokenError::MalformedToken
                    }
                }
            })?;

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn config(expiry: i64) -> JwtConfig {
        JwtConfig {
            secret_key: std::env::var("TEST_JWT_SECRET")
                .unwrap_or_else(|_| "test_secret_key_for_testing_purposes_only".to_string()),
            issuer: "blogicum-test".to_string(),
            access_token_expiry: expiry,
        }
    }

    fn service() -> JwtTokenService {
        JwtTokenService::new(config(3600))
    }

    #[test]
    fn test_generate_and_verify_access_token() {
        let service = service();
        let user_id = UserId::from(Uuid::new_v4());

        let token = service
            .generate_access_token(user_id, "anna")
            .expect("Token should be generated");
        let claims = service.verify_token(&token).expect("Token should be valid");

        assert_eq!(claims.sub, user_id.value());
        assert_eq!(claims.username, "anna");
        assert_eq!(claims.token_type, ACCESS_TOKEN_TYPE);
        assert_eq!(claims.iss, "blogicum-test");
    }

    #[test]
    fn test_invalid_token_verification() {
        let result = service().verify_token("invalid.jwt.token");

        assert_eq!(result.unwrap_err(), TokenError::MalformedToken);
    }

    #[test]
    fn test_expired_token() {
        // beyond the 30s leeway
        let expired = JwtTokenService::new(config(-35));
        let token = expired
            .generate_access_token(UserId::from(Uuid::new_v4()), "anna")
            .unwrap();

        assert_eq!(
            expired.verify_token(&token).unwrap_err(),
            TokenError::TokenExpired
        );
    }

    #[test]
    fn test_token_signed_with_other_secret() {
        let other = JwtTokenService::new(JwtConfig {
            secret_key: "another_secret_key_that_is_long_enough!!".to_string(),
            ..config(3600)
        });
        let token = other
            .generate_access_token(UserId::from(Uuid::new_v4()), "anna")
            .unwrap();

        assert_eq!(
            service().verify_token(&token).unwrap_err(),
            TokenError::InvalidSignature
        );
    }

    #[test]
    fn test_token_from_other_issuer_is_rejected() {
        let other = JwtTokenService::new(JwtConfig {
            issuer: "someone-else".to_string(),
            ..config(3600)
        });
        let token = other
            .generate_access_token(UserId::from(Uuid::new_v4()), "anna")
            .unwrap();

        assert!(service().verify_token(&token).is_err());
    }
}
