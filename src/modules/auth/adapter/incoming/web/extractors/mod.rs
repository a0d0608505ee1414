pub mod auth;

pub use auth::{resolve_profile_or_response, AuthenticatedUser};
