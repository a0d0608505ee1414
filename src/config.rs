// src/config.rs
use std::path::PathBuf;
use std::str::FromStr;

use crate::modules::auth::adapter::outgoing::jwt::JwtConfig;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {value:?}")]
    Invalid { key: &'static str, value: String },

    #[error("{0}")]
    Constraint(String),
}

/// Source of configuration values, usually the process environment.
pub type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

pub fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Loads `.env.{RUST_ENV}` when it exists, otherwise `.env`.
pub fn load_env_files() {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

//
// ──────────────────────────────────────────────────────────
// Value helpers
// ──────────────────────────────────────────────────────────
//

pub fn required(lookup: Lookup<'_>, key: &'static str) -> Result<String, ConfigError> {
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(key)),
    }
}

pub fn string_or(lookup: Lookup<'_>, key: &str, default: &str) -> String {
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

pub fn parse_or<T: FromStr>(
    lookup: Lookup<'_>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

pub fn flag_or(lookup: Lookup<'_>, key: &'static str, default: bool) -> Result<bool, ConfigError> {
    match lookup(key).map(|v| v.trim().to_ascii_lowercase()) {
        None => Ok(default),
        Some(v) if v.is_empty() => Ok(default),
        Some(v) => match v.as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::Invalid { key, value: v }),
        },
    }
}

//
// ──────────────────────────────────────────────────────────
// Application config
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub run_migrations: bool,
}

#[derive(Debug, Clone)]
pub struct MediaConfig {
    pub root: PathBuf,
    /// URL prefix without a trailing slash, e.g. `/media`.
    pub url: String,
    pub serve: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct Argon2Config {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub media: MediaConfig,
    pub jwt: JwtConfig,
    pub argon2: Argon2Config,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&env_lookup)
    }

    pub fn from_lookup(lookup: Lookup<'_>) -> Result<Self, ConfigError> {
        let environment = string_or(lookup, "RUST_ENV", "development");

        let server = ServerConfig {
            host: string_or(lookup, "HOST", "127.0.0.1"),
            port: parse_or(lookup, "PORT", 8000)?,
        };

        let database = DatabaseConfig {
            url: required(lookup, "DATABASE_URL")?,
            max_connections: parse_or(lookup, "DB_MAX_CONNECTIONS", 20)?,
            min_connections: parse_or(lookup, "DB_MIN_CONNECTIONS", 2)?,
            run_migrations: flag_or(lookup, "RUN_MIGRATIONS", true)?,
        };
        if database.min_connections > database.max_connections {
            return Err(ConfigError::Constraint(
                "DB_MIN_CONNECTIONS must not exceed DB_MAX_CONNECTIONS".to_string(),
            ));
        }

        let media_url = string_or(lookup, "MEDIA_URL", "/media");
        let media = MediaConfig {
            root: PathBuf::from(string_or(lookup, "MEDIA_ROOT", "media")),
            url: format!("/{}", media_url.trim_matches('/')),
            serve: flag_or(lookup, "SERVE_MEDIA", environment != "production")?,
        };

        let argon2 = Argon2Config {
            memory_kib: parse_or(lookup, "ARGON2_MEMORY_KIB", 4 * 1024)?,
            iterations: parse_or(lookup, "ARGON2_ITERATIONS", 3)?,
            parallelism: parse_or(lookup, "ARGON2_PARALLELISM", 1)?,
        };

        Ok(Self {
            jwt: JwtConfig::from_lookup(lookup)?,
            environment,
            server,
            database,
            media,
            argon2,
        })
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.server.host.clone(), self.server.port)
    }
}
