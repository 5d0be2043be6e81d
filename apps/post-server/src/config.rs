//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use post_infra::database::DatabaseConfig;

/// Configuration errors - all of them abort startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}

/// Certificate chain and private key locations, both PEM.
#[derive(Debug, Clone)]
pub struct TlsConfig {
    pub cert_path: PathBuf,
    pub key_path: PathBuf,
}

/// Shared-secret settings for the bearer-token guard.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub issuer: String,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub tls: Option<TlsConfig>,
    pub auth: Option<AuthConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database = match lookup("DATABASE_URL").filter(|url| !url.is_empty()) {
            Some(url) => Some(DatabaseConfig {
                url,
                max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 20)?,
                min_connections: parse_or(&lookup, "DB_MIN_CONNECTIONS", 2)?,
            }),
            None => None,
        };

        let tls = flag(&lookup, "TLS_ENABLED").then(|| TlsConfig {
            cert_path: lookup("TLS_CERT_PATH")
                .unwrap_or_else(|| "certs/server.crt".to_string())
                .into(),
            key_path: lookup("TLS_KEY_PATH")
                .unwrap_or_else(|| "certs/server.key".to_string())
                .into(),
        });

        let auth = lookup("AUTH_JWT_SECRET")
            .filter(|secret| !secret.is_empty())
            .map(|jwt_secret| AuthConfig {
                jwt_secret,
                issuer: lookup("AUTH_JWT_ISSUER").unwrap_or_else(|| "post-service".to_string()),
            });

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "PORT", 8080)?,
            database,
            tls,
            auth,
        })
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { var, value }),
        None => Ok(default),
    }
}

fn flag<F>(lookup: &F, var: &str) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}
