//! Process Configuration
//!
//! Every setting has a built-in default so the server starts with an empty
//! environment. Parsing goes through a lookup closure; `from_env` is the
//! only place that touches the process environment.

use std::path::PathBuf;

use auth::AuthConfig;
use auth::application::config::{DEFAULT_JWT_SECRET, DEFAULT_TOKEN_TTL};
use content::ContentConfig;
use custom_domain::DomainConfig;
use media::UploadConfig;
use platform::database::DatabaseConfig;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:5173";
pub const DEFAULT_UPLOAD_DIR: &str = "./uploads";
pub const DEFAULT_VERIFICATION_LABEL: &str = "_dyeink-verification";
pub const DEFAULT_LOG_FILTER: &str =
    "api=info,auth=info,content=info,custom_domain=info,media=info,tower_http=info";

/// Immutable settings, loaded once at startup
#[derive(Debug, Clone)]
pub struct Settings {
    pub port: u16,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub upload_dir: PathBuf,
    pub allowed_origins: Vec<String>,
    pub verification_label: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from `lookup(name)`; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut database = DatabaseConfig::default();
        if let Some(url) = get("DATABASE_URL") {
            database.url = url;
        }
        if let Some(name) = get("DATABASE_NAME") {
            database.name = name;
        }
        database.min_connections = parse_or(get("DATABASE_MIN_CONNECTIONS"), database.min_connections);
        database.max_connections = parse_or(get("DATABASE_MAX_CONNECTIONS"), database.max_connections);

        let expiry_hours = parse_or(get("JWT_EXPIRY_HOURS"), DEFAULT_TOKEN_TTL.as_secs() / 3600);
        let auth = AuthConfig::new(
            get("JWT_SECRET").unwrap_or_else(|| DEFAULT_JWT_SECRET.to_string()),
            expiry_hours,
        );

        Self {
            port: parse_or(get("PORT"), DEFAULT_PORT),
            database,
            auth,
            upload_dir: PathBuf::from(
                get("UPLOAD_DIR").unwrap_or_else(|| DEFAULT_UPLOAD_DIR.to_string()),
            ),
            allowed_origins: split_origins(
                &get("ALLOWED_ORIGINS").unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string()),
            ),
            verification_label: get("DNS_VERIFICATION_LABEL")
                .unwrap_or_else(|| DEFAULT_VERIFICATION_LABEL.to_string()),
        }
    }

    pub fn content_config(&self) -> ContentConfig {
        ContentConfig::default()
    }

    pub fn domain_config(&self) -> DomainConfig {
        DomainConfig {
            verification_label: self.verification_label.clone(),
        }
    }

    pub fn upload_config(&self) -> UploadConfig {
        UploadConfig::new(self.upload_dir.clone())
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
