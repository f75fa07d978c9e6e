use thiserror::Error;

use crate::domain::policy::quota::QuotaConfig;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_PAYMENT_API_URL: &str = "https://api.razorpay.com/v1";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for environment variable {0}")]
    Invalid(&'static str),
}

/// Process configuration, read once at startup and handed to the
/// composition root. Nothing else in the crate touches the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    /// HS256 key for session tokens.
    pub session_secret: String,
    /// Base URL share links are composed against, e.g. `https://app.example.com`.
    pub public_base_url: String,
    pub payment_key_id: String,
    pub payment_key_secret: String,
    pub payment_api_url: String,
    /// Held for the external sign-in collaborator; unused by this service.
    pub google_client_id: Option<String>,
    pub google_client_secret: Option<String>,
    /// Exposed to upload clients so they can talk to the CDN directly.
    pub cdn_public_key: Option<String>,
    pub cors_allowed_origins: Option<Vec<String>>,
    pub quota: QuotaConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = QuotaConfig::default();
        let quota = QuotaConfig {
            free: optional_parsed("QUOTA_FREE_LIMIT")?.unwrap_or(defaults.free),
            paid: optional_parsed("QUOTA_PAID_LIMIT")?.unwrap_or(defaults.paid),
        };

        Ok(Self {
            port: optional_parsed("PORT")?.unwrap_or(DEFAULT_PORT),
            database_url: required("DATABASE_URL")?,
            session_secret: required("SESSION_SECRET")?,
            public_base_url: required("PUBLIC_BASE_URL")?,
            payment_key_id: required("PAYMENT_KEY_ID")?,
            payment_key_secret: required("PAYMENT_KEY_SECRET")?,
            payment_api_url: optional("PAYMENT_API_URL")
                .unwrap_or_else(|| DEFAULT_PAYMENT_API_URL.to_string()),
            google_client_id: optional("GOOGLE_CLIENT_ID"),
            google_client_secret: optional("GOOGLE_CLIENT_SECRET"),
            cdn_public_key: optional("CDN_PUBLIC_KEY"),
            cors_allowed_origins: optional("CORS_ALLOWED_ORIGINS")
                .map(|value| value.split(',').map(|s| s.trim().to_string()).collect()),
            quota,
        })
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::Missing(name))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn optional_parsed<T: std::str::FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.parse::<T>().map(Some).map_err(|_| ConfigError::Invalid(name)),
        Err(_) => Ok(None),
    }
}
