//! Environment-derived server configuration.

use crate::server::error::config::ConfigError;

/// Steam's OpenID 2.0 provider endpoint
pub static DEFAULT_STEAM_OPENID_URL: &str = "https://steamcommunity.com/openid/login";
/// Steam Web API base URL
pub static DEFAULT_STEAM_API_URL: &str = "https://api.steampowered.com";

/// Server configuration loaded once at startup.
pub struct Config {
    /// Postgres connection URL
    pub database_url: String,
    /// Valkey/Redis URL backing the session store
    pub valkey_url: String,
    /// Public base URL of the application, used as the OpenID realm
    pub app_url: String,
    /// Steam Web API key used to fetch player summaries
    pub steam_api_key: Option<String>,
    /// Steam OpenID provider endpoint
    pub steam_openid_url: String,
    /// Steam Web API base URL
    pub steam_api_url: String,
}

impl Config {
    /// Reads the configuration from environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is unset
    /// - `Err(ConfigError::InvalidEnvValue)` - `APP_URL` is not an absolute URL
    pub fn from_env() -> Result<Self, ConfigError> {
        let app_url = required("APP_URL")?;
        if let Err(e) = reqwest::Url::parse(&app_url) {
            return Err(ConfigError::InvalidEnvValue {
                var: "APP_URL".to_string(),
                reason: e.to_string(),
            });
        }

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            app_url: app_url.trim_end_matches('/').to_string(),
            steam_api_key: optional("STEAM_API_KEY"),
            steam_openid_url: optional("STEAM_OPENID_URL")
                .unwrap_or_else(|| DEFAULT_STEAM_OPENID_URL.to_string()),
            steam_api_url: optional("STEAM_API_URL")
                .unwrap_or_else(|| DEFAULT_STEAM_API_URL.to_string()),
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

fn optional(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|value| !value.is_empty())
}
