//! Client for Steam's OpenID 2.0 provider and Web API.
//!
//! Sign-in is a fixed three request exchange: redirect the browser to the provider with
//! `checkid_setup`, post the returned assertion back with `check_authentication`, then
//! fetch the player's profile from the Web API. Nothing is retried.

pub mod openid;
pub mod player;

use crate::server::{
    config::{DEFAULT_STEAM_API_URL, DEFAULT_STEAM_OPENID_URL},
    error::steam::SteamError,
};

pub use openid::LoginData;
pub use player::PlayerSummary;

/// Steam OpenID and Web API client.
///
/// Cheap to clone, the underlying HTTP connection pool is shared.
#[derive(Clone, Debug)]
pub struct SteamClient {
    http: reqwest::Client,
    openid_url: reqwest::Url,
    api_url: String,
    api_key: Option<String>,
    realm: String,
    callback_url: String,
}

impl SteamClient {
    /// Creates a builder using Steam's public endpoints.
    pub fn builder() -> SteamClientBuilder {
        SteamClientBuilder::default()
    }

    /// URL Steam redirects the browser back to after sign-in
    pub fn callback_url(&self) -> &str {
        &self.callback_url
    }
}

/// Builder for [`SteamClient`].
pub struct SteamClientBuilder {
    openid_url: String,
    api_url: String,
    api_key: Option<String>,
    app_url: Option<String>,
}

impl Default for SteamClientBuilder {
    fn default() -> Self {
        Self {
            openid_url: DEFAULT_STEAM_OPENID_URL.to_string(),
            api_url: DEFAULT_STEAM_API_URL.to_string(),
            api_key: None,
            app_url: None,
        }
    }
}

impl SteamClientBuilder {
    /// Overrides the OpenID provider endpoint
    pub fn openid_url(mut self, openid_url: impl Into<String>) -> Self {
        self.openid_url = openid_url.into();
        self
    }

    /// Overrides the Web API base URL
    pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Web API key, required to fetch player summaries
    pub fn api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    /// Public base URL of the application, used as the OpenID realm
    pub fn app_url(mut self, app_url: impl Into<String>) -> Self {
        self.app_url = Some(app_url.into());
        self
    }

    /// Builds the client.
    ///
    /// # Returns
    /// - `Ok(SteamClient)` - Client ready for use
    /// - `Err(SteamError::InvalidUrl)` - App URL missing or an endpoint URL failed to parse
    /// - `Err(SteamError::RequestError)` - HTTP client could not be initialized
    pub fn build(self) -> Result<SteamClient, SteamError> {
        let Some(app_url) = self.app_url else {
            return Err(SteamError::InvalidUrl(
                "application URL is required to build the OpenID realm".to_string(),
            ));
        };
        let realm = app_url.trim_end_matches('/').to_string();

        let openid_url = reqwest::Url::parse(&self.openid_url)
            .map_err(|e| SteamError::InvalidUrl(format!("{}: {}", self.openid_url, e)))?;

        let http = reqwest::Client::builder()
            .user_agent(concat!("stepwise/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(SteamClient {
            http,
            openid_url,
            api_url: self.api_url.trim_end_matches('/').to_string(),
            api_key: self.api_key,
            callback_url: format!("{}/api/auth/callback", realm),
            realm,
        })
    }
}
