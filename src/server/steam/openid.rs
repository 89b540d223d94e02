//! OpenID 2.0 sign-in against Steam.

use std::collections::HashMap;

use crate::server::{error::steam::SteamError, steam::SteamClient};

pub const OPENID_NS: &str = "http://specs.openid.net/auth/2.0";
pub const OPENID_IDENTIFIER_SELECT: &str = "http://specs.openid.net/auth/2.0/identifier_select";
/// Prefix of every claimed ID Steam issues, followed by the 64-bit SteamID
pub const STEAM_CLAIMED_ID_PREFIX: &str = "https://steamcommunity.com/openid/id/";

/// Where to send the browser to sign in, and the state that must come back with it
#[derive(Debug, Clone)]
pub struct LoginData {
    pub login_url: String,
    pub state: String,
}

impl SteamClient {
    /// Builds the `checkid_setup` URL for a sign-in carrying `state`.
    ///
    /// The state is placed on the `return_to` URL, Steam preserves it when redirecting back.
    pub fn login_url(&self, state: &str) -> Result<LoginData, SteamError> {
        let return_to = reqwest::Url::parse_with_params(self.callback_url(), &[("state", state)])
            .map_err(|e| SteamError::InvalidUrl(format!("{}: {}", self.callback_url(), e)))?;

        let mut login_url = self.openid_url.clone();
        login_url
            .query_pairs_mut()
            .append_pair("openid.ns", OPENID_NS)
            .append_pair("openid.mode", "checkid_setup")
            .append_pair("openid.return_to", return_to.as_str())
            .append_pair("openid.realm", &self.realm)
            .append_pair("openid.identity", OPENID_IDENTIFIER_SELECT)
            .append_pair("openid.claimed_id", OPENID_IDENTIFIER_SELECT);

        Ok(LoginData {
            login_url: login_url.to_string(),
            state: state.to_string(),
        })
    }

    /// Verifies the assertion Steam redirected back with and returns the signed in SteamID.
    ///
    /// Posts the signed fields back to the provider with `check_authentication`. Only a
    /// response containing `is_valid:true` is accepted.
    ///
    /// # Arguments
    /// - `params` - Every query parameter of the callback request
    ///
    /// # Returns
    /// - `Ok(String)` - The 64-bit SteamID from `openid.claimed_id`
    /// - `Err(SteamError::AssertionRejected)` - Steam did not confirm the signature
    /// - `Err(SteamError::InvalidClaimedId)` - Claimed ID is not a Steam community identity
    /// - `Err(SteamError::RequestError)` - The provider could not be reached
    pub async fn verify_assertion(
        &self,
        params: &HashMap<String, String>,
    ) -> Result<String, SteamError> {
        let form = check_authentication_params(params);

        let body = self
            .http
            .post(self.openid_url.clone())
            .header("Accept-Language", "en")
            .form(&form)
            .send()
            .await?
            .text()
            .await?;

        if !is_valid_assertion(&body) {
            return Err(SteamError::AssertionRejected);
        }

        let claimed_id = params
            .get("openid.claimed_id")
            .map(String::as_str)
            .unwrap_or_default();

        parse_claimed_id(claimed_id)
    }
}

/// Builds the `check_authentication` form from the callback parameters.
///
/// Echoes the association handle, signature, and every field listed in `openid.signed`.
pub fn check_authentication_params(params: &HashMap<String, String>) -> Vec<(String, String)> {
    let get = |key: &str| params.get(key).cloned().unwrap_or_default();

    let mut form = vec![
        ("openid.assoc_handle".to_string(), get("openid.assoc_handle")),
        ("openid.signed".to_string(), get("openid.signed")),
        ("openid.sig".to_string(), get("openid.sig")),
        ("openid.ns".to_string(), OPENID_NS.to_string()),
        ("openid.mode".to_string(), "check_authentication".to_string()),
    ];

    let signed = get("openid.signed");
    for field in signed.split(',').filter(|field| !field.is_empty()) {
        let key = format!("openid.{}", field);
        if form.iter().any(|(existing, _)| *existing == key) {
            continue;
        }
        let value = get(&key);
        form.push((key, value));
    }

    form
}

/// Whether a `check_authentication` response confirms the assertion.
///
/// The body is OpenID key-value form, one `key:value` pair per line.
pub fn is_valid_assertion(body: &str) -> bool {
    body.lines().any(|line| {
        line.split_once(':').is_some_and(|(key, value)| {
            key.trim().eq_ignore_ascii_case("is_valid") && value.trim().eq_ignore_ascii_case("true")
        })
    })
}

/// Extracts the SteamID from a claimed ID such as
/// `https://steamcommunity.com/openid/id/76561197960287930`.
pub fn parse_claimed_id(claimed_id: &str) -> Result<String, SteamError> {
    let steam_id = claimed_id
        .strip_prefix(STEAM_CLAIMED_ID_PREFIX)
        .filter(|id| (17..=25).contains(&id.len()) && id.bytes().all(|b| b.is_ascii_digit()));

    match steam_id {
        Some(steam_id) => Ok(steam_id.to_string()),
        None => Err(SteamError::InvalidClaimedId(claimed_id.to_string())),
    }
}
