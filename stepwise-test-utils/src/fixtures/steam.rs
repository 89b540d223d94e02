//! Mocked Steam OpenID provider and Web API endpoints.

use std::collections::HashMap;

use mockito::{Matcher, Mock};

use crate::{
    constant::{TEST_APP_URL, TEST_PLAYER_AVATAR, TEST_PLAYER_NAME, TEST_STEAM_API_KEY},
    TestContext,
};

/// Path the test Steam client posts `check_authentication` requests to
pub static STEAM_OPENID_PATH: &str = "/openid/login";

/// Path of the Web API player summary endpoint
pub static STEAM_PLAYER_SUMMARIES_PATH: &str = "/ISteamUser/GetPlayerSummaries/v0002/";

/// Query parameters Steam appends when redirecting a signed in user back to the callback
///
/// `state` is the CSRF state carried through `openid.return_to`.
pub fn assertion_params(steam_id: &str, state: &str) -> HashMap<String, String> {
    let claimed_id = format!("https://steamcommunity.com/openid/id/{}", steam_id);
    let return_to = format!("{}/api/auth/callback?state={}", TEST_APP_URL, state);

    [
        ("state", state),
        ("openid.ns", "http://specs.openid.net/auth/2.0"),
        ("openid.mode", "id_res"),
        ("openid.op_endpoint", "https://steamcommunity.com/openid/login"),
        ("openid.claimed_id", claimed_id.as_str()),
        ("openid.identity", claimed_id.as_str()),
        ("openid.return_to", return_to.as_str()),
        ("openid.response_nonce", "2025-11-01T00:00:00Zabc"),
        ("openid.assoc_handle", "1234567890"),
        (
            "openid.signed",
            "signed,op_endpoint,claimed_id,identity,return_to,response_nonce,assoc_handle",
        ),
        ("openid.sig", "signature="),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

impl TestContext {
    pub fn steam<'a>(&'a mut self) -> SteamFixtures<'a> {
        SteamFixtures { test: self }
    }
}

pub struct SteamFixtures<'a> {
    test: &'a mut TestContext,
}

impl<'a> SteamFixtures<'a> {
    /// Creates the OpenID `check_authentication` endpoint.
    ///
    /// Responds in key-value form with `is_valid` set to the given value.
    pub fn create_verify_endpoint(&mut self, is_valid: bool, expected_requests: usize) -> Mock {
        let body = format!(
            "ns:http://specs.openid.net/auth/2.0\nis_valid:{}\n",
            is_valid
        );

        self.test
            .server
            .mock("POST", STEAM_OPENID_PATH)
            .match_body(Matcher::UrlEncoded(
                "openid.mode".to_string(),
                "check_authentication".to_string(),
            ))
            .with_status(200)
            .with_header("content-type", "text/plain")
            .with_body(body)
            .expect(expected_requests)
            .create()
    }

    /// Creates the `GetPlayerSummaries` endpoint returning the test persona for `steam_id`.
    pub fn create_player_summary_endpoint(
        &mut self,
        steam_id: &str,
        expected_requests: usize,
    ) -> Mock {
        let body = serde_json::json!({
            "response": {
                "players": [{
                    "steamid": steam_id,
                    "personaname": TEST_PLAYER_NAME,
                    "profileurl": format!("https://steamcommunity.com/profiles/{}/", steam_id),
                    "avatarfull": TEST_PLAYER_AVATAR
                }]
            }
        });

        self.test
            .server
            .mock("GET", STEAM_PLAYER_SUMMARIES_PATH)
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("key".to_string(), TEST_STEAM_API_KEY.to_string()),
                Matcher::UrlEncoded("steamids".to_string(), steam_id.to_string()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }
}
