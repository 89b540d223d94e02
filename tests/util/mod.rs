//! Helpers shared by the integration tests.

use axum::{
    body::{to_bytes, Body},
    extract::{rejection::JsonRejection, FromRequest},
    http::{header::CONTENT_TYPE, Request},
    response::Response,
    Json,
};
use serde::de::DeserializeOwned;
use stepwise::server::{
    model::{app::AppState, session::user::SessionUserId},
    steam::SteamClient,
};
use stepwise_test_utils::{
    constant::{TEST_APP_URL, TEST_STEAM_API_KEY},
    fixtures::steam::STEAM_OPENID_PATH,
    TestContext,
};

/// Builds application types around a [`TestContext`].
pub trait TestContextExt {
    /// Steam client pointed at the context's mock server
    fn steam_client(&self) -> SteamClient;

    fn app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn steam_client(&self) -> SteamClient {
        let server_url = self.server_url();

        SteamClient::builder()
            .openid_url(format!("{}{}", server_url, STEAM_OPENID_PATH))
            .api_url(server_url)
            .api_key(Some(TEST_STEAM_API_KEY.to_string()))
            .app_url(TEST_APP_URL)
            .build()
            .unwrap()
    }

    fn app_state(&self) -> AppState {
        AppState {
            db: self.db.clone(),
            steam_client: self.steam_client(),
        }
    }
}

/// Stores `user_id` in the context's session as if the user had signed in
pub async fn sign_in(test: &TestContext, user_id: i32) {
    SessionUserId::insert(&test.session, user_id).await.unwrap();
}

/// Reads a JSON response body
pub async fn json_body<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}

/// Runs the JSON extractor over `body` and returns its rejection
pub async fn json_rejection<T: DeserializeOwned + std::fmt::Debug>(body: &str) -> JsonRejection {
    let request = Request::builder()
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    Json::<T>::from_request(request, &()).await.unwrap_err()
}
