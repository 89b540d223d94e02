use axum::{extract::State, http::header::LOCATION, http::StatusCode, response::IntoResponse};
use stepwise::server::{controller::auth::login, model::session::auth::SessionAuthCsrf};
use stepwise_test_utils::fixtures::steam::STEAM_OPENID_PATH;

use super::*;

#[tokio::test]
/// Expect 307 redirect to Steam's OpenID provider
async fn redirects_to_steam_login() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = login(State(test.app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    let location = resp.headers()[LOCATION].to_str().unwrap();
    assert!(location.starts_with(&format!("{}{}?", test.server_url(), STEAM_OPENID_PATH)));
    assert!(location.contains("openid.mode=checkid_setup"));

    Ok(())
}

#[tokio::test]
/// Expect the CSRF state stored in session to be carried in the return URL
async fn stores_csrf_state_in_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = login(State(test.app_state()), test.session.clone())
        .await
        .unwrap()
        .into_response();

    let state = SessionAuthCsrf::take(&test.session).await.unwrap();
    let location = resp.headers()[LOCATION].to_str().unwrap();
    assert!(!state.is_empty());
    assert!(location.contains(&state));

    Ok(())
}

#[tokio::test]
/// Expect a fresh state for every login attempt
async fn generates_new_state_per_login() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    login(State(test.app_state()), test.session.clone())
        .await
        .unwrap();
    let first = SessionAuthCsrf::take(&test.session).await.unwrap();

    login(State(test.app_state()), test.session.clone())
        .await
        .unwrap();
    let second = SessionAuthCsrf::take(&test.session).await.unwrap();

    assert_ne!(first, second);

    Ok(())
}
