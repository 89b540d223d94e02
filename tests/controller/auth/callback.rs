use axum::{
    extract::{Query, State},
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter};
use stepwise::server::{
    controller::auth::callback,
    model::session::{auth::SessionAuthCsrf, user::SessionUserId},
};
use stepwise_test_utils::fixtures::steam::{assertion_params, STEAM_PLAYER_SUMMARIES_PATH};

use super::*;

static CSRF_STATE: &str = "csrf_state";

async fn find_user(
    test: &TestContext,
    steam_id: &str,
) -> Result<Option<entity::stepwise_user::Model>, DbErr> {
    entity::prelude::StepwiseUser::find()
        .filter(entity::stepwise_user::Column::SteamId.eq(steam_id))
        .one(&test.db)
        .await
}

#[tokio::test]
/// Expect 307 redirect to the build order list with the new user stored in session
async fn signs_in_new_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_build_order_tables()
        .with_steam_verify_endpoint(true, 1)
        .with_player_summary_endpoint(TEST_STEAM_ID, 1)
        .build()
        .await?;
    SessionAuthCsrf::insert(&test.session, CSRF_STATE).await.unwrap();

    let params = assertion_params(TEST_STEAM_ID, CSRF_STATE);
    let result = callback(State(test.app_state()), test.session.clone(), Query(params)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers()[LOCATION], "/build-orders");

    let user = find_user(&test, TEST_STEAM_ID).await?.unwrap();
    assert_eq!(user.name.as_deref(), Some(TEST_PLAYER_NAME));

    let session_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert_eq!(session_user_id, Some(user.id));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request without contacting Steam when the state does not match
async fn rejects_csrf_mismatch() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_build_order_tables()
        .with_steam_verify_endpoint(true, 0)
        .build()
        .await?;
    SessionAuthCsrf::insert(&test.session, CSRF_STATE).await.unwrap();

    let params = assertion_params(TEST_STEAM_ID, "other_state");
    let result = callback(State(test.app_state()), test.session.clone(), Query(params)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request when Steam does not return a state parameter
async fn rejects_missing_state_param() -> Result<(), TestError> {
    let test = TestBuilder::new().with_build_order_tables().build().await?;
    SessionAuthCsrf::insert(&test.session, CSRF_STATE).await.unwrap();

    let mut params = assertion_params(TEST_STEAM_ID, CSRF_STATE);
    params.remove("state");
    let result = callback(State(test.app_state()), test.session.clone(), Query(params)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 500 internal server error when the session holds no login attempt
async fn fails_without_csrf_state_in_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_build_order_tables().build().await?;

    let params = assertion_params(TEST_STEAM_ID, CSRF_STATE);
    let result = callback(State(test.app_state()), test.session.clone(), Query(params)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request and no stored user when Steam answers is_valid:false
async fn rejects_invalid_assertion() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_build_order_tables()
        .with_steam_verify_endpoint(false, 1)
        .with_player_summary_endpoint(TEST_STEAM_ID, 0)
        .build()
        .await?;
    SessionAuthCsrf::insert(&test.session, CSRF_STATE).await.unwrap();

    let params = assertion_params(TEST_STEAM_ID, CSRF_STATE);
    let result = callback(State(test.app_state()), test.session.clone(), Query(params)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let user = find_user(&test, TEST_STEAM_ID).await?;
    assert!(user.is_none());
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 500 internal server error when the Steam Web API fails
async fn fails_when_player_summary_errors() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_build_order_tables()
        .with_steam_verify_endpoint(true, 1)
        .with_mock_endpoint(|server| {
            server
                .mock("GET", STEAM_PLAYER_SUMMARIES_PATH)
                .match_query(mockito::Matcher::Any)
                .with_status(500)
                .create()
        })
        .build()
        .await?;
    SessionAuthCsrf::insert(&test.session, CSRF_STATE).await.unwrap();

    let params = assertion_params(TEST_STEAM_ID, CSRF_STATE);
    let result = callback(State(test.app_state()), test.session.clone(), Query(params)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
