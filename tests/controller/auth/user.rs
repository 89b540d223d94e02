use axum::{extract::State, http::StatusCode, response::IntoResponse};
use stepwise::{model::user::UserDto, server::controller::auth::get_user};

use super::*;

#[tokio::test]
/// Expect 200 success with the signed in user
async fn returns_signed_in_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_build_order_tables().build().await?;
    let user = test.user().insert_user(TEST_STEAM_ID).await?;
    sign_in(&test, user.id).await;

    let result = get_user(State(test.app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: UserDto = json_body(resp).await;
    assert_eq!(body.id, user.id);
    assert_eq!(body.steam_id, TEST_STEAM_ID);

    Ok(())
}

#[tokio::test]
/// Expect 401 unauthorized when nobody is signed in
async fn returns_unauthorized_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_build_order_tables().build().await?;

    let result = get_user(State(test.app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 401 unauthorized when the session points at a deleted user
async fn returns_unauthorized_for_missing_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_build_order_tables().build().await?;
    sign_in(&test, 42).await;

    let result = get_user(State(test.app_state()), test.session.clone()).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 500 internal server error when the user table does not exist
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    sign_in(&test, 1).await;

    let result = get_user(State(test.app_state()), test.session.clone()).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
