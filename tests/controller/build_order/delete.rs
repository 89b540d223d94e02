use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::EntityTrait;
use stepwise::{model::api::SuccessDto, server::controller::build_order::delete_build_order};

use super::*;

#[tokio::test]
/// Expect 200 success with the build order and its steps removed
async fn deletes_build_order_and_steps() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_build_order_tables().build().await?;
    let user = test.user().insert_user(TEST_STEAM_ID).await?;
    let (build_order, _) = test
        .build_order()
        .insert_build_order_with_steps(user.id, true, 3)
        .await?;
    sign_in(&test, user.id).await;

    let result = delete_build_order(
        State(test.app_state()),
        test.session.clone(),
        Ok(Path(build_order.id)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: SuccessDto = json_body(resp).await;
    assert!(body.success);

    let stored = entity::prelude::BuildOrder::find_by_id(build_order.id)
        .one(&test.db)
        .await?;
    assert!(stored.is_none());
    let steps = entity::prelude::BuildOrderStep::find().all(&test.db).await?;
    assert!(steps.is_empty());

    Ok(())
}

#[tokio::test]
/// Expect 403 forbidden and the build order kept when the caller is not the author
async fn rejects_non_author() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_build_order_tables().build().await?;
    let author = test.user().insert_user(TEST_STEAM_ID).await?;
    let other = test.user().insert_user("76561197960287931").await?;
    let build_order = test.build_order().insert_build_order(author.id, true).await?;
    sign_in(&test, other.id).await;

    let result = delete_build_order(
        State(test.app_state()),
        test.session.clone(),
        Ok(Path(build_order.id)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let stored = entity::prelude::BuildOrder::find_by_id(build_order.id)
        .one(&test.db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}

#[tokio::test]
/// Expect 404 not found for an unknown ID
async fn returns_not_found_for_unknown_id() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_build_order_tables().build().await?;
    let user = test.user().insert_user(TEST_STEAM_ID).await?;
    sign_in(&test, user.id).await;

    let result = delete_build_order(
        State(test.app_state()),
        test.session.clone(),
        Ok(Path(1)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 401 unauthorized without a signed in user
async fn rejects_anonymous_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_build_order_tables().build().await?;
    let user = test.user().insert_user(TEST_STEAM_ID).await?;
    let build_order = test.build_order().insert_build_order(user.id, true).await?;

    let result = delete_build_order(
        State(test.app_state()),
        test.session.clone(),
        Ok(Path(build_order.id)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
