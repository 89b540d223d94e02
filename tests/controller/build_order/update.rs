use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sea_orm::EntityTrait;
use stepwise::{
    model::build_order::{BuildOrderDto, NewStepDto, UpdateBuildOrderDto},
    server::controller::build_order::update_build_order,
};

use super::*;

fn step(order: i32) -> NewStepDto {
    serde_json::from_value(factory::step_payload(order)).unwrap()
}

#[tokio::test]
/// Expect 200 success with only the present fields changed
async fn updates_present_fields() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_build_order_tables().build().await?;
    let user = test.user().insert_user(TEST_STEAM_ID).await?;
    let (build_order, _) = test
        .build_order()
        .insert_build_order_with_steps(user.id, false, 2)
        .await?;
    sign_in(&test, user.id).await;

    let changes = UpdateBuildOrderDto {
        title: Some("Fast Imperial".to_string()),
        is_public: Some(true),
        ..Default::default()
    };
    let result = update_build_order(
        State(test.app_state()),
        test.session.clone(),
        Ok(Path(build_order.id)),
        Ok(Json(changes)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: BuildOrderDto = json_body(resp).await;
    assert_eq!(body.title, "Fast Imperial");
    assert!(body.is_public);
    assert_eq!(body.civilization, build_order.civilization);
    assert_eq!(body.steps.len(), 2);

    Ok(())
}

#[tokio::test]
/// Expect the stored steps to be replaced when steps are sent
async fn replaces_steps() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_build_order_tables().build().await?;
    let user = test.user().insert_user(TEST_STEAM_ID).await?;
    let (build_order, _) = test
        .build_order()
        .insert_build_order_with_steps(user.id, true, 3)
        .await?;
    sign_in(&test, user.id).await;

    let changes = UpdateBuildOrderDto {
        steps: Some(vec![step(0)]),
        ..Default::default()
    };
    let resp = update_build_order(
        State(test.app_state()),
        test.session.clone(),
        Ok(Path(build_order.id)),
        Ok(Json(changes)),
    )
    .await
    .unwrap()
    .into_response();

    let body: BuildOrderDto = json_body(resp).await;
    assert_eq!(body.steps.len(), 1);
    assert_eq!(body.steps[0].action, "Queue villager 0");

    Ok(())
}

#[tokio::test]
/// Expect 401 unauthorized without a signed in user
async fn rejects_anonymous_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_build_order_tables().build().await?;
    let user = test.user().insert_user(TEST_STEAM_ID).await?;
    let build_order = test.build_order().insert_build_order(user.id, true).await?;

    let result = update_build_order(
        State(test.app_state()),
        test.session.clone(),
        Ok(Path(build_order.id)),
        Ok(Json(UpdateBuildOrderDto::default())),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 403 forbidden when the caller is not the author
async fn rejects_non_author() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_build_order_tables().build().await?;
    let author = test.user().insert_user(TEST_STEAM_ID).await?;
    let other = test.user().insert_user("76561197960287931").await?;
    let build_order = test.build_order().insert_build_order(author.id, true).await?;
    sign_in(&test, other.id).await;

    let changes = UpdateBuildOrderDto {
        title: Some("Hijacked".to_string()),
        ..Default::default()
    };
    let result = update_build_order(
        State(test.app_state()),
        test.session.clone(),
        Ok(Path(build_order.id)),
        Ok(Json(changes)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found for an unknown ID
async fn returns_not_found_for_unknown_id() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_build_order_tables().build().await?;
    let user = test.user().insert_user(TEST_STEAM_ID).await?;
    sign_in(&test, user.id).await;

    let result = update_build_order(
        State(test.app_state()),
        test.session.clone(),
        Ok(Path(99)),
        Ok(Json(UpdateBuildOrderDto::default())),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request for an invalid replacement step
async fn rejects_invalid_changes() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_build_order_tables().build().await?;
    let user = test.user().insert_user(TEST_STEAM_ID).await?;
    let build_order = test.build_order().insert_build_order(user.id, true).await?;
    sign_in(&test, user.id).await;

    let mut bad_step = step(0);
    bad_step.villager_count = 201;
    let changes = UpdateBuildOrderDto {
        steps: Some(vec![bad_step]),
        ..Default::default()
    };
    let result = update_build_order(
        State(test.app_state()),
        test.session.clone(),
        Ok(Path(build_order.id)),
        Ok(Json(changes)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 401 unauthorized rather than a body error when no user is signed in
async fn checks_session_before_body() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_build_order_tables().build().await?;
    let user = test.user().insert_user(TEST_STEAM_ID).await?;
    let build_order = test.build_order().insert_build_order(user.id, true).await?;
    let rejection = json_rejection::<UpdateBuildOrderDto>(r#"{"title": 5}"#).await;

    let result = update_build_order(
        State(test.app_state()),
        test.session.clone(),
        Ok(Path(build_order.id)),
        Err(rejection),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request and the build order untouched for a wrongly typed field
async fn rejects_malformed_body() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_build_order_tables().build().await?;
    let user = test.user().insert_user(TEST_STEAM_ID).await?;
    let build_order = test.build_order().insert_build_order(user.id, true).await?;
    sign_in(&test, user.id).await;
    let rejection = json_rejection::<UpdateBuildOrderDto>(r#"{"title": 5}"#).await;

    let result = update_build_order(
        State(test.app_state()),
        test.session.clone(),
        Ok(Path(build_order.id)),
        Err(rejection),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let stored = entity::prelude::BuildOrder::find_by_id(build_order.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(stored.title, build_order.title);

    Ok(())
}
