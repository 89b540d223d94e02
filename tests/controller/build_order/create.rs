use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sea_orm::EntityTrait;
use stepwise::{
    model::{
        api::ErrorDto,
        build_order::{BuildOrderDto, CreateBuildOrderDto},
    },
    server::controller::build_order::create_build_order,
};

use super::*;

fn dto(title: &str, step_count: i32) -> CreateBuildOrderDto {
    serde_json::from_value(factory::create_build_order_payload(title, true, step_count)).unwrap()
}

fn payload(title: &str, step_count: i32) -> Result<Json<CreateBuildOrderDto>, JsonRejection> {
    Ok(Json(dto(title, step_count)))
}

#[tokio::test]
/// Expect 201 created with the stored build order, author, and steps
async fn creates_build_order() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_build_order_tables().build().await?;
    let user = test.user().insert_user(TEST_STEAM_ID).await?;
    sign_in(&test, user.id).await;

    let result = create_build_order(
        State(test.app_state()),
        test.session.clone(),
        payload("22 Pop Scouts", 3),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: BuildOrderDto = json_body(resp).await;
    assert_eq!(body.title, "22 Pop Scouts");
    assert_eq!(body.author.id, user.id);
    assert_eq!(body.map_types, vec!["Arabia".to_string(), "Arena".to_string()]);
    assert_eq!(body.views, 0);
    assert_eq!(body.likes, 0);
    assert_eq!(body.steps.len(), 3);

    let stored_steps = entity::prelude::BuildOrderStep::find().all(&test.db).await?;
    assert_eq!(stored_steps.len(), 3);

    Ok(())
}

#[tokio::test]
/// Expect 401 unauthorized and nothing stored without a signed in user
async fn rejects_anonymous_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_build_order_tables().build().await?;

    let result = create_build_order(
        State(test.app_state()),
        test.session.clone(),
        payload("22 Pop Scouts", 1),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let stored = entity::prelude::BuildOrder::find().all(&test.db).await?;
    assert!(stored.is_empty());

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request and nothing stored for an invalid step
async fn rejects_invalid_payload() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_build_order_tables().build().await?;
    let user = test.user().insert_user(TEST_STEAM_ID).await?;
    sign_in(&test, user.id).await;

    let mut build_order = dto("22 Pop Scouts", 2);
    build_order.steps[1].time_seconds = 60;

    let result = create_build_order(
        State(test.app_state()),
        test.session.clone(),
        Ok(Json(build_order)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let stored = entity::prelude::BuildOrder::find().all(&test.db).await?;
    assert!(stored.is_empty());

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request for an empty title
async fn rejects_empty_title() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_build_order_tables().build().await?;
    let user = test.user().insert_user(TEST_STEAM_ID).await?;
    sign_in(&test, user.id).await;

    let result = create_build_order(
        State(test.app_state()),
        test.session.clone(),
        payload("", 1),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect a build order without steps to be accepted
async fn accepts_empty_step_list() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_build_order_tables().build().await?;
    let user = test.user().insert_user(TEST_STEAM_ID).await?;
    sign_in(&test, user.id).await;

    let resp = create_build_order(
        State(test.app_state()),
        test.session.clone(),
        payload("Empty plan", 0),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: BuildOrderDto = json_body(resp).await;
    assert!(body.steps.is_empty());

    Ok(())
}

#[tokio::test]
/// Expect 401 unauthorized rather than a body error when no user is signed in
async fn checks_session_before_body() -> Result<(), TestError> {
    let test = TestBuilder::new().with_build_order_tables().build().await?;
    let rejection = json_rejection::<CreateBuildOrderDto>("{}").await;

    let result = create_build_order(
        State(test.app_state()),
        test.session.clone(),
        Err(rejection),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request with an error body for a fractional step time
async fn rejects_malformed_body() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_build_order_tables().build().await?;
    let user = test.user().insert_user(TEST_STEAM_ID).await?;
    sign_in(&test, user.id).await;

    let mut body = factory::create_build_order_payload("22 Pop Scouts", true, 1);
    body["steps"][0]["timeSeconds"] = serde_json::json!(1.5);
    let rejection = json_rejection::<CreateBuildOrderDto>(&body.to_string()).await;

    let result = create_build_order(
        State(test.app_state()),
        test.session.clone(),
        Err(rejection),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = json_body(resp).await;
    assert!(!body.error.is_empty());

    let stored = entity::prelude::BuildOrder::find().all(&test.db).await?;
    assert!(stored.is_empty());

    Ok(())
}
