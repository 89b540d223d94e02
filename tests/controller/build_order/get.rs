use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use stepwise::{model::build_order::BuildOrderDto, server::controller::build_order::get_build_order};

use super::*;

#[tokio::test]
/// Expect 200 success with the view counted in the response
async fn returns_build_order_and_counts_view() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_build_order_tables().build().await?;
    let user = test.user().insert_user(TEST_STEAM_ID).await?;
    let (build_order, _) = test
        .build_order()
        .insert_build_order_with_steps(user.id, true, 2)
        .await?;

    let result = get_build_order(State(test.app_state()), Ok(Path(build_order.id))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: BuildOrderDto = json_body(resp).await;
    assert_eq!(body.id, build_order.id);
    assert_eq!(body.views, 1);
    assert_eq!(body.steps.len(), 2);

    Ok(())
}

#[tokio::test]
/// Expect each fetch to increment views by one
async fn increments_views_per_fetch() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_build_order_tables().build().await?;
    let user = test.user().insert_user(TEST_STEAM_ID).await?;
    let build_order = test.build_order().insert_build_order(user.id, true).await?;

    for _ in 0..2 {
        get_build_order(State(test.app_state()), Ok(Path(build_order.id)))
            .await
            .unwrap();
    }
    let resp = get_build_order(State(test.app_state()), Ok(Path(build_order.id)))
        .await
        .unwrap()
        .into_response();

    let body: BuildOrderDto = json_body(resp).await;
    assert_eq!(body.views, 3);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found for an unknown ID
async fn returns_not_found_for_unknown_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_build_order_tables().build().await?;

    let result = get_build_order(State(test.app_state()), Ok(Path(1))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
