use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{Duration, Utc};
use stepwise::{
    model::build_order::BuildOrderDto,
    server::controller::build_order::{list_build_orders, BuildOrderListParams},
};

use super::*;

fn params(
    public: Option<bool>,
    user_id: Option<i32>,
) -> Result<Query<BuildOrderListParams>, QueryRejection> {
    Ok(Query(BuildOrderListParams {
        public,
        user_id,
        limit: None,
    }))
}

#[tokio::test]
/// Expect build orders newest first
async fn lists_newest_first() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_build_order_tables().build().await?;
    let user = test.user().insert_user(TEST_STEAM_ID).await?;
    let now = Utc::now().naive_utc();
    let older = test
        .build_order()
        .insert_build_order_at(user.id, true, now - Duration::hours(1))
        .await?;
    let newer = test
        .build_order()
        .insert_build_order_at(user.id, true, now)
        .await?;

    let result = list_build_orders(State(test.app_state()), params(None, None)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Vec<BuildOrderDto> = json_body(resp).await;
    let ids: Vec<i32> = body.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}

#[tokio::test]
/// Expect only public build orders with public=true
async fn filters_public() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_build_order_tables().build().await?;
    let user = test.user().insert_user(TEST_STEAM_ID).await?;
    let public = test.build_order().insert_build_order(user.id, true).await?;
    test.build_order().insert_build_order(user.id, false).await?;

    let resp = list_build_orders(State(test.app_state()), params(Some(true), None))
        .await
        .unwrap()
        .into_response();

    let body: Vec<BuildOrderDto> = json_body(resp).await;
    assert_eq!(body.len(), 1);
    assert_eq!(body[0].id, public.id);
    assert!(body[0].is_public);

    Ok(())
}

#[tokio::test]
/// Expect the public and author filters to combine
async fn combines_public_and_author_filters() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_build_order_tables().build().await?;
    let author = test.user().insert_user(TEST_STEAM_ID).await?;
    let other = test.user().insert_user("76561197960287931").await?;
    let expected = test.build_order().insert_build_order(author.id, true).await?;
    test.build_order().insert_build_order(author.id, false).await?;
    test.build_order().insert_build_order(other.id, true).await?;

    let resp = list_build_orders(
        State(test.app_state()),
        params(Some(true), Some(author.id)),
    )
    .await
    .unwrap()
    .into_response();

    let body: Vec<BuildOrderDto> = json_body(resp).await;
    assert_eq!(body.len(), 1);
    assert_eq!(body[0].id, expected.id);
    assert_eq!(body[0].author.id, author.id);

    Ok(())
}

#[tokio::test]
/// Expect each build order to carry its steps sorted by order
async fn includes_sorted_steps() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_build_order_tables().build().await?;
    let user = test.user().insert_user(TEST_STEAM_ID).await?;
    let build_order = test.build_order().insert_build_order(user.id, true).await?;
    for order in [2, 0, 1] {
        test.build_order().insert_step(build_order.id, order).await?;
    }

    let resp = list_build_orders(State(test.app_state()), params(None, None))
        .await
        .unwrap()
        .into_response();

    let body: Vec<BuildOrderDto> = json_body(resp).await;
    let orders: Vec<i32> = body[0].steps.iter().map(|s| s.order).collect();
    assert_eq!(orders, vec![0, 1, 2]);
    assert_eq!(body[0].author.name.as_deref(), Some(TEST_PLAYER_NAME));

    Ok(())
}

#[tokio::test]
/// Expect the limit to keep only the newest build orders
async fn limits_to_newest() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_build_order_tables().build().await?;
    let user = test.user().insert_user(TEST_STEAM_ID).await?;
    let now = Utc::now().naive_utc();
    test.build_order()
        .insert_build_order_at(user.id, true, now - Duration::hours(2))
        .await?;
    let middle = test
        .build_order()
        .insert_build_order_at(user.id, true, now - Duration::hours(1))
        .await?;
    let newest = test
        .build_order()
        .insert_build_order_at(user.id, true, now)
        .await?;

    let limited = Ok(Query(BuildOrderListParams {
        public: Some(true),
        limit: Some(2),
        ..Default::default()
    }));
    let resp = list_build_orders(State(test.app_state()), limited)
        .await
        .unwrap()
        .into_response();

    let body: Vec<BuildOrderDto> = json_body(resp).await;
    let ids: Vec<i32> = body.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![newest.id, middle.id]);

    Ok(())
}

#[tokio::test]
/// Expect listing not to count views
async fn does_not_increment_views() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_build_order_tables().build().await?;
    let user = test.user().insert_user(TEST_STEAM_ID).await?;
    test.build_order().insert_build_order(user.id, true).await?;

    list_build_orders(State(test.app_state()), params(None, None))
        .await
        .unwrap();
    let resp = list_build_orders(State(test.app_state()), params(None, None))
        .await
        .unwrap()
        .into_response();

    let body: Vec<BuildOrderDto> = json_body(resp).await;
    assert_eq!(body[0].views, 0);

    Ok(())
}

#[tokio::test]
/// Expect 500 internal server error when the tables do not exist
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = list_build_orders(State(test.app_state()), params(None, None)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
