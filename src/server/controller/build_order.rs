use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Deserializer};
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        build_order::{BuildOrderDto, CreateBuildOrderDto, UpdateBuildOrderDto},
    },
    server::{
        controller::util::get_user::get_user_from_session,
        data::build_order::BuildOrderFilter,
        error::Error,
        model::app::AppState,
        service::build_order::BuildOrderService,
    },
};

pub static BUILD_ORDER_TAG: &str = "build-order";

/// Filters for listing build orders
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct BuildOrderListParams {
    /// Only list public build orders when `true`, any other value is ignored
    #[serde(default, deserialize_with = "deserialize_true_flag")]
    pub public: Option<bool>,
    /// Only list build orders written by this user
    pub user_id: Option<i32>,
    /// Return at most this many build orders
    pub limit: Option<u64>,
}

impl From<BuildOrderListParams> for BuildOrderFilter {
    fn from(params: BuildOrderListParams) -> Self {
        BuildOrderFilter {
            public_only: params.public.unwrap_or(false),
            author_id: params.user_id,
            limit: params.limit,
        }
    }
}

fn deserialize_true_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;

    Ok(value.map(|value| value == "true"))
}

/// Lists build orders newest first
///
/// # Responses
/// - 200 (OK): Build orders with their authors and steps
/// - 400 (Bad Request): A query parameter is malformed
/// - 500 (Internal Server Error): Database failure
#[utoipa::path(
    get,
    path = "/api/build-orders",
    tag = BUILD_ORDER_TAG,
    params(BuildOrderListParams),
    responses(
        (status = 200, description = "Build orders, newest first", body = Vec<BuildOrderDto>),
        (status = 400, description = "Malformed query parameter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_build_orders(
    State(state): State<AppState>,
    params: Result<Query<BuildOrderListParams>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    let Query(params) = params?;

    let build_orders = BuildOrderService::new(&state.db)
        .list(params.into())
        .await?;

    Ok(Json(build_orders))
}

/// Creates a build order authored by the signed in user
///
/// # Responses
/// - 201 (Created): The created build order
/// - 400 (Bad Request): The body is not a build order or a field violates its constraint
/// - 401 (Unauthorized): No user is signed in
/// - 500 (Internal Server Error): Database or session store failure
#[utoipa::path(
    post,
    path = "/api/build-orders",
    tag = BUILD_ORDER_TAG,
    request_body = CreateBuildOrderDto,
    responses(
        (status = 201, description = "Build order created", body = BuildOrderDto),
        (status = 400, description = "Invalid build order", body = ErrorDto),
        (status = 401, description = "No user is signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_build_order(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<CreateBuildOrderDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;
    let Json(payload) = payload?;

    let build_order = BuildOrderService::new(&state.db)
        .create(user.id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(build_order)))
}

/// Fetches a build order and counts the view
///
/// # Responses
/// - 200 (OK): The build order with its author and steps
/// - 404 (Not Found): No build order with the ID
/// - 500 (Internal Server Error): Database failure
#[utoipa::path(
    get,
    path = "/api/build-orders/{id}",
    tag = BUILD_ORDER_TAG,
    params(("id" = i32, Path, description = "Build order ID")),
    responses(
        (status = 200, description = "The build order", body = BuildOrderDto),
        (status = 404, description = "Build order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_build_order(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = id?;

    let build_order = BuildOrderService::new(&state.db).get(id).await?;

    Ok(Json(build_order))
}

/// Updates a build order owned by the signed in user
///
/// Absent fields are left untouched, a present `steps` list replaces every stored step.
///
/// # Responses
/// - 200 (OK): The updated build order
/// - 400 (Bad Request): The body is malformed or a present field violates its constraint
/// - 401 (Unauthorized): No user is signed in
/// - 403 (Forbidden): The user is not the author
/// - 404 (Not Found): No build order with the ID
/// - 500 (Internal Server Error): Database or session store failure
#[utoipa::path(
    put,
    path = "/api/build-orders/{id}",
    tag = BUILD_ORDER_TAG,
    params(("id" = i32, Path, description = "Build order ID")),
    request_body = UpdateBuildOrderDto,
    responses(
        (status = 200, description = "Build order updated", body = BuildOrderDto),
        (status = 400, description = "Invalid build order", body = ErrorDto),
        (status = 401, description = "No user is signed in", body = ErrorDto),
        (status = 403, description = "User is not the author", body = ErrorDto),
        (status = 404, description = "Build order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_build_order(
    State(state): State<AppState>,
    session: Session,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateBuildOrderDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;
    let Path(id) = id?;
    let Json(payload) = payload?;

    let build_order = BuildOrderService::new(&state.db)
        .update(user.id, id, payload)
        .await?;

    Ok(Json(build_order))
}

/// Deletes a build order owned by the signed in user, along with its steps
///
/// # Responses
/// - 200 (OK): Build order deleted
/// - 401 (Unauthorized): No user is signed in
/// - 403 (Forbidden): The user is not the author
/// - 404 (Not Found): No build order with the ID
/// - 500 (Internal Server Error): Database or session store failure
#[utoipa::path(
    delete,
    path = "/api/build-orders/{id}",
    tag = BUILD_ORDER_TAG,
    params(("id" = i32, Path, description = "Build order ID")),
    responses(
        (status = 200, description = "Build order deleted", body = SuccessDto),
        (status = 401, description = "No user is signed in", body = ErrorDto),
        (status = 403, description = "User is not the author", body = ErrorDto),
        (status = 404, description = "Build order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_build_order(
    State(state): State<AppState>,
    session: Session,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;
    let Path(id) = id?;

    BuildOrderService::new(&state.db).delete(user.id, id).await?;

    Ok(Json(SuccessDto { success: true }))
}
