//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here together with its utoipa path, and the collected
//! OpenAPI document is served through Swagger UI at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the API router with Swagger UI.
///
/// # Registered Endpoints
/// - `GET /api/auth/login` - Start Steam sign-in
/// - `GET /api/auth/callback` - Steam OpenID callback
/// - `GET /api/auth/logout` - Log out the current user
/// - `GET /api/auth/user` - Current user
/// - `GET /api/build-orders` - List build orders
/// - `POST /api/build-orders` - Create a build order
/// - `GET /api/build-orders/{id}` - Fetch a build order
/// - `PUT /api/build-orders/{id}` - Update a build order
/// - `DELETE /api/build-orders/{id}` - Delete a build order
///
/// ```ignore
/// let app_state = AppState { db, steam_client };
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Stepwise", description = "Stepwise API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Steam sign-in API routes"),
        (name = controller::build_order::BUILD_ORDER_TAG, description = "Build order API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::callback))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(
            controller::build_order::list_build_orders,
            controller::build_order::create_build_order
        ))
        .routes(routes!(
            controller::build_order::get_build_order,
            controller::build_order::update_build_order,
            controller::build_order::delete_build_order
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
