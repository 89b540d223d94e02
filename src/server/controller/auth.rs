use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{
        controller::util::{csrf::validate_csrf, get_user::get_user_from_session},
        error::Error,
        model::{
            app::AppState,
            session::{auth::SessionAuthCsrf, user::SessionUserId},
        },
        service::auth::{callback::CallbackService, login::login_service},
    },
};

pub static AUTH_TAG: &str = "auth";

/// Login route to initiate sign-in with Steam
///
/// Stores a random state in the session and redirects the user to Steam's OpenID provider.
///
/// # Responses
/// - 307 (Temporary Redirect): Redirects user to Steam to sign in
/// - 500 (Internal Server Error): The sign-in URL could not be built or the session store failed
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to Steam's OpenID sign-in page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let login = login_service(&state.steam_client)?;

    SessionAuthCsrf::insert(&session, &login.state).await?;

    Ok(Redirect::temporary(&login.login_url))
}

/// Callback route Steam redirects the user to after signing in
///
/// Verifies the OpenID assertion with Steam, refreshes the user's profile, and stores the
/// user in the session.
///
/// # Responses
/// - 307 (Temporary Redirect): Signed in, redirect to the build order list
/// - 400 (Bad Request): CSRF state mismatch or Steam did not confirm the assertion
/// - 500 (Internal Server Error): Steam Web API, database, or session store failure
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Signed in, redirect to the build order list"),
        (status = 400, description = "Sign-in could not be verified", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, Error> {
    let csrf_state = params.get("state").map(String::as_str).unwrap_or_default();
    validate_csrf(&session, csrf_state).await?;

    let user_id = CallbackService::new(&state.db, &state.steam_client)
        .handle_callback(&params)
        .await?;

    SessionUserId::insert(&session, user_id).await?;

    Ok(Redirect::temporary("/build-orders"))
}

/// Logs the user out by clearing their session
///
/// # Responses
/// - 307 (Temporary Redirect): Logged out, redirect to the home page
/// - 500 (Internal Server Error): There was an issue clearing the session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Logged out, redirect to the home page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_user_id = SessionUserId::get(&session).await?;

    // Clearing a session that was never stored fails in the store
    if maybe_user_id.is_some() {
        session.clear().await;
    }

    Ok(Redirect::temporary("/"))
}

/// Returns the signed in user
///
/// # Responses
/// - 200 (OK): The signed in user
/// - 401 (Unauthorized): No user is signed in
/// - 500 (Internal Server Error): Database or session store failure
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The signed in user", body = UserDto),
        (status = 401, description = "No user is signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    Ok(Json(user))
}
