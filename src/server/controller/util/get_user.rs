use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::user::UserDto,
    server::{
        error::{auth::AuthError, Error},
        model::{app::AppState, session::user::SessionUserId},
        service::user::UserService,
    },
};

/// Retrieves the signed in user from the session, then from the database
///
/// # Returns
/// - `Ok(UserDto)` - User found
/// - `Err(Error::AuthError(AuthError::UserNotInSession))` - No user ID in the session
/// - `Err(Error::AuthError(AuthError::UserNotInDatabase))` - User ID in session but not in the
///   database, the session is cleared
/// - `Err(Error)` - Database or session store failures
pub async fn get_user_from_session(state: &AppState, session: &Session) -> Result<UserDto, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(Error::AuthError(AuthError::UserNotInSession));
    };

    let Some(user) = UserService::new(&state.db).get_user(user_id).await? else {
        session.clear().await;

        tracing::warn!(
            user_id = %user_id,
            "Cleared session for user that no longer exists in the database"
        );

        return Err(Error::AuthError(AuthError::UserNotInDatabase(user_id)));
    };

    Ok(user)
}
