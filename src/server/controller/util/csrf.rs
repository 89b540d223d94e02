use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::session::auth::SessionAuthCsrf,
};

/// Consumes the session's pending sign-in state and checks it against `csrf_state`.
///
/// # Returns
/// - `Ok(())` - States match
/// - `Err(Error::AuthError(AuthError::CsrfValidationFailed))` - States differ
/// - `Err(Error::AuthError(AuthError::CsrfMissingValue))` - No sign-in in progress
pub async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), Error> {
    let stored_state = SessionAuthCsrf::take(session).await?;

    if stored_state != csrf_state {
        return Err(Error::AuthError(AuthError::CsrfValidationFailed));
    }

    Ok(())
}
