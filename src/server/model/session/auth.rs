//! Sign-in state kept in the session between the Steam redirect and the callback.
//!
//! The login route stores a random state value here and appends it to the OpenID
//! `return_to` URL. The callback takes it back out, so each value can only be used once.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::{auth::AuthError, Error};

/// Session key for the pending sign-in state.
pub const SESSION_AUTH_CSRF_KEY: &str = "stepwise:auth:csrf";

/// Pending sign-in state stored in the session.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionAuthCsrf(pub String);

impl SessionAuthCsrf {
    /// Stores `state`, replacing any sign-in already in progress for this session.
    pub async fn insert(session: &Session, state: &str) -> Result<(), Error> {
        session
            .insert(SESSION_AUTH_CSRF_KEY, SessionAuthCsrf(state.to_string()))
            .await?;

        Ok(())
    }

    /// Removes and returns the pending state.
    ///
    /// # Returns
    /// - `Ok(String)` - The stored state, now removed from the session
    /// - `Err(Error::AuthError(AuthError::CsrfMissingValue))` - No sign-in in progress
    pub async fn take(session: &Session) -> Result<String, Error> {
        match session
            .remove::<SessionAuthCsrf>(SESSION_AUTH_CSRF_KEY)
            .await?
        {
            Some(SessionAuthCsrf(state)) => Ok(state),
            None => Err(AuthError::CsrfMissingValue.into()),
        }
    }
}
