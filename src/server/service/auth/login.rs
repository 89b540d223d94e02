use rand::{distr::Alphanumeric, Rng};

use crate::server::{
    error::Error,
    steam::{LoginData, SteamClient},
};

/// Length of the CSRF state carried through the Steam redirect
pub const CSRF_STATE_LEN: usize = 32;

/// Random alphanumeric state used to tie a callback to the session that started sign-in
pub fn generate_csrf_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(CSRF_STATE_LEN)
        .map(char::from)
        .collect()
}

/// Creates the Steam sign-in URL with a fresh CSRF state.
pub fn login_service(steam_client: &SteamClient) -> Result<LoginData, Error> {
    let state = generate_csrf_state();

    let login = steam_client.login_url(&state)?;

    Ok(login)
}
