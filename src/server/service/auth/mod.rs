//! Steam sign-in services.
//!
//! `login` builds the redirect to Steam, `callback` verifies the assertion Steam sends back
//! and records the signed in user.

pub mod callback;
pub mod login;
