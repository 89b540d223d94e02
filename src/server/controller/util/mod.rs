//! Helpers shared by controllers: CSRF state validation for the sign-in callback and
//! resolution of the signed in user for protected endpoints.

pub mod csrf;
pub mod get_user;
