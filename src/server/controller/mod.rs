//! HTTP controller endpoints for the Stepwise web API.
//!
//! Axum handlers for Steam sign-in and build order management. Controllers extract the
//! request, resolve the signed in user from the session, call a service, and map the
//! result onto a response. Every handler carries a utoipa path for the OpenAPI document.

pub mod auth;
pub mod build_order;
pub mod util;
