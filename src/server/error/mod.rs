//! Error types for the Stepwise server application.
//!
//! This module provides the error handling system with specialized error types for each
//! domain (authentication, build orders, configuration, Steam). All errors implement
//! `IntoResponse` for Axum HTTP responses and use `thiserror` for ergonomic error
//! definitions with automatic `Display` and `Error` trait implementations.

pub mod auth;
pub mod build_order;
pub mod config;
pub mod steam;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::{api::ErrorDto, validation::ValidationError},
    server::error::{
        auth::AuthError, build_order::BuildOrderError, config::ConfigError, steam::SteamError,
    },
};

/// Main error type for the Stepwise server application.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator. The `IntoResponse` implementation
/// maps errors to appropriate HTTP responses for API consumers.
///
/// # Error Categories
/// - Validation errors (a payload field outside its bounds, a malformed body or query)
/// - Authentication errors (session, CSRF, missing user)
/// - Build order errors (not found, caller is not the author)
/// - Steam errors (OpenID assertion rejected, Web API failures)
/// - External library errors (database, sessions)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// A request payload field violates its constraint.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Authentication error (session, CSRF, user validation).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Build order lookup or ownership error.
    #[error(transparent)]
    BuildOrderError(#[from] BuildOrderError),
    /// Steam OpenID or Web API error.
    #[error(transparent)]
    SteamError(#[from] SteamError),
    /// Request body is not JSON of the expected shape.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),
    /// Path segment cannot be parsed into the expected type.
    #[error(transparent)]
    PathRejection(#[from] PathRejection),
    /// Query string does not match the expected parameters.
    #[error(transparent)]
    QueryRejection(#[from] QueryRejection),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in Stepwise's code.
    #[error("Internal error with Stepwise's code, please open an issue as this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
}

/// Converts application errors into HTTP responses.
///
/// Maps domain-specific errors to appropriate HTTP status codes and JSON error responses.
/// Anything without a specific mapping is treated as an internal server error (500) and
/// logged.
///
/// # Returns
/// - 400 Bad Request - Validation failures, malformed requests and failed sign-in attempts
/// - 401 Unauthorized - No signed in user
/// - 403 Forbidden - Caller does not own the build order
/// - 404 Not Found - Build order does not exist
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ValidationError(err) => {
                tracing::debug!("Validation error: {}", err);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: err.to_string(),
                    }),
                )
                    .into_response()
            }
            Self::JsonRejection(err) => bad_request(err.body_text()),
            Self::PathRejection(err) => bad_request(err.body_text()),
            Self::QueryRejection(err) => bad_request(err.body_text()),
            Self::AuthError(err) => err.into_response(),
            Self::BuildOrderError(err) => err.into_response(),
            Self::SteamError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

fn bad_request(message: String) -> Response {
    tracing::debug!("Rejected request: {}", message);

    (StatusCode::BAD_REQUEST, Json(ErrorDto { error: message })).into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
