use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum BuildOrderError {
    #[error("Build order ID {0:?} not found")]
    NotFound(i32),
    #[error("User ID {user_id:?} is not the author of build order ID {build_order_id:?}")]
    NotAuthor { build_order_id: i32, user_id: i32 },
}

impl IntoResponse for BuildOrderError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(build_order_id) => {
                tracing::debug!(build_order_id = %build_order_id, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "Build order not found".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::NotAuthor {
                build_order_id,
                user_id,
            } => {
                tracing::debug!(
                    build_order_id = %build_order_id,
                    user_id = %user_id,
                    "{}",
                    self
                );

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "Forbidden".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
