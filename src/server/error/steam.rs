use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum SteamError {
    #[error("Steam rejected the OpenID assertion during check_authentication")]
    AssertionRejected,
    #[error("OpenID claimed ID {0:?} is not a Steam community identity")]
    InvalidClaimedId(String),
    #[error("Invalid Steam client URL: {0}")]
    InvalidUrl(String),
    #[error("STEAM_API_KEY is not configured, unable to fetch Steam player summaries")]
    MissingApiKey,
    #[error("Steam Web API request failed with status {0}")]
    UnexpectedStatus(u16),
    #[error("Steam Web API returned no player data for SteamID {0:?}")]
    PlayerNotFound(String),
    #[error(transparent)]
    RequestError(#[from] reqwest::Error),
}

impl IntoResponse for SteamError {
    fn into_response(self) -> Response {
        match self {
            Self::AssertionRejected | Self::InvalidClaimedId(_) => {
                tracing::debug!("{}", self);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: "There was an issue logging you in, please try again.".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}
