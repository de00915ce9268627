use axum::http::StatusCode;
use thiserror::Error;

use crate::common::response::ApiError;

/// Failure reported by the remote result provider.
///
/// The `Display` output is the human-readable message shown to the user, so
/// variants carry the text verbatim.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("{0}")]
    Network(String),
    #[error("Request failed with status code {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Invalid response from movie provider: {0}")]
    Decode(String),
    #[error("Movie not found")]
    NotFound,
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the API key.
        let err = err.without_url();
        if err.is_decode() {
            ProviderError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ProviderError::Status {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            ProviderError::Network(err.to_string())
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MovieError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Unknown genre: {0}")]
    UnknownGenre(String),
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl From<MovieError> for ApiError {
    fn from(err: MovieError) -> Self {
        let status = match &err {
            MovieError::UnknownCategory(_)
            | MovieError::UnknownGenre(_)
            | MovieError::UnknownFilter(_) => StatusCode::BAD_REQUEST,
            MovieError::Provider(ProviderError::NotFound) => StatusCode::NOT_FOUND,
            MovieError::Provider(_) => StatusCode::BAD_GATEWAY,
        };
        ApiError(err.to_string(), status)
    }
}
