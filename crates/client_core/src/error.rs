use shared::error::ApiError;
use thiserror::Error;

use crate::validation::FieldViolation;

/// Why a create-account call did not succeed. The user only ever sees a
/// generic message; the detail is for logs.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("invalid server url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server rejected request with status {status}{}", detail_suffix(.detail))]
    Rejected {
        status: u16,
        detail: Option<ApiError>,
    },
}

fn detail_suffix(detail: &Option<ApiError>) -> String {
    detail
        .as_ref()
        .map(|detail| format!(" ({detail})"))
        .unwrap_or_default()
}

#[derive(Debug, Error)]
pub enum SignUpError {
    #[error("{} field(s) failed validation", .0.len())]
    Validation(Vec<FieldViolation>),
    #[error(transparent)]
    Request(#[from] RequestError),
}
