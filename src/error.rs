use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid request: {0}")]
    Validation(String),

    #[error("authentication required")]
    AuthRequired,

    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("invalid upstream response: {0}")]
    InvalidUpstreamResponse(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::AuthRequired => StatusCode::UNAUTHORIZED,
            Error::UpstreamUnavailable(_)
            | Error::InvalidUpstreamResponse(_)
            | Error::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::InvalidUpstreamResponse(err.to_string())
        } else {
            Error::UpstreamUnavailable(err.to_string())
        }
    }
}
