use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::models::ParseError;

/// Errors returned by the JSON endpoints
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request body or one of its fields was not acceptable
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Something failed on our side
    #[error("internal error: {0}")]
    Internal(String),
}

/// Body sent with every error response
#[derive(Serialize)]
struct ErrorResponse {
    status: String,
    message: String,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) | ApiError::Internal(msg) => msg.as_str(),
        }
    }
}

impl From<ParseError> for ApiError {
    fn from(err: ParseError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::BadRequest(_) => log::warn!("{}", self),
            ApiError::Internal(_) => log::error!("{}", self),
        }

        let body = ErrorResponse {
            status: "error".to_string(),
            message: self.message().to_string(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}
