// error.rs
// API errors and their JSON rendering (400 for client input, 500 otherwise).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::ApiFailure;
use crate::routes::pretty_json;
use crate::totp::OtpError;

pub const MIN_SECRET_LEN: usize = 16;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Secret key is required!")]
    MissingSecret,
    #[error("Secret key must be at least 16 characters!")]
    SecretTooShort,
    #[error("Counter must be a non-negative integer!")]
    InvalidCounter,
    #[error("Invalid secret key format!")]
    InvalidSecret,
    #[error("Invalid JSON body: {0}")]
    MalformedBody(String),
    #[error("Unable to generate code: {0}")]
    Unavailable(OtpError),
}

impl From<OtpError> for ApiError {
    fn from(err: OtpError) -> Self {
        match err {
            OtpError::InvalidSecret(_) => ApiError::InvalidSecret,
            other => ApiError::Unavailable(other),
        }
    }
}

impl ApiError {
    fn kind(&self) -> &'static str {
        match self {
            ApiError::MissingSecret => "missing_secret",
            ApiError::SecretTooShort => "secret_too_short",
            ApiError::InvalidCounter => "invalid_counter",
            ApiError::InvalidSecret => "invalid_secret",
            ApiError::MalformedBody(_) => "malformed_body",
            ApiError::Unavailable(_) => "unavailable",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(kind = self.kind(), error = %self, "otp generation failed");
        } else {
            tracing::debug!(kind = self.kind(), "rejecting otp request");
        }
        let body = ApiFailure {
            status: false,
            message: self.to_string(),
        };
        pretty_json(status, &body)
    }
}
