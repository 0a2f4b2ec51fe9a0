// routes/mod.rs
// Route handlers, the application router and shared request/response helpers.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::base32::is_space;
use crate::error::{ApiError, MIN_SECRET_LEN};
use crate::state::AppState;

pub mod home;
pub mod hotp;
pub mod totp;

pub use home::{health, home};
pub use hotp::hotp;
pub use totp::totp;

/// Builds the full router: API endpoints, built-in page, static fallback, CORS and tracing.
pub fn app(state: Arc<AppState>) -> Router {
    let public = ServeDir::new(&state.settings.public_dir);

    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/api/totp", post(totp))
        .route("/api/hotp", post(hotp))
        .fallback_service(public)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serializes `body` with two-space indentation.
pub fn pretty_json<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_vec_pretty(body) {
        Ok(bytes) => (
            status,
            [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
            bytes,
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to serialize response");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// A request without a JSON content type, or whose JSON is not an object, is
/// treated as an empty body.
pub(crate) fn read_body<T>(payload: Result<Json<Value>, JsonRejection>) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    let value = match payload {
        Ok(Json(value)) => value,
        Err(JsonRejection::MissingJsonContentType(_)) => return Ok(T::default()),
        Err(rejection) => return Err(ApiError::MalformedBody(rejection.body_text())),
    };
    match value {
        Value::Object(_) => {
            serde_json::from_value(value).map_err(|err| ApiError::MalformedBody(err.to_string()))
        }
        _ => Ok(T::default()),
    }
}

/// Uppercases and strips whitespace, then enforces the minimum secret length.
pub fn clean_secret(value: &Value) -> Result<String, ApiError> {
    let raw = match value {
        Value::String(s) if !s.is_empty() => s,
        _ => return Err(ApiError::MissingSecret),
    };
    let clean: String = raw
        .to_uppercase()
        .chars()
        .filter(|c| !is_space(*c))
        .collect();
    // length in UTF-16 code units, as browsers count it
    if clean.encode_utf16().count() < MIN_SECRET_LEN {
        return Err(ApiError::SecretTooShort);
    }
    Ok(clean)
}
