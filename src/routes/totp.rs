// routes/totp.rs
// POST /api/totp { "secret": "..." } -> { "status": true, "data": { token, timeRemaining, period } }

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Response,
};
use serde_json::Value;
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{ApiResponse, TotpRequest};
use crate::routes::{clean_secret, pretty_json, read_body};
use crate::state::AppState;
use crate::totp::generate_totp;

/// Current code for the secret, using the configured period and digit count.
pub async fn totp(
    State(st): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, ApiError> {
    let body: TotpRequest = read_body(payload)?;
    let secret = clean_secret(&body.secret)?;

    let result = generate_totp(&secret, st.settings.totp_period, st.settings.digits)?;
    Ok(pretty_json(StatusCode::OK, &ApiResponse::ok(result)))
}
