// routes/hotp.rs
// POST /api/hotp { "secret": "...", "counter": 5 } -> { "status": true, "data": { token, counter } }

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Response,
};
use serde_json::Value;
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{ApiResponse, HotpRequest};
use crate::routes::{clean_secret, pretty_json, read_body};
use crate::state::AppState;
use crate::totp::generate_hotp;

pub async fn hotp(
    State(st): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, ApiError> {
    let body: HotpRequest = read_body(payload)?;
    let secret = clean_secret(&body.secret)?;
    let counter = parse_counter(&body.counter)?;

    let result = generate_hotp(&secret, counter, st.settings.digits)?;
    Ok(pretty_json(StatusCode::OK, &ApiResponse::ok(result)))
}

const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// Accepts a non-negative JSON number (fractions truncated) or a string
/// starting with an integer, e.g. `"12"`, `" 7 "`, `"42abc"`, `"0x1f"`.
pub fn parse_counter(value: &Value) -> Result<u64, ApiError> {
    match value {
        Value::Number(n) => {
            if let Some(c) = n.as_u64() {
                return Ok(c);
            }
            match n.as_f64() {
                // -0.5 truncates to zero; 2^64 and above does not fit
                Some(f) if f.is_finite() && f > -1.0 && f < U64_LIMIT => Ok(f.trunc() as u64),
                _ => Err(ApiError::InvalidCounter),
            }
        }
        Value::String(s) => match integer_prefix(s) {
            Some((true, magnitude)) if magnitude != 0 => Err(ApiError::InvalidCounter),
            Some((_, magnitude)) => Ok(magnitude),
            None => Err(ApiError::InvalidCounter),
        },
        _ => Err(ApiError::InvalidCounter),
    }
}

/// Leading integer of `raw` as (negative, magnitude).
fn integer_prefix(raw: &str) -> Option<(bool, u64)> {
    let s = raw.trim_start();
    let (negative, s) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let (radix, s) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(rest) => (16, rest),
        None => (10, s),
    };
    let end = s.find(|c: char| !c.is_digit(radix)).unwrap_or(s.len());
    let digits = &s[..end];
    if digits.is_empty() {
        return None;
    }
    u64::from_str_radix(digits, radix)
        .ok()
        .map(|magnitude| (negative, magnitude))
}
