// models.rs
// Request bodies, OTP results and the JSON envelope returned by the API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of a TOTP computation, with the countdown until the next code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TotpResult {
    pub token: String,
    pub time_remaining: u64,
    pub period: u64,
}

/// Result of an HOTP computation; `counter` is the value the code was derived from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HotpResult {
    pub token: String,
    pub counter: u64,
}

/// Body of POST /api/totp.
///
/// Fields are kept as raw JSON so that wrong types surface as validation
/// messages instead of extractor rejections.
#[derive(Debug, Default, Deserialize)]
pub struct TotpRequest {
    #[serde(default)]
    pub secret: Value,
}

/// Body of POST /api/hotp.
#[derive(Debug, Default, Deserialize)]
pub struct HotpRequest {
    #[serde(default)]
    pub secret: Value,
    #[serde(default)]
    pub counter: Value,
}

/// Success envelope: `{ "status": true, "data": ... }`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self { status: true, data }
    }
}

/// Failure envelope: `{ "status": false, "message": "..." }`.
#[derive(Debug, Serialize)]
pub struct ApiFailure {
    pub status: bool,
    pub message: String,
}
