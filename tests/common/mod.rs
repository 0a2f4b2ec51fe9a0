#![allow(dead_code)]

use std::{
    env, fs,
    path::PathBuf,
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Request, StatusCode},
};
use serde_json::Value;
use tower::ServiceExt; // for oneshot

use otpcodes::{
    routes,
    state::{AppState, Settings},
};

/// RFC 4226 Appendix D key ("12345678901234567890") in Base32.
pub const RFC_SECRET: &str = "GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ";

pub fn build_app() -> Router {
    build_app_with(Settings::default())
}

pub fn build_app_with(settings: Settings) -> Router {
    routes::app(Arc::new(AppState::new(settings)))
}

/// Fresh directory under the system temp dir, unique per call.
pub fn temp_public_dir(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = env::temp_dir().join(format!("otpcodes_{tag}_{}_{nanos}", std::process::id()));
    fs::create_dir_all(&dir).expect("failed to create temp dir");
    dir
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("response body is not JSON")
    }
}

pub async fn send(app: Router, req: Request<Body>) -> TestResponse {
    let res = app.oneshot(req).await.expect("request failed");
    let status = res.status();
    let headers = res.headers().clone();
    let body_bytes = to_bytes(res.into_body(), 1024 * 1024)
        .await
        .expect("body read failed");
    TestResponse {
        status,
        headers,
        body: String::from_utf8_lossy(&body_bytes).to_string(),
    }
}

pub async fn post_json(app: Router, path: &str, body: Value) -> TestResponse {
    let req = Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, req).await
}

pub async fn get(app: Router, path: &str) -> TestResponse {
    let req = Request::builder().uri(path).body(Body::empty()).unwrap();
    send(app, req).await
}
