#![allow(dead_code)]
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde_json::Value;
use standup_backend::{
    app::build_router,
    config::{Config, RotationSettings},
    services::{assignment_store::AssignmentStore, rotation::RotationEngine},
    state::AppState,
    utils::time::Clock,
};
use tower::ServiceExt;

pub const TIME_ZONE: chrono_tz::Tz = chrono_tz::America::New_York;

pub fn rotation_settings() -> RotationSettings {
    RotationSettings::load(concat!(env!("CARGO_MANIFEST_DIR"), "/config/rotation.toml"))
        .expect("load bundled rotation table")
}

pub fn test_config() -> Config {
    Config::with_rotation(rotation_settings(), TIME_ZONE)
}

pub fn engine() -> RotationEngine {
    RotationEngine::from_settings(&rotation_settings(), TIME_ZONE).expect("build engine")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Noon in New York on the given date, outside DST.
pub fn noon_eastern(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 17, 0, 0).unwrap()
}

pub fn app_at(now: DateTime<Utc>, store: Option<Arc<dyn AssignmentStore>>) -> Router {
    let state = AppState::with_store(test_config(), store, None)
        .expect("build state")
        .with_clock(Clock::Fixed(now));
    build_router(state)
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}
