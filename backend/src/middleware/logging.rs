//! One structured log line per request.
//!
//! Leader routes attach a [`ResolvedWeek`] to their response so the line
//! carries which week was answered and whether the store or the computed
//! rotation supplied the leader.

use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};
use std::time::Instant;

use crate::services::leader::LeaderSource;

use super::request_id::RequestId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedWeek {
    pub week_number: i64,
    pub year: i32,
    pub source: LeaderSource,
}

pub async fn log_responses(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let request_id = req
        .extensions()
        .get::<RequestId>()
        .map(|id| id.as_str().to_string())
        .unwrap_or_default();
    let start = Instant::now();

    let response = next.run(req).await;
    let latency_ms = start.elapsed().as_millis() as u64;
    let status = response.status();

    match response.extensions().get::<ResolvedWeek>() {
        Some(week) => tracing::info!(
            %method,
            path = %path,
            request_id = %request_id,
            status = status.as_u16(),
            latency_ms,
            week_number = week.week_number,
            year = week.year,
            source = week.source.as_str(),
            "Leader request served"
        ),
        None => log_status(status, method.as_str(), &path, &request_id, latency_ms),
    }

    response
}

fn log_status(status: StatusCode, method: &str, path: &str, request_id: &str, latency_ms: u64) {
    let code = status.as_u16();
    if status.is_server_error() {
        tracing::error!(method, path, request_id, status = code, latency_ms, "Request failed");
    } else if status.is_client_error() {
        tracing::warn!(method, path, request_id, status = code, latency_ms, "Request rejected");
    } else {
        tracing::debug!(method, path, request_id, status = code, latency_ms, "Request served");
    }
}
