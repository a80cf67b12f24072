mod support;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use standup_backend::{middleware::ResolvedWeek, services::leader::LeaderSource};
use tower::ServiceExt;
use uuid::Uuid;

#[tokio::test]
async fn request_id_is_generated_when_missing() {
    let app = support::app_at(support::noon_eastern(2025, 11, 25), None);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/config/timezone")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let id = response.headers().get("x-request-id").unwrap().to_str().unwrap();
    assert!(Uuid::parse_str(id).is_ok());
}

#[tokio::test]
async fn request_id_from_client_is_echoed() {
    let app = support::app_at(support::noon_eastern(2025, 11, 25), None);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/config/timezone")
                .header("x-request-id", "client-req-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers().get("x-request-id").unwrap(), "client-req-123");
}

#[tokio::test]
async fn correlation_id_is_used_as_request_id() {
    let app = axum::Router::new()
        .route("/test", axum::routing::get(|| async { "ok" }))
        .layer(axum::middleware::from_fn(
            standup_backend::middleware::request_id::request_id,
        ));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/test")
                .header("x-correlation-id", "corr-req-456")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers().get("x-request-id").unwrap(), "corr-req-456");
}

#[tokio::test]
async fn leader_responses_carry_resolved_week() {
    let app = support::app_at(support::noon_eastern(2025, 11, 25), None);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/standup-leader")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let resolved = response.extensions().get::<ResolvedWeek>().copied().unwrap();
    assert_eq!(
        resolved,
        ResolvedWeek {
            week_number: 47,
            year: 2025,
            source: LeaderSource::Fallback,
        }
    );
}

#[tokio::test]
async fn non_leader_routes_have_no_resolved_week() {
    let app = support::app_at(support::noon_eastern(2025, 11, 25), None);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/config/timezone")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.extensions().get::<ResolvedWeek>().is_none());
}

#[tokio::test]
async fn error_body_reaches_client_through_logging() {
    let app = support::app_at(support::noon_eastern(2025, 11, 25), None);
    let (status, body) = support::get_json(app, "/api/admin/members").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "Assignment store is not configured");
}
