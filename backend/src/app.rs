use axum::{
    http::Method,
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{handlers, middleware, state::AppState};

pub fn build_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route(
            "/api/standup-leader",
            get(handlers::leader::get_standup_leaders),
        )
        .route(
            "/api/standup-leader/week",
            get(handlers::leader::get_week_leader),
        )
        .route(
            "/api/standup-leader/random",
            get(handlers::leader::pick_random_replacement),
        )
        .route("/api/schedule", get(handlers::schedule::get_schedule))
        .route("/api/holidays", get(handlers::holidays::list_holidays))
        .route("/api/holidays/check", get(handlers::holidays::check_date))
        .route(
            "/api/config/timezone",
            get(handlers::config::get_time_zone),
        )
        .route(
            "/api/config/rotation",
            get(handlers::config::get_rotation_config),
        );

    let admin_routes = Router::new()
        .route(
            "/api/admin/members",
            get(handlers::admin::list_members).post(handlers::admin::create_member),
        )
        .route(
            "/api/admin/members/{id}/history",
            get(handlers::admin::member_history),
        )
        .route(
            "/api/admin/assignments/{year}/{week}",
            put(handlers::admin::override_assignment),
        )
        .route(
            "/api/admin/assignments/{year}/initialize",
            post(handlers::admin::initialize_year),
        );

    Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        .layer(axum_middleware::from_fn(middleware::log_responses))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum_middleware::from_fn(middleware::request_id))
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([
                            Method::GET,
                            Method::POST,
                            Method::PUT,
                            Method::OPTIONS,
                        ])
                        .allow_headers(Any)
                        .max_age(Duration::from_secs(24 * 60 * 60)),
                ),
        )
        .with_state(state)
}
