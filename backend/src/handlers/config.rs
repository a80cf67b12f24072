use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct TimeZoneResponse {
    pub time_zone: String,
}

pub async fn get_time_zone(State(state): State<AppState>) -> Json<TimeZoneResponse> {
    Json(TimeZoneResponse {
        time_zone: state.config.time_zone.to_string(),
    })
}

#[derive(Serialize)]
pub struct RotationConfigResponse {
    pub revision: u32,
    pub offset: i64,
    pub roster: Vec<String>,
    pub holiday_count: usize,
    pub store_enabled: bool,
}

pub async fn get_rotation_config(State(state): State<AppState>) -> Json<RotationConfigResponse> {
    Json(RotationConfigResponse {
        revision: state.config.rotation.revision,
        offset: state.engine.offset(),
        roster: state.engine.roster().members().to_vec(),
        holiday_count: state.engine.calendar().len(),
        store_enabled: state.leaders.has_store(),
    })
}
