use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    models::rotation::RotationAssignment,
    state::AppState,
    utils::format::{format_workday_range, HOLIDAY_WEEK_LABEL},
    validation::rules,
};

#[derive(Debug, Deserialize)]
pub struct ScheduleQuery {
    pub year: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct ScheduleEntry {
    pub week_number: i64,
    pub monday: NaiveDate,
    pub dates: String,
    pub leader: Option<String>,
}

impl From<RotationAssignment> for ScheduleEntry {
    fn from(value: RotationAssignment) -> Self {
        Self {
            week_number: value.week_number,
            monday: value.monday,
            dates: format_workday_range(&value.workdays, HOLIDAY_WEEK_LABEL),
            leader: value.leader.name().map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    pub year: i32,
    pub weeks: Vec<ScheduleEntry>,
}

/// Computed rotation for every week of a year. Stored overrides are not
/// consulted here.
pub async fn get_schedule(
    State(state): State<AppState>,
    Query(query): Query<ScheduleQuery>,
) -> Result<Json<ScheduleResponse>, AppError> {
    let year = query.year.unwrap_or_else(|| current_year(&state));
    rules::validate_year(year)
        .map_err(|_| AppError::BadRequest("Year must be between 1970 and 9999".into()))?;

    let weeks = state
        .engine
        .year_schedule(year)
        .into_iter()
        .map(ScheduleEntry::from)
        .collect();

    Ok(Json(ScheduleResponse { year, weeks }))
}

/// Year of the current civil date in the reference zone.
pub(crate) fn current_year(state: &AppState) -> i32 {
    state.engine.clock().year_of(&state.clock.now())
}
