use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    models::holiday::{HolidayQuery, HolidayResponse},
    services::holiday::HolidayDecision,
    state::AppState,
};

use super::schedule::current_year;

pub async fn list_holidays(
    State(state): State<AppState>,
    Query(query): Query<HolidayQuery>,
) -> Json<Vec<HolidayResponse>> {
    let year = query.year.unwrap_or_else(|| current_year(&state));
    let holidays = state.engine.calendar().holidays_in_year(year);

    Json(holidays.iter().map(HolidayResponse::from).collect())
}

#[derive(Debug, Deserialize)]
pub struct HolidayCheckQuery {
    pub date: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct HolidayCheckResponse {
    pub date: NaiveDate,
    pub is_workday: bool,
    pub is_holiday: bool,
    pub reason: String,
}

impl HolidayCheckResponse {
    fn new(date: NaiveDate, is_holiday: bool, decision: HolidayDecision) -> Self {
        Self {
            date,
            is_workday: decision.is_workday,
            is_holiday,
            reason: decision.reason.label().to_string(),
        }
    }
}

pub async fn check_date(
    State(state): State<AppState>,
    Query(query): Query<HolidayCheckQuery>,
) -> Json<HolidayCheckResponse> {
    let calendar = state.engine.calendar();
    let decision = calendar.decision_for(query.date);

    Json(HolidayCheckResponse::new(
        query.date,
        calendar.is_holiday(query.date),
        decision,
    ))
}
