use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    middleware::ResolvedWeek,
    models::roster::TeamRoster,
    services::{
        leader::{LeaderSource, ResolvedLeader},
        replacement::pick_replacement,
    },
    state::AppState,
    utils::format::{format_workday_range, HOLIDAY_WEEK_LABEL, NO_STANDUP_LABEL},
    validation::rules,
};

#[derive(Debug, Serialize)]
pub struct WeekSummary {
    pub week_number: i64,
    pub year: i32,
    pub leader: Option<String>,
    pub dates: String,
    pub workdays: Vec<NaiveDate>,
    pub source: LeaderSource,
}

impl WeekSummary {
    fn resolved_week(&self) -> ResolvedWeek {
        ResolvedWeek {
            week_number: self.week_number,
            year: self.year,
            source: self.source,
        }
    }

    fn from_resolved(resolved: ResolvedLeader, empty_label: &str) -> Self {
        Self {
            week_number: resolved.week_number,
            year: resolved.year,
            leader: resolved.leader.name().map(str::to_string),
            dates: format_workday_range(&resolved.workdays, empty_label),
            workdays: resolved.workdays,
            source: resolved.source,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StandupLeaderResponse {
    pub current_leader: Option<String>,
    pub next_leader: Option<String>,
    pub current_week: WeekSummary,
    pub next_week: WeekSummary,
    pub source: LeaderSource,
    pub time_zone: String,
}

pub async fn get_standup_leaders(
    State(state): State<AppState>,
) -> (Extension<ResolvedWeek>, Json<StandupLeaderResponse>) {
    let now = state.clock.now();
    let (current, next) = tokio::join!(state.leaders.current_at(now), state.leaders.next_at(now));

    let current_week = WeekSummary::from_resolved(current, HOLIDAY_WEEK_LABEL);
    let next_week = WeekSummary::from_resolved(next, NO_STANDUP_LABEL);

    tracing::debug!(
        current = ?current_week.leader,
        next = ?next_week.leader,
        source = current_week.source.as_str(),
        "Resolved standup leaders"
    );

    let resolved = current_week.resolved_week();
    let response = StandupLeaderResponse {
        current_leader: current_week.leader.clone(),
        next_leader: next_week.leader.clone(),
        source: current_week.source,
        current_week,
        next_week,
        time_zone: state.config.time_zone.to_string(),
    };

    (Extension(resolved), Json(response))
}

#[derive(Debug, Deserialize)]
pub struct WeekLeaderQuery {
    pub year: i32,
    pub week: i64,
}

pub async fn get_week_leader(
    State(state): State<AppState>,
    Query(query): Query<WeekLeaderQuery>,
) -> Result<(Extension<ResolvedWeek>, Json<WeekSummary>), AppError> {
    rules::validate_year(query.year)
        .map_err(|_| AppError::BadRequest("Year must be between 1970 and 9999".into()))?;
    rules::validate_query_week(query.week)
        .map_err(|_| AppError::BadRequest("Week must be between -1000 and 1000".into()))?;

    let resolved = state.leaders.resolve_week(query.week, query.year).await;
    let summary = WeekSummary::from_resolved(resolved, HOLIDAY_WEEK_LABEL);
    Ok((Extension(summary.resolved_week()), Json(summary)))
}

#[derive(Debug, Serialize)]
pub struct ReplacementResponse {
    pub week_number: i64,
    pub year: i32,
    pub scheduled_leader: Option<String>,
    pub replacement: Option<String>,
}

/// Random stand-in for the current week, never the scheduled leader.
pub async fn pick_random_replacement(State(state): State<AppState>) -> Json<ReplacementResponse> {
    let current = state.leaders.current_at(state.clock.now()).await;
    let scheduled_leader = current.leader.name().map(str::to_string);
    let replacement = choose_replacement(state.engine.roster(), scheduled_leader.as_deref());

    Json(ReplacementResponse {
        week_number: current.week_number,
        year: current.year,
        scheduled_leader,
        replacement,
    })
}

fn choose_replacement(roster: &TeamRoster, scheduled: Option<&str>) -> Option<String> {
    pick_replacement(roster, scheduled, &mut rand::thread_rng())
}
