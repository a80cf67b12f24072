use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::{
    error::AppError,
    models::assignment::{InitializeYearResponse, OverrideAssignmentPayload, StandupAssignment},
    repositories::{AssignmentRepository, TeamMemberRepository},
    services::{seeding, week_clock},
    state::AppState,
    validation::rules,
};

/// Pins a leader for one week, replacing whatever was stored.
pub async fn override_assignment(
    State(state): State<AppState>,
    Path((year, week_number)): Path<(i32, i32)>,
    Json(payload): Json<OverrideAssignmentPayload>,
) -> Result<Json<StandupAssignment>, AppError> {
    payload.validate()?;
    rules::validate_year(year)
        .map_err(|_| AppError::BadRequest("Year must be between 1970 and 9999".into()))?;

    let boundary = week_clock::last_week_of_year(year)
        .filter(|last| rules::validate_stored_week(week_number, *last).is_ok())
        .and_then(|_| week_clock::week_boundary(i64::from(week_number), year))
        .ok_or_else(|| {
            AppError::BadRequest(format!("Week {} does not exist in {}", week_number, year))
        })?;

    let pool = state.require_pool()?;
    let member = TeamMemberRepository::new()
        .find_active_by_name(pool, payload.member_name.trim())
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("No active team member named {}", payload.member_name))
        })?;

    let repo = AssignmentRepository::new();
    repo.upsert_override(
        pool,
        week_number,
        year,
        boundary.monday,
        member.id,
        payload.reason.as_deref(),
    )
    .await?;

    tracing::info!(
        week_number,
        year,
        leader = %member.name,
        "Standup assignment overridden"
    );

    let stored = repo
        .find_by_week(pool, week_number, year)
        .await?
        .ok_or_else(|| AppError::NotFound("Assignment not found".into()))?;

    Ok(Json(stored))
}

/// Writes the computed rotation for `year` without touching existing rows.
pub async fn initialize_year(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> Result<Json<InitializeYearResponse>, AppError> {
    rules::validate_year(year)
        .map_err(|_| AppError::BadRequest("Year must be between 1970 and 9999".into()))?;
    let pool = state.require_pool()?;

    seeding::sync_roster(pool, state.engine.roster()).await?;
    let summary = seeding::initialize_year(pool, &state.engine, year).await?;

    Ok(Json(summary))
}
