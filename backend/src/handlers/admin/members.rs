use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        assignment::StandupAssignment,
        team_member::{CreateTeamMemberPayload, TeamMemberResponse},
        HistoryQuery,
    },
    repositories::{AssignmentRepository, TeamMemberRepository},
    state::AppState,
    types::TeamMemberId,
};

pub async fn list_members(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeamMemberResponse>>, AppError> {
    let pool = state.require_pool()?;
    let members = TeamMemberRepository::new().find_active(pool).await?;

    Ok(Json(
        members
            .into_iter()
            .map(TeamMemberResponse::from)
            .collect::<Vec<_>>(),
    ))
}

pub async fn create_member(
    State(state): State<AppState>,
    Json(payload): Json<CreateTeamMemberPayload>,
) -> Result<(StatusCode, Json<TeamMemberResponse>), AppError> {
    payload.validate()?;
    let pool = state.require_pool()?;

    let name = payload.name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("Member name must not be blank".into()));
    }

    let member = TeamMemberRepository::new()
        .create(pool, name, payload.email.as_deref())
        .await?;
    tracing::info!(member_id = %member.id, name = %member.name, "Team member created");

    Ok((StatusCode::CREATED, Json(TeamMemberResponse::from(member))))
}

pub async fn member_history(
    State(state): State<AppState>,
    Path(member_id): Path<TeamMemberId>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<StandupAssignment>>, AppError> {
    let pool = state.require_pool()?;

    TeamMemberRepository::new()
        .find_by_id(pool, member_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Team member not found".into()))?;

    let history = AssignmentRepository::new()
        .history_for_member(pool, member_id, query.limit())
        .await?;

    Ok(Json(history))
}
