//! Bulk writes of computed assignments into the store.

use sqlx::PgPool;
use std::collections::HashMap;

use crate::{
    models::{assignment::InitializeYearResponse, roster::TeamRoster},
    repositories::{assignment::AssignmentRepository, team_member::TeamMemberRepository},
    services::rotation::RotationEngine,
    types::TeamMemberId,
};

/// Ensures every roster member has a row. Returns the number of members synced.
pub async fn sync_roster(pool: &PgPool, roster: &TeamRoster) -> sqlx::Result<usize> {
    let repo = TeamMemberRepository::new();
    for name in roster.members() {
        repo.upsert_by_name(pool, name).await?;
    }
    Ok(roster.len())
}

/// Writes the computed leader for every week of `year` that has workdays.
/// Existing rows, overrides included, are left untouched.
pub async fn initialize_year(
    pool: &PgPool,
    engine: &RotationEngine,
    year: i32,
) -> sqlx::Result<InitializeYearResponse> {
    let members = TeamMemberRepository::new()
        .find_by_names(pool, engine.roster().members())
        .await?;
    let member_ids: HashMap<String, TeamMemberId> =
        members.into_iter().map(|m| (m.name, m.id)).collect();

    let repo = AssignmentRepository::new();
    let mut inserted = 0;
    let mut holiday_weeks = 0;

    for assignment in engine.year_schedule(year) {
        let Some(name) = assignment.leader.name() else {
            holiday_weeks += 1;
            continue;
        };
        let Some(member_id) = member_ids.get(name) else {
            tracing::warn!(member = name, year, "Roster member missing from team_members, skipping week");
            continue;
        };
        let Ok(week_number) = i32::try_from(assignment.week_number) else {
            continue;
        };

        if repo
            .insert_if_absent(pool, week_number, year, assignment.monday, *member_id)
            .await?
        {
            inserted += 1;
        }
    }

    tracing::info!(year, inserted, holiday_weeks, "Initialized standup assignments");

    Ok(InitializeYearResponse {
        year,
        inserted,
        holiday_weeks,
    })
}
