use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::types::{AssignmentId, TeamMemberId};

/// Persisted assignment joined with its member's name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StandupAssignment {
    pub id: AssignmentId,
    pub week_number: i32,
    pub year: i32,
    pub monday_date: NaiveDate,
    pub team_member_id: TeamMemberId,
    pub team_member_name: String,
    pub is_override: bool,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OverrideAssignmentPayload {
    #[validate(length(min = 1, max = 100))]
    pub member_name: String,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializeYearResponse {
    pub year: i32,
    pub inserted: u64,
    pub holiday_weeks: usize,
}
