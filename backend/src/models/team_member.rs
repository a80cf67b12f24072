use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::types::TeamMemberId;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TeamMember {
    pub id: TeamMemberId,
    pub name: String,
    pub email: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTeamMemberPayload {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    #[validate(email)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMemberResponse {
    pub id: TeamMemberId,
    pub name: String,
    pub email: Option<String>,
    pub active: bool,
}

impl From<TeamMember> for TeamMemberResponse {
    fn from(value: TeamMember) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            active: value.active,
        }
    }
}
