//! Data models shared across the rotation core, database access and API handlers.

use serde::Deserialize;

/// Query parameters for history endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryQuery {
    /// Maximum number of records to return (default: 10, max: 200).
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    10
}

impl HistoryQuery {
    /// Returns a clamped limit value (1..=200).
    pub fn limit(&self) -> i64 {
        self.limit.clamp(1, 200)
    }
}

impl Default for HistoryQuery {
    fn default() -> Self {
        Self {
            limit: default_limit(),
        }
    }
}

pub mod assignment;
pub mod holiday;
pub mod roster;
pub mod rotation;
pub mod team_member;
