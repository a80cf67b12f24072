//! Standup assignment repository.
//!
//! Rows are keyed by `(week_number, year)`; `is_override` marks rows written
//! by an administrator rather than by year initialization.

use crate::models::assignment::StandupAssignment;
use crate::types::TeamMemberId;
use chrono::NaiveDate;
use sqlx::PgPool;

const TABLE_NAME: &str = "standup_assignments";
const SELECT_COLUMNS: &str = "a.id, a.week_number, a.year, a.monday_date, a.team_member_id, \
     m.name AS team_member_name, a.is_override, a.notes";

#[derive(Debug, Default, Clone, Copy)]
pub struct AssignmentRepository;

impl AssignmentRepository {
    pub fn new() -> Self {
        Self
    }

    fn base_select_query() -> String {
        format!(
            "SELECT {} FROM {} a JOIN team_members m ON m.id = a.team_member_id",
            SELECT_COLUMNS, TABLE_NAME
        )
    }

    /// Name of the stored leader, ignoring deactivated members.
    pub async fn find_active_leader_name(
        &self,
        db: &PgPool,
        week_number: i32,
        year: i32,
    ) -> sqlx::Result<Option<String>> {
        let query = format!(
            "SELECT m.name FROM {} a JOIN team_members m ON m.id = a.team_member_id \
             WHERE a.week_number = $1 AND a.year = $2 AND m.active = TRUE",
            TABLE_NAME
        );
        sqlx::query_scalar::<_, String>(&query)
            .bind(week_number)
            .bind(year)
            .fetch_optional(db)
            .await
    }

    pub async fn find_by_week(
        &self,
        db: &PgPool,
        week_number: i32,
        year: i32,
    ) -> sqlx::Result<Option<StandupAssignment>> {
        let query = format!(
            "{} WHERE a.week_number = $1 AND a.year = $2",
            Self::base_select_query()
        );
        sqlx::query_as::<_, StandupAssignment>(&query)
            .bind(week_number)
            .bind(year)
            .fetch_optional(db)
            .await
    }

    /// Returns `true` when a row was written.
    pub async fn insert_if_absent(
        &self,
        db: &PgPool,
        week_number: i32,
        year: i32,
        monday_date: NaiveDate,
        team_member_id: TeamMemberId,
    ) -> sqlx::Result<bool> {
        let query = format!(
            "INSERT INTO {} (week_number, year, monday_date, team_member_id) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (week_number, year) DO NOTHING",
            TABLE_NAME
        );
        let result = sqlx::query(&query)
            .bind(week_number)
            .bind(year)
            .bind(monday_date)
            .bind(team_member_id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn upsert_override(
        &self,
        db: &PgPool,
        week_number: i32,
        year: i32,
        monday_date: NaiveDate,
        team_member_id: TeamMemberId,
        notes: Option<&str>,
    ) -> sqlx::Result<()> {
        let query = format!(
            "INSERT INTO {} (week_number, year, monday_date, team_member_id, is_override, notes) \
             VALUES ($1, $2, $3, $4, TRUE, $5) \
             ON CONFLICT (week_number, year) DO UPDATE \
             SET team_member_id = EXCLUDED.team_member_id, is_override = TRUE, \
                 notes = EXCLUDED.notes, updated_at = NOW()",
            TABLE_NAME
        );
        sqlx::query(&query)
            .bind(week_number)
            .bind(year)
            .bind(monday_date)
            .bind(team_member_id)
            .bind(notes)
            .execute(db)
            .await?;
        Ok(())
    }

    /// Most recent assignments first.
    pub async fn history_for_member(
        &self,
        db: &PgPool,
        team_member_id: TeamMemberId,
        limit: i64,
    ) -> sqlx::Result<Vec<StandupAssignment>> {
        let query = format!(
            "{} WHERE a.team_member_id = $1 ORDER BY a.year DESC, a.week_number DESC LIMIT $2",
            Self::base_select_query()
        );
        sqlx::query_as::<_, StandupAssignment>(&query)
            .bind(team_member_id)
            .bind(limit)
            .fetch_all(db)
            .await
    }

    pub async fn count(&self, db: &PgPool) -> sqlx::Result<i64> {
        let query = format!("SELECT COUNT(*) FROM {}", TABLE_NAME);
        sqlx::query_scalar::<_, i64>(&query).fetch_one(db).await
    }
}
