//! Team member repository.

use crate::models::team_member::TeamMember;
use crate::types::TeamMemberId;
use sqlx::PgPool;

const TABLE_NAME: &str = "team_members";
const SELECT_COLUMNS: &str = "id, name, email, active, created_at";

#[derive(Debug, Default, Clone, Copy)]
pub struct TeamMemberRepository;

impl TeamMemberRepository {
    pub fn new() -> Self {
        Self
    }

    fn base_select_query() -> String {
        format!("SELECT {} FROM {}", SELECT_COLUMNS, TABLE_NAME)
    }

    pub async fn find_active(&self, db: &PgPool) -> sqlx::Result<Vec<TeamMember>> {
        let query = format!("{} WHERE active = TRUE ORDER BY name ASC", Self::base_select_query());
        sqlx::query_as::<_, TeamMember>(&query).fetch_all(db).await
    }

    pub async fn find_by_id(&self, db: &PgPool, id: TeamMemberId) -> sqlx::Result<Option<TeamMember>> {
        let query = format!("{} WHERE id = $1", Self::base_select_query());
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(id)
            .fetch_optional(db)
            .await
    }

    pub async fn find_active_by_name(
        &self,
        db: &PgPool,
        name: &str,
    ) -> sqlx::Result<Option<TeamMember>> {
        let query = format!(
            "{} WHERE name = $1 AND active = TRUE",
            Self::base_select_query()
        );
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(name)
            .fetch_optional(db)
            .await
    }

    pub async fn find_by_names(&self, db: &PgPool, names: &[String]) -> sqlx::Result<Vec<TeamMember>> {
        let query = format!("{} WHERE name = ANY($1)", Self::base_select_query());
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(names)
            .fetch_all(db)
            .await
    }

    pub async fn create(
        &self,
        db: &PgPool,
        name: &str,
        email: Option<&str>,
    ) -> sqlx::Result<TeamMember> {
        let query = format!(
            "INSERT INTO {} (name, email) VALUES ($1, $2) RETURNING {}",
            TABLE_NAME, SELECT_COLUMNS
        );
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(name)
            .bind(email)
            .fetch_one(db)
            .await
    }

    /// Inserts `name` if missing; an existing row keeps its email and status.
    pub async fn upsert_by_name(&self, db: &PgPool, name: &str) -> sqlx::Result<TeamMember> {
        let query = format!(
            "INSERT INTO {} (name, active) VALUES ($1, TRUE) \
             ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name \
             RETURNING {}",
            TABLE_NAME, SELECT_COLUMNS
        );
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(name)
            .fetch_one(db)
            .await
    }

    pub async fn count_active(&self, db: &PgPool) -> sqlx::Result<i64> {
        let query = format!("SELECT COUNT(*) FROM {} WHERE active = TRUE", TABLE_NAME);
        sqlx::query_scalar::<_, i64>(&query).fetch_one(db).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_columns_include_expected_fields() {
        assert!(SELECT_COLUMNS.contains("active"));
        assert!(SELECT_COLUMNS.contains("email"));
        assert!(TeamMemberRepository::base_select_query().starts_with("SELECT id, name"));
    }
}
