#![cfg(feature = "db-tests")]

mod support;

use sqlx::PgPool;
use standup_backend::{
    repositories::{AssignmentRepository, TeamMemberRepository},
    services::{
        assignment_store::{AssignmentStore, PgAssignmentStore},
        seeding,
    },
};
use support::{date, engine};

#[sqlx::test(migrations = "./migrations")]
async fn initialize_year_writes_computed_leaders(pool: PgPool) {
    let engine = engine();
    seeding::sync_roster(&pool, engine.roster()).await.unwrap();

    let summary = seeding::initialize_year(&pool, &engine, 2025).await.unwrap();
    assert_eq!(summary.inserted, 51);
    assert_eq!(summary.holiday_weeks, 1);

    let stored = AssignmentRepository::new()
        .find_by_week(&pool, 34, 2025)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.team_member_name, "Allen");
    assert_eq!(stored.monday_date, date(2025, 8, 25));
    assert!(!stored.is_override);

    let again = seeding::initialize_year(&pool, &engine, 2025).await.unwrap();
    assert_eq!(again.inserted, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn override_replaces_seeded_leader(pool: PgPool) {
    let engine = engine();
    seeding::sync_roster(&pool, engine.roster()).await.unwrap();
    seeding::initialize_year(&pool, &engine, 2025).await.unwrap();

    let marc = TeamMemberRepository::new()
        .find_active_by_name(&pool, "Marc")
        .await
        .unwrap()
        .unwrap();
    let repo = AssignmentRepository::new();
    repo.upsert_override(&pool, 47, 2025, date(2025, 11, 24), marc.id, Some("swap"))
        .await
        .unwrap();

    let stored = repo.find_by_week(&pool, 47, 2025).await.unwrap().unwrap();
    assert_eq!(stored.team_member_name, "Marc");
    assert!(stored.is_override);
    assert_eq!(stored.notes.as_deref(), Some("swap"));

    let store = PgAssignmentStore::new(pool.clone());
    assert_eq!(
        store.get_override(47, 2025).await.unwrap().as_deref(),
        Some("Marc")
    );
    assert_eq!(store.get_override(52, 2025).await.unwrap(), None);
}

#[sqlx::test(migrations = "./migrations")]
async fn inactive_members_are_not_returned_as_leaders(pool: PgPool) {
    let repo = TeamMemberRepository::new();
    let member = repo.create(&pool, "Temp", None).await.unwrap();
    AssignmentRepository::new()
        .upsert_override(&pool, 10, 2025, date(2025, 3, 10), member.id, None)
        .await
        .unwrap();

    sqlx::query("UPDATE team_members SET active = FALSE WHERE id = $1")
        .bind(member.id)
        .execute(&pool)
        .await
        .unwrap();

    let store = PgAssignmentStore::new(pool);
    assert_eq!(store.get_override(10, 2025).await.unwrap(), None);
}

#[sqlx::test(migrations = "./migrations")]
async fn history_lists_most_recent_first(pool: PgPool) {
    let engine = engine();
    seeding::sync_roster(&pool, engine.roster()).await.unwrap();
    seeding::initialize_year(&pool, &engine, 2025).await.unwrap();

    let allen = TeamMemberRepository::new()
        .find_active_by_name(&pool, "Allen")
        .await
        .unwrap()
        .unwrap();
    let history = AssignmentRepository::new()
        .history_for_member(&pool, allen.id, 10)
        .await
        .unwrap();

    let weeks: Vec<i32> = history.iter().map(|a| a.week_number).collect();
    assert_eq!(weeks, vec![46, 34, 22, 10]);
}
