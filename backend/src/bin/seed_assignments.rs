//! Writes the computed rotation into the assignment store.
//!
//! Usage: `seed_assignments [YEAR...]`. Without arguments the current and
//! next year (in the reference zone) are seeded. Existing rows are kept.

use std::time::Duration;

use anyhow::{anyhow, Context};
use chrono::Datelike;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use standup_backend::{
    config::Config,
    db::connection::create_pool,
    repositories::AssignmentRepository,
    services::{rotation::RotationEngine, seeding},
    utils::time::today_local,
};

fn years_from_args(default_year: i32) -> anyhow::Result<Vec<i32>> {
    let years = std::env::args()
        .skip(1)
        .map(|arg| {
            arg.parse::<i32>()
                .with_context(|| format!("invalid year argument: {}", arg))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    if years.is_empty() {
        Ok(vec![default_year, default_year + 1])
    } else {
        Ok(years)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seed_assignments=info,standup_backend=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    let database_url = config
        .database_url
        .as_deref()
        .ok_or_else(|| anyhow!("DATABASE_URL must be set to seed assignments"))?;

    let pool = create_pool(database_url, Duration::from_secs(10)).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let engine = RotationEngine::from_settings(&config.rotation, config.time_zone)?;
    let synced = seeding::sync_roster(&pool, engine.roster()).await?;
    tracing::info!(members = synced, "Synced team roster");

    for year in years_from_args(today_local(&config.time_zone).year())? {
        let summary = seeding::initialize_year(&pool, &engine, year).await?;
        tracing::info!(
            year = summary.year,
            inserted = summary.inserted,
            holiday_weeks = summary.holiday_weeks,
            "Seeded year"
        );
    }

    let total = AssignmentRepository::new().count(&pool).await?;
    tracing::info!(total, "Assignment store seeded");

    Ok(())
}
