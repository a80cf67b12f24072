use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use standup_backend::{
    app::build_router,
    config::Config,
    db::connection::{create_pool, DbPool},
    state::AppState,
};

fn mask_database_url(url: &str) -> String {
    match url.split_once('@') {
        Some((_, host)) => format!("***@{}", host),
        None => "<set>".into(),
    }
}

async fn connect_store(url: &str) -> anyhow::Result<DbPool> {
    let pool = create_pool(url, Duration::from_secs(5)).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    Ok(pool)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?err, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "standup_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!(
        database_url = %config.database_url.as_deref().map(mask_database_url).unwrap_or_else(|| "<none>".into()),
        time_zone = %config.time_zone,
        bind_addr = %config.bind_addr,
        store_timeout_ms = config.store_timeout.as_millis() as u64,
        rotation_config = %config.rotation_config_path,
        rotation_revision = config.rotation.revision,
        roster_size = config.rotation.roster.len(),
        holidays = config.rotation.holidays.len(),
        "Loaded configuration from environment/.env"
    );

    // The rotation never depends on the store; an unreachable database only
    // disables overrides and admin writes.
    let pool = match config.database_url.as_deref() {
        Some(url) => match connect_store(url).await {
            Ok(pool) => Some(pool),
            Err(err) => {
                tracing::warn!(error = ?err, "Assignment store unavailable, serving computed rotation only");
                None
            }
        },
        None => None,
    };

    let addr = config.bind_addr;
    let state = AppState::new(config, pool)?;
    let app = build_router(state);

    tracing::info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
