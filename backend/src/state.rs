use std::sync::Arc;

use crate::{
    config::Config,
    db::connection::DbPool,
    error::{AppError, RotationConfigError},
    services::{
        assignment_store::{AssignmentStore, PgAssignmentStore},
        leader::LeaderService,
        rotation::RotationEngine,
    },
    utils::time::Clock,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub engine: Arc<RotationEngine>,
    pub leaders: Arc<LeaderService>,
    pub pool: Option<DbPool>,
    pub clock: Clock,
}

impl AppState {
    /// Wires the PostgreSQL store when a pool is available.
    pub fn new(config: Config, pool: Option<DbPool>) -> Result<Self, RotationConfigError> {
        let store = pool
            .clone()
            .map(|pool| Arc::new(PgAssignmentStore::new(pool)) as Arc<dyn AssignmentStore>);
        Self::with_store(config, store, pool)
    }

    pub fn with_store(
        config: Config,
        store: Option<Arc<dyn AssignmentStore>>,
        pool: Option<DbPool>,
    ) -> Result<Self, RotationConfigError> {
        let engine = Arc::new(RotationEngine::from_settings(
            &config.rotation,
            config.time_zone,
        )?);
        let leaders = Arc::new(LeaderService::new(
            Arc::clone(&engine),
            store,
            config.store_timeout,
        ));

        Ok(Self {
            config: Arc::new(config),
            engine,
            leaders,
            pool,
            clock: Clock::System,
        })
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Pool for administrative writes; those need a real store.
    pub fn require_pool(&self) -> Result<&DbPool, AppError> {
        self.pool.as_ref().ok_or_else(|| {
            AppError::ServiceUnavailable("Assignment store is not configured".into())
        })
    }
}
