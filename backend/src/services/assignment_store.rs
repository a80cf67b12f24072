//! Optional persisted overrides of the computed rotation.

use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

use async_trait::async_trait;
use tracing::Instrument;

use crate::{db::connection::DbPool, repositories::assignment::AssignmentRepository};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssignmentStore: Send + Sync {
    /// Stored leader for `(week_number, year)`, if any.
    async fn get_override(&self, week_number: i32, year: i32) -> anyhow::Result<Option<String>>;
}

/// PostgreSQL-backed store reading `standup_assignments`.
#[derive(Clone)]
pub struct PgAssignmentStore {
    pool: DbPool,
    repo: AssignmentRepository,
}

impl PgAssignmentStore {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            repo: AssignmentRepository::new(),
        }
    }
}

#[async_trait]
impl AssignmentStore for PgAssignmentStore {
    async fn get_override(&self, week_number: i32, year: i32) -> anyhow::Result<Option<String>> {
        let span = tracing::debug_span!("assignment_store_lookup", week_number, year);
        let name = self
            .repo
            .find_active_leader_name(&self.pool, week_number, year)
            .instrument(span)
            .await?;
        Ok(name)
    }
}

/// In-process store, handy for wiring tests and local runs without a database.
#[derive(Clone, Default)]
pub struct InMemoryAssignmentStore {
    entries: Arc<RwLock<HashMap<(i32, i32), String>>>,
}

impl InMemoryAssignmentStore {
    pub fn new(entries: impl IntoIterator<Item = ((i32, i32), String)>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(entries.into_iter().collect())),
        }
    }

    pub fn set(&self, week_number: i32, year: i32, name: impl Into<String>) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert((week_number, year), name.into());
    }
}

#[async_trait]
impl AssignmentStore for InMemoryAssignmentStore {
    async fn get_override(&self, week_number: i32, year: i32) -> anyhow::Result<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| anyhow::anyhow!("assignment store lock poisoned"))?;
        Ok(entries.get(&(week_number, year)).cloned())
    }
}
