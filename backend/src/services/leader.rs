use std::{sync::Arc, time::Duration};

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::{
    models::rotation::Leader,
    services::{assignment_store::AssignmentStore, rotation::RotationEngine},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaderSource {
    Database,
    Fallback,
}

impl LeaderSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaderSource::Database => "database",
            LeaderSource::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLeader {
    pub week_number: i64,
    pub year: i32,
    pub leader: Leader,
    pub workdays: Vec<NaiveDate>,
    pub source: LeaderSource,
}

/// Resolves leaders by consulting the optional store first and falling back
/// to the computed rotation on absence, error or timeout.
#[derive(Clone)]
pub struct LeaderService {
    engine: Arc<RotationEngine>,
    store: Option<Arc<dyn AssignmentStore>>,
    lookup_timeout: Duration,
}

impl LeaderService {
    pub fn new(
        engine: Arc<RotationEngine>,
        store: Option<Arc<dyn AssignmentStore>>,
        lookup_timeout: Duration,
    ) -> Self {
        Self {
            engine,
            store,
            lookup_timeout,
        }
    }

    pub fn engine(&self) -> &Arc<RotationEngine> {
        &self.engine
    }

    pub fn has_store(&self) -> bool {
        self.store.is_some()
    }

    pub async fn resolve_week(&self, week_number: i64, year: i32) -> ResolvedLeader {
        let workdays = self.engine.workdays_for_week(week_number, year);

        if let Some(name) = self.lookup_override(week_number, year).await {
            return ResolvedLeader {
                week_number,
                year,
                leader: Leader::Assigned(name),
                workdays,
                source: LeaderSource::Database,
            };
        }

        ResolvedLeader {
            week_number,
            year,
            leader: self.engine.leader_for_week(week_number, year),
            workdays,
            source: LeaderSource::Fallback,
        }
    }

    pub async fn current_at(&self, now: DateTime<Utc>) -> ResolvedLeader {
        let (week_number, year) = self.engine.current_week_at(&now);
        self.resolve_week(week_number, year).await
    }

    pub async fn next_at(&self, now: DateTime<Utc>) -> ResolvedLeader {
        let (week_number, year) = self.engine.next_week_at(&now);
        self.resolve_week(week_number, year).await
    }

    async fn lookup_override(&self, week_number: i64, year: i32) -> Option<String> {
        let store = self.store.as_ref()?;
        let Ok(week) = i32::try_from(week_number) else {
            return None;
        };

        match tokio::time::timeout(self.lookup_timeout, store.get_override(week, year)).await {
            Ok(Ok(found)) => {
                if let Some(name) = &found {
                    tracing::debug!(week_number, year, leader = %name, "Using stored assignment");
                }
                found
            }
            Ok(Err(err)) => {
                tracing::warn!(
                    week_number,
                    year,
                    error = ?err,
                    "Assignment store lookup failed, using computed rotation"
                );
                None
            }
            Err(_) => {
                tracing::warn!(
                    week_number,
                    year,
                    timeout_ms = self.lookup_timeout.as_millis() as u64,
                    "Assignment store lookup timed out, using computed rotation"
                );
                None
            }
        }
    }
}
