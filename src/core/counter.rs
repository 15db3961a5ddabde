//! Visitor counter with graceful degradation.
//!
//! Availability of the remote store is decided once, when the backend is
//! built. After that every visit takes one of three paths:
//!
//! - no store: a random count in [`MOCK_COUNT_RANGE`], tagged `local-mock`
//! - store works: read, add one, write back, tagged `dynamodb`
//! - store fails: `{count: 1, source: "fallback"}`
//!
//! The read-modify-write is not atomic. Two concurrent visits can both read
//! `N` and both write `N + 1`.

use std::ops::RangeInclusive;
use std::sync::Arc;

use chrono::Utc;
use rand::Rng;

use crate::config::AppConfig;
use crate::domain::model::{CounterRecord, VisitorCount};
use crate::domain::ports::CounterStore;
use crate::utils::error::{DashboardError, Result};

pub const COUNTER_KEY: &str = "visitor_count";
pub const MOCK_COUNT_RANGE: RangeInclusive<u64> = 100..=500;

#[derive(Clone)]
pub enum CounterBackend {
    Remote(Arc<dyn CounterStore>),
    Unavailable { reason: String },
}

impl CounterBackend {
    /// Try to build the remote store once. Never fails: any problem turns
    /// into `Unavailable` for the rest of the process lifetime.
    pub async fn connect(config: &AppConfig) -> Self {
        if config.disable_remote_counter {
            return Self::unavailable("remote counter disabled by configuration");
        }

        Self::connect_remote(config).await
    }

    #[cfg(feature = "dynamodb")]
    async fn connect_remote(config: &AppConfig) -> Self {
        match crate::adapters::dynamodb::DynamoDbCounterStore::connect(config).await {
            Ok(store) => Self::Remote(Arc::new(store)),
            Err(e) => {
                tracing::warn!("AWS services unavailable: {}", e);
                Self::unavailable(e.to_string())
            }
        }
    }

    #[cfg(not(feature = "dynamodb"))]
    async fn connect_remote(_config: &AppConfig) -> Self {
        tracing::info!("Running in local development mode - AWS libraries not compiled in");
        Self::unavailable("built without the `dynamodb` feature")
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Remote(_))
    }
}

impl std::fmt::Debug for CounterBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Remote(store) => f
                .debug_tuple("Remote")
                .field(&store.backend_name())
                .finish(),
            Self::Unavailable { reason } => f
                .debug_struct("Unavailable")
                .field("reason", reason)
                .finish(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct VisitorCounter {
    backend: CounterBackend,
}

impl VisitorCounter {
    pub fn new(backend: CounterBackend) -> Self {
        Self { backend }
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_available()
    }

    /// Count one visit. Always produces a value.
    pub async fn record_visit(&self) -> VisitorCount {
        match &self.backend {
            CounterBackend::Unavailable { .. } => VisitorCount::local_mock(mock_count()),
            CounterBackend::Remote(store) => {
                let outcome = increment(store.as_ref()).await;
                resolve(outcome, store.backend_name())
            }
        }
    }
}

fn mock_count() -> u64 {
    rand::thread_rng().gen_range(MOCK_COUNT_RANGE)
}

/// Read the current count (absent means 0), add one and write it back.
pub async fn increment(store: &dyn CounterStore) -> Result<u64> {
    let current = store
        .get(COUNTER_KEY)
        .await?
        .map(|record| record.count)
        .unwrap_or(0);

    let next = current
        .checked_add(1)
        .ok_or_else(|| DashboardError::MalformedRecordError {
            reason: format!("count {} cannot be incremented", current),
        })?;

    store
        .put(CounterRecord::new(COUNTER_KEY, next, Utc::now()))
        .await?;

    Ok(next)
}

fn resolve(outcome: Result<u64>, backend: &str) -> VisitorCount {
    match outcome {
        Ok(count) => VisitorCount::remote(count),
        Err(e) => {
            tracing::warn!(
                "{} error: {} (Category: {:?}), serving fallback count",
                backend,
                e,
                e.category()
            );
            VisitorCount::fallback()
        }
    }
}
