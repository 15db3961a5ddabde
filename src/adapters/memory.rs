use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::model::CounterRecord;
use crate::domain::ports::CounterStore;
use crate::utils::error::{DashboardError, Result};

/// Process-local counter store, for running without AWS and for tests.
#[derive(Debug, Default)]
pub struct MemoryCounterStore {
    records: Mutex<HashMap<String, CounterRecord>>,
}

impl MemoryCounterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_count(key: &str, count: u64) -> Self {
        let store = Self::new();
        if let Ok(mut records) = store.records.lock() {
            records.insert(key.to_string(), CounterRecord::new(key, count, Utc::now()));
        }
        store
    }

    fn poisoned() -> DashboardError {
        DashboardError::CounterStoreError {
            message: "in-memory counter lock poisoned".to_string(),
        }
    }
}

#[async_trait]
impl CounterStore for MemoryCounterStore {
    async fn get(&self, key: &str) -> Result<Option<CounterRecord>> {
        let records = self.records.lock().map_err(|_| Self::poisoned())?;
        Ok(records.get(key).cloned())
    }

    async fn put(&self, record: CounterRecord) -> Result<()> {
        let mut records = self.records.lock().map_err(|_| Self::poisoned())?;
        records.insert(record.id.clone(), record);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_missing_key() {
        let store = MemoryCounterStore::new();
        assert!(store.get("visitor_count").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let store = MemoryCounterStore::with_count("visitor_count", 3);
        store
            .put(CounterRecord::new("visitor_count", 4, Utc::now()))
            .await
            .unwrap();

        let record = store.get("visitor_count").await.unwrap().unwrap();
        assert_eq!(record.count, 4);
    }
}
