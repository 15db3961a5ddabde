use crate::domain::model::CounterRecord;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Key-value access to the persisted visitor counter.
#[async_trait]
pub trait CounterStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<CounterRecord>>;
    async fn put(&self, record: CounterRecord) -> Result<()>;

    /// Short name used in log lines.
    fn backend_name(&self) -> &'static str;
}
