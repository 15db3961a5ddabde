use std::collections::HashMap;

use async_trait::async_trait;
use aws_config::retry::RetryConfig;
use aws_config::timeout::TimeoutConfig;
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoDbClient;

use crate::config::AppConfig;
use crate::domain::model::CounterRecord;
use crate::domain::ports::CounterStore;
use crate::utils::error::{DashboardError, Result};

const ID_ATTR: &str = "id";
const COUNT_ATTR: &str = "count";
const LAST_UPDATED_ATTR: &str = "last_updated";

#[derive(Debug, Clone)]
pub struct DynamoDbCounterStore {
    client: DynamoDbClient,
    table: String,
}

impl DynamoDbCounterStore {
    pub fn new(client: DynamoDbClient, table: String) -> Self {
        Self { client, table }
    }

    /// Build a client for the configured region and make sure credentials
    /// resolve. Retries are off and every call is bounded by the counter
    /// timeout, so a slow or failing table costs one attempt per request.
    pub async fn connect(config: &AppConfig) -> Result<Self> {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;

        let provider =
            sdk_config
                .credentials_provider()
                .ok_or_else(|| DashboardError::ConfigError {
                    message: "no AWS credentials provider configured".to_string(),
                })?;

        match tokio::time::timeout(config.counter_timeout(), provider.provide_credentials()).await
        {
            Ok(Ok(_)) => {}
            Ok(Err(e)) => {
                return Err(DashboardError::ConfigError {
                    message: format!("AWS credentials unavailable: {}", DisplayErrorContext(&e)),
                })
            }
            Err(_) => {
                return Err(DashboardError::ConfigError {
                    message: "timed out resolving AWS credentials".to_string(),
                })
            }
        }

        let mut builder = aws_sdk_dynamodb::config::Builder::from(&sdk_config)
            .retry_config(RetryConfig::disabled())
            .timeout_config(
                TimeoutConfig::builder()
                    .operation_timeout(config.counter_timeout())
                    .build(),
            );
        if let Some(endpoint) = &config.dynamodb_endpoint {
            builder = builder.endpoint_url(endpoint);
        }

        let client = DynamoDbClient::from_conf(builder.build());
        tracing::info!(
            "AWS services initialized for region: {} (table: {})",
            config.region,
            config.table
        );

        Ok(Self::new(client, config.table.clone()))
    }
}

#[async_trait]
impl CounterStore for DynamoDbCounterStore {
    async fn get(&self, key: &str) -> Result<Option<CounterRecord>> {
        tracing::debug!("GetItem {} from {}", key, self.table);

        let output = self
            .client
            .get_item()
            .table_name(&self.table)
            .key(ID_ATTR, AttributeValue::S(key.to_string()))
            .send()
            .await
            .map_err(|e| store_error("GetItem", e))?;

        output.item().map(|item| record_from_item(key, item)).transpose()
    }

    async fn put(&self, record: CounterRecord) -> Result<()> {
        tracing::debug!("PutItem {}={} into {}", record.id, record.count, self.table);

        self.client
            .put_item()
            .table_name(&self.table)
            .item(ID_ATTR, AttributeValue::S(record.id))
            .item(COUNT_ATTR, AttributeValue::N(record.count.to_string()))
            .item(LAST_UPDATED_ATTR, AttributeValue::S(record.last_updated))
            .send()
            .await
            .map_err(|e| store_error("PutItem", e))?;

        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "DynamoDB"
    }
}

fn record_from_item(key: &str, item: &HashMap<String, AttributeValue>) -> Result<CounterRecord> {
    let count = match item.get(COUNT_ATTR) {
        Some(AttributeValue::N(raw)) => {
            raw.trim()
                .parse::<u64>()
                .map_err(|e| DashboardError::MalformedRecordError {
                    reason: format!("count '{}' is not a non-negative integer: {}", raw, e),
                })?
        }
        Some(other) => {
            return Err(DashboardError::MalformedRecordError {
                reason: format!("count has unexpected attribute type: {:?}", other),
            })
        }
        None => {
            return Err(DashboardError::MalformedRecordError {
                reason: "record has no count attribute".to_string(),
            })
        }
    };

    let last_updated = match item.get(LAST_UPDATED_ATTR) {
        Some(AttributeValue::S(value)) => value.clone(),
        _ => String::new(),
    };

    Ok(CounterRecord {
        id: key.to_string(),
        count,
        last_updated,
    })
}

fn store_error<E>(operation: &str, err: E) -> DashboardError
where
    E: ProvideErrorMetadata + std::error::Error,
{
    DashboardError::CounterStoreError {
        message: format!(
            "{} failed ({}): {}",
            operation,
            err.code().unwrap_or("unknown"),
            DisplayErrorContext(&err)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(pairs: &[(&str, AttributeValue)]) -> HashMap<String, AttributeValue> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_record_from_item() {
        let record = record_from_item(
            "visitor_count",
            &item(&[
                ("id", AttributeValue::S("visitor_count".to_string())),
                ("count", AttributeValue::N("41".to_string())),
                ("last_updated", AttributeValue::S("2024-05-01T12:00:00Z".to_string())),
            ]),
        )
        .unwrap();

        assert_eq!(record.count, 41);
        assert_eq!(record.last_updated, "2024-05-01T12:00:00Z");
    }

    #[test]
    fn test_record_without_timestamp() {
        let record = record_from_item(
            "visitor_count",
            &item(&[("count", AttributeValue::N("7".to_string()))]),
        )
        .unwrap();

        assert_eq!(record.count, 7);
        assert!(record.last_updated.is_empty());
    }

    #[test]
    fn test_malformed_records() {
        let wrong_type = item(&[("count", AttributeValue::S("41".to_string()))]);
        assert!(matches!(
            record_from_item("visitor_count", &wrong_type),
            Err(DashboardError::MalformedRecordError { .. })
        ));

        let negative = item(&[("count", AttributeValue::N("-3".to_string()))]);
        assert!(record_from_item("visitor_count", &negative).is_err());

        let missing = item(&[("id", AttributeValue::S("visitor_count".to_string()))]);
        assert!(record_from_item("visitor_count", &missing).is_err());
    }
}
