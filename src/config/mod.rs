use crate::utils::error::Result;
use crate::utils::validation::{
    validate_aws_region, validate_non_empty_string, validate_range, validate_s3_bucket_name,
    validate_table_name, validate_url, Validate,
};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_SECRET_KEY: &str = "dev-secret-key-change-in-production";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    Development,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "portfolio-dashboard")]
#[command(about = "Portfolio dashboard backend with an optional DynamoDB visitor counter")]
pub struct AppConfig {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value = "5000")]
    pub port: u16,

    #[arg(long, env = "SECRET_KEY", default_value = DEFAULT_SECRET_KEY, hide_env_values = true)]
    pub secret_key: String,

    #[arg(long, env = "AWS_DEFAULT_REGION", default_value = "eu-west-1")]
    pub region: String,

    #[arg(long, env = "DYNAMODB_TABLE", default_value = "portfolio-dashboard-visitor-counter")]
    pub table: String,

    #[arg(long, env = "S3_BUCKET", default_value = "portfolio-assets-bucket")]
    pub bucket: String,

    #[arg(long = "env", env = "APP_ENV", value_enum, default_value = "production")]
    pub mode: RunMode,

    #[arg(long, env = "COUNTER_TIMEOUT_SECS", default_value = "3")]
    pub counter_timeout_secs: u64,

    /// Override the DynamoDB endpoint, e.g. for DynamoDB Local.
    #[arg(long, env = "DYNAMODB_ENDPOINT")]
    pub dynamodb_endpoint: Option<String>,

    /// Skip the remote counter entirely and serve mock counts.
    #[arg(long, env = "DISABLE_REMOTE_COUNTER")]
    pub disable_remote_counter: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl AppConfig {
    pub fn is_development(&self) -> bool {
        self.mode == RunMode::Development
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn counter_timeout(&self) -> Duration {
        Duration::from_secs(self.counter_timeout_secs)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            secret_key: DEFAULT_SECRET_KEY.to_string(),
            region: "eu-west-1".to_string(),
            table: "portfolio-dashboard-visitor-counter".to_string(),
            bucket: "portfolio-assets-bucket".to_string(),
            mode: RunMode::Production,
            counter_timeout_secs: 3,
            dynamodb_endpoint: None,
            disable_remote_counter: false,
            verbose: false,
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("host", &self.host)?;
        validate_range("port", self.port, 1, u16::MAX)?;
        validate_non_empty_string("secret_key", &self.secret_key)?;
        validate_aws_region("region", &self.region)?;
        validate_table_name("table", &self.table)?;
        validate_s3_bucket_name("bucket", &self.bucket)?;
        validate_range("counter_timeout_secs", self.counter_timeout_secs, 1, 60)?;

        if let Some(endpoint) = &self.dynamodb_endpoint {
            validate_url("dynamodb_endpoint", endpoint)?;
        }

        if self.mode == RunMode::Production && self.secret_key == DEFAULT_SECRET_KEY {
            tracing::warn!("⚠️ SECRET_KEY is using the development default in production mode");
        }

        tracing::debug!("✅ Configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_cli_defaults() {
        let parsed = AppConfig::try_parse_from(["portfolio-dashboard"]).unwrap();
        let defaults = AppConfig::default();

        assert_eq!(parsed.table, defaults.table);
        assert_eq!(parsed.bucket, defaults.bucket);
        assert_eq!(parsed.mode, RunMode::Production);
        assert_eq!(parsed.counter_timeout_secs, 3);
    }

    #[test]
    fn test_cli_flags() {
        let parsed = AppConfig::try_parse_from([
            "portfolio-dashboard",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--env",
            "development",
            "--disable-remote-counter",
        ])
        .unwrap();

        assert_eq!(parsed.port, 8080);
        assert!(parsed.is_development());
        assert!(parsed.disable_remote_counter);
        assert_eq!(parsed.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_validation() {
        assert!(AppConfig::default().validate().is_ok());

        let config = AppConfig {
            port: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());

        let config = AppConfig {
            counter_timeout_secs: 120,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());

        let config = AppConfig {
            dynamodb_endpoint: Some("localhost:8000".to_string()),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
