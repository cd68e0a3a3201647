//! Client configuration: region, partition and the fixed fake account id.

use crate::error::{SageFakerError, SageFakerResult};
use serde::{Deserialize, Serialize};

/// Account id used in every generated ARN so test expectations stay stable.
pub const DEFAULT_ACCOUNT_ID: &str = "12345";
pub const DEFAULT_PARTITION: &str = "aws";
pub const SERVICE_NAME: &str = "sagemaker";

/// Environment variables consulted by [`ClientConfig::from_env`], in order.
const REGION_ENV_VARS: [&str; 2] = ["AWS_REGION", "AWS_DEFAULT_REGION"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub region: String,
    #[serde(default = "default_partition")]
    pub partition: String,
    #[serde(default = "default_account_id")]
    pub account_id: String,
}

fn default_partition() -> String {
    DEFAULT_PARTITION.to_string()
}

fn default_account_id() -> String {
    DEFAULT_ACCOUNT_ID.to_string()
}

impl ClientConfig {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            partition: default_partition(),
            account_id: default_account_id(),
        }
    }

    /// Resolve the region from `AWS_REGION`, falling back to
    /// `AWS_DEFAULT_REGION`, the same order the AWS SDKs use.
    pub fn from_env() -> SageFakerResult<Self> {
        let region = REGION_ENV_VARS
            .iter()
            .find_map(|var| std::env::var(var).ok().filter(|v| !v.trim().is_empty()))
            .ok_or_else(|| {
                SageFakerError::config(format!(
                    "No region configured; set one of {}",
                    REGION_ENV_VARS.join(", ")
                ))
            })?;
        log::debug!("Resolved region '{}' from environment", region);
        let config = Self::new(region.trim());
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON configuration object such as `{"region": "eu-west-1"}`.
    pub fn from_json_str(json: &str) -> SageFakerResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| SageFakerError::config(format!("Failed to parse client config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SageFakerResult<()> {
        for (name, value) in [
            ("region", &self.region),
            ("partition", &self.partition),
            ("account_id", &self.account_id),
        ] {
            if value.is_empty() {
                return Err(SageFakerError::config(format!("{name} must not be empty")));
            }
            if value.contains(':') {
                return Err(SageFakerError::config(format!(
                    "{name} must not contain ':' (got '{value}')"
                )));
            }
        }
        Ok(())
    }

    /// ARN for an endpoint with the given name.
    pub fn endpoint_arn(&self, endpoint_name: &str) -> String {
        format!(
            "arn:{}:{}:{}:{}:endpoint/{}",
            self.partition, SERVICE_NAME, self.region, self.account_id, endpoint_name
        )
    }
}
