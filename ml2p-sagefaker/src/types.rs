//! Core data types: resource kinds, stored records and typed request shapes.

use crate::error::{SageFakerError, SageFakerResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// The four SageMaker resource types tracked by the fake client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    TrainingJob,
    Model,
    EndpointConfig,
    Endpoint,
}

impl ResourceKind {
    pub const ALL: [Self; 4] = [
        Self::TrainingJob,
        Self::Model,
        Self::EndpointConfig,
        Self::Endpoint,
    ];

    /// Field whose value must be unique within the resource's collection.
    pub fn identity_field(self) -> &'static str {
        match self {
            Self::TrainingJob => "TrainingJobName",
            Self::Model => "ModelName",
            Self::EndpointConfig => "EndpointConfigName",
            Self::Endpoint => "EndpointName",
        }
    }

    /// Exact set of fields a create request must supply.
    pub fn required_fields(self) -> &'static [&'static str] {
        match self {
            Self::TrainingJob => &[
                "TrainingJobName",
                "AlgorithmSpecification",
                "EnableNetworkIsolation",
                "HyperParameters",
                "InputDataConfig",
                "OutputDataConfig",
                "ResourceConfig",
                "RoleArn",
                "StoppingCondition",
                "Tags",
            ],
            Self::Model => &[
                "ModelName",
                "PrimaryContainer",
                "ExecutionRoleArn",
                "Tags",
                "EnableNetworkIsolation",
            ],
            Self::EndpointConfig => &["EndpointConfigName", "Tags", "ProductionVariants"],
            Self::Endpoint => &["EndpointConfigName", "EndpointName", "Tags"],
        }
    }

    /// Key that list pages store their items under.
    pub fn summary_title(self) -> &'static str {
        match self {
            Self::TrainingJob => "TrainingJobSummaries",
            Self::Model => "Models",
            Self::EndpointConfig => "EndpointConfigs",
            Self::Endpoint => "Endpoints",
        }
    }

    /// Name accepted by [`SageFakerClient::get_paginator`](crate::SageFakerClient::get_paginator).
    pub fn paginator_name(self) -> &'static str {
        match self {
            Self::TrainingJob => "list_training_jobs",
            Self::Model => "list_models",
            Self::EndpointConfig => "list_endpoint_configs",
            Self::Endpoint => "list_endpoints",
        }
    }

    pub fn from_paginator_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.paginator_name() == name)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TrainingJob => "training job",
            Self::Model => "model",
            Self::EndpointConfig => "endpoint config",
            Self::Endpoint => "endpoint",
        };
        f.write_str(name)
    }
}

/// A single stored resource: field name to JSON value.
///
/// Records handed out by the client are always copies, so mutating one never
/// changes what the client has stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Build a record from any value that serializes to a JSON object.
    ///
    /// Serializing takes a full copy of the input, so the record shares no
    /// state with `value` afterwards.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> SageFakerResult<Self> {
        match serde_json::to_value(value)? {
            Value::Object(map) => Ok(Self(map)),
            other => Err(SageFakerError::Serialization(serde::de::Error::custom(
                format!("expected a JSON object, got {}", json_type_name(&other)),
            ))),
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    /// The record's name under `kind`'s identity field, if present and a string.
    pub fn identity(&self, kind: ResourceKind) -> Option<&str> {
        self.get_str(kind.identity_field())
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Set a field, returning its previous value.
    pub fn insert(&mut self, field: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(field.into(), value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Deserialize the record into a typed shape such as [`CreateModelRequest`].
    pub fn deserialize_into<T: DeserializeOwned>(&self) -> SageFakerResult<T> {
        Ok(serde_json::from_value(Value::Object(self.0.clone()))?)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Object(record.0)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A resource tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Arguments for `create_training_job`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CreateTrainingJobRequest {
    pub training_job_name: String,
    pub algorithm_specification: Value,
    pub enable_network_isolation: bool,
    pub hyper_parameters: BTreeMap<String, String>,
    pub input_data_config: Vec<Value>,
    pub output_data_config: Value,
    pub resource_config: Value,
    pub role_arn: String,
    pub stopping_condition: Value,
    pub tags: Vec<Tag>,
}

/// Arguments for `create_model`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CreateModelRequest {
    pub model_name: String,
    pub primary_container: Value,
    pub execution_role_arn: String,
    pub tags: Vec<Tag>,
    pub enable_network_isolation: bool,
}

/// Arguments for `create_endpoint_config`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CreateEndpointConfigRequest {
    pub endpoint_config_name: String,
    pub tags: Vec<Tag>,
    pub production_variants: Vec<Value>,
}

/// Arguments for `create_endpoint`. The endpoint ARN is derived by the
/// client and cannot be supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CreateEndpointRequest {
    pub endpoint_config_name: String,
    pub endpoint_name: String,
    pub tags: Vec<Tag>,
}

/// A stored endpoint as returned by `describe_endpoint`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EndpointDescription {
    pub endpoint_config_name: String,
    pub endpoint_name: String,
    pub tags: Vec<Tag>,
    pub endpoint_arn: String,
}

/// Polling settings passed to a waiter under the `WaiterConfig` keyword.
///
/// The fake waiter only performs a single lookup, so these are logged but
/// not acted on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WaiterConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<u32>,
}
