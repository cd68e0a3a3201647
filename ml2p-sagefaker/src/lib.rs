//! A fake SageMaker client for testing ml2p without AWS:
//! - Training jobs, models, endpoint configs and endpoints with
//!   required-field validation and unique names
//! - Snapshot paginators for the four list operations
//! - A single-attempt `training_job_completed_or_stopped` waiter
//!

mod client;
mod config;
mod error;
mod pagination;
mod store;
mod types;
mod waiter;

pub use client::{SageFakerClient, TRAINING_JOB_COMPLETED_OR_STOPPED};
pub use config::{ClientConfig, DEFAULT_ACCOUNT_ID, DEFAULT_PARTITION, SERVICE_NAME};
pub use error::{SageFakerError, SageFakerResult};
pub use pagination::{Page, Pages, Paginator, DEFAULT_PER_PAGE};
pub use store::{Collection, ResourceStore, ENDPOINT_ARN_FIELD};
pub use types::{
    CreateEndpointConfigRequest, CreateEndpointRequest, CreateModelRequest,
    CreateTrainingJobRequest, EndpointDescription, Record, ResourceKind, Tag, WaiterConfig,
};
pub use waiter::{Waiter, WAITER_CONFIG_KEY};
