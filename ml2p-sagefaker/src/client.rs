//! The fake SageMaker client.
//!
//! `SageFakerClient` mirrors the subset of the boto3 SageMaker client that
//! ml2p uses: create/describe for training jobs, models, endpoint configs and
//! endpoints, the matching list paginators, and the training job waiter.
//! Each client owns its own resources; nothing is shared between instances.

use crate::config::ClientConfig;
use crate::error::{SageFakerError, SageFakerResult};
use crate::pagination::Paginator;
use crate::store::{Collection, ResourceStore};
use crate::types::{Record, ResourceKind};
use crate::waiter::Waiter;
use serde::Serialize;

/// Name of the only waiter the fake client supports.
pub const TRAINING_JOB_COMPLETED_OR_STOPPED: &str = "training_job_completed_or_stopped";

#[derive(Debug, Clone)]
pub struct SageFakerClient {
    store: ResourceStore,
}

impl SageFakerClient {
    /// Create a client for `aws_region` with the default partition and
    /// fake account id.
    pub fn new(aws_region: impl Into<String>) -> Self {
        Self::with_config(ClientConfig::new(aws_region))
    }

    pub fn with_config(config: ClientConfig) -> Self {
        log::debug!("Creating SageFakerClient for region {}", config.region);
        Self {
            store: ResourceStore::new(config),
        }
    }

    /// Create a client whose region comes from the environment.
    pub fn from_env() -> SageFakerResult<Self> {
        Ok(Self::with_config(ClientConfig::from_env()?))
    }

    pub fn config(&self) -> &ClientConfig {
        self.store.config()
    }

    pub fn region(&self) -> &str {
        &self.store.config().region
    }

    /// Read-only view of the stored resources of one kind.
    pub fn collection(&self, kind: ResourceKind) -> &Collection {
        self.store.collection(kind)
    }

    /// Look up a paginator by its boto3 operation name, e.g. `list_models`.
    pub fn get_paginator(&self, name: &str) -> SageFakerResult<Paginator> {
        match ResourceKind::from_paginator_name(name) {
            Some(ResourceKind::TrainingJob) => Ok(self.list_training_jobs()),
            Some(ResourceKind::Model) => Ok(self.list_models()),
            Some(ResourceKind::Endpoint) => Ok(self.list_endpoints()),
            Some(ResourceKind::EndpointConfig) => Ok(self.list_endpoint_configs()),
            None => Err(SageFakerError::UnsupportedOperation {
                operation: "get_paginator",
                name: name.to_string(),
            }),
        }
    }

    pub fn list_training_jobs(&self) -> Paginator {
        self.paginator(ResourceKind::TrainingJob)
    }

    pub fn list_models(&self) -> Paginator {
        self.paginator(ResourceKind::Model)
    }

    pub fn list_endpoints(&self) -> Paginator {
        self.paginator(ResourceKind::Endpoint)
    }

    pub fn list_endpoint_configs(&self) -> Paginator {
        self.paginator(ResourceKind::EndpointConfig)
    }

    fn paginator(&self, kind: ResourceKind) -> Paginator {
        Paginator::new(kind.summary_title(), self.store.snapshot(kind))
    }

    /// Look up a waiter by name. Only `training_job_completed_or_stopped` is
    /// supported.
    pub fn get_waiter(&self, name: &str) -> SageFakerResult<Waiter<'_>> {
        if name == TRAINING_JOB_COMPLETED_OR_STOPPED {
            return Ok(self.training_job_completed_or_stopped());
        }
        Err(SageFakerError::UnsupportedOperation {
            operation: "get_waiter",
            name: name.to_string(),
        })
    }

    /// Waiter keyed by `TrainingJobName`. Succeeds if the job exists.
    pub fn training_job_completed_or_stopped(&self) -> Waiter<'_> {
        let store = &self.store;
        let kind = ResourceKind::TrainingJob;
        Waiter::new(
            TRAINING_JOB_COMPLETED_OR_STOPPED,
            kind.identity_field(),
            move |name| store.get(kind, name),
        )
    }

    pub fn create_training_job<R: Serialize + ?Sized>(
        &mut self,
        request: &R,
    ) -> SageFakerResult<Record> {
        self.store.create(ResourceKind::TrainingJob, request)
    }

    pub fn describe_training_job(&self, training_job_name: &str) -> SageFakerResult<Record> {
        self.store
            .describe(ResourceKind::TrainingJob, training_job_name)
    }

    pub fn create_model<R: Serialize + ?Sized>(&mut self, request: &R) -> SageFakerResult<Record> {
        self.store.create(ResourceKind::Model, request)
    }

    pub fn describe_model(&self, model_name: &str) -> SageFakerResult<Record> {
        self.store.describe(ResourceKind::Model, model_name)
    }

    pub fn create_endpoint_config<R: Serialize + ?Sized>(
        &mut self,
        request: &R,
    ) -> SageFakerResult<Record> {
        self.store.create(ResourceKind::EndpointConfig, request)
    }

    pub fn describe_endpoint_config(&self, endpoint_config_name: &str) -> SageFakerResult<Record> {
        self.store
            .describe(ResourceKind::EndpointConfig, endpoint_config_name)
    }

    /// Create an endpoint. The stored record gains an `EndpointArn` built
    /// from the client's region and the endpoint name.
    pub fn create_endpoint<R: Serialize + ?Sized>(
        &mut self,
        request: &R,
    ) -> SageFakerResult<Record> {
        self.store.create(ResourceKind::Endpoint, request)
    }

    pub fn describe_endpoint(&self, endpoint_name: &str) -> SageFakerResult<Record> {
        self.store.describe(ResourceKind::Endpoint, endpoint_name)
    }

    #[cfg(test)]
    pub(crate) fn store_mut(&mut self) -> &mut ResourceStore {
        &mut self.store
    }
}
