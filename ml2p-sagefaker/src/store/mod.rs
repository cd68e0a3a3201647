//! Resource store: one collection per resource kind plus the create and
//! describe rules shared by all of them.

mod collection;
mod schema;

pub use collection::Collection;

use crate::config::ClientConfig;
use crate::error::{SageFakerError, SageFakerResult};
use crate::types::{Record, ResourceKind};
use log::{debug, warn};
use serde::Serialize;
use serde_json::Value;

/// Field added to every endpoint at creation time.
pub const ENDPOINT_ARN_FIELD: &str = "EndpointArn";

#[derive(Debug, Clone)]
pub struct ResourceStore {
    config: ClientConfig,
    training_jobs: Collection,
    models: Collection,
    endpoint_configs: Collection,
    endpoints: Collection,
}

impl ResourceStore {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            training_jobs: Collection::new(ResourceKind::TrainingJob),
            models: Collection::new(ResourceKind::Model),
            endpoint_configs: Collection::new(ResourceKind::EndpointConfig),
            endpoints: Collection::new(ResourceKind::Endpoint),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn collection(&self, kind: ResourceKind) -> &Collection {
        match kind {
            ResourceKind::TrainingJob => &self.training_jobs,
            ResourceKind::Model => &self.models,
            ResourceKind::EndpointConfig => &self.endpoint_configs,
            ResourceKind::Endpoint => &self.endpoints,
        }
    }

    fn collection_mut(&mut self, kind: ResourceKind) -> &mut Collection {
        match kind {
            ResourceKind::TrainingJob => &mut self.training_jobs,
            ResourceKind::Model => &mut self.models,
            ResourceKind::EndpointConfig => &mut self.endpoint_configs,
            ResourceKind::Endpoint => &mut self.endpoints,
        }
    }

    /// Validate and store a new resource, returning a copy of what was stored.
    ///
    /// The stored record never shares state with `request` or with the
    /// returned value. On any error the collection is left unchanged.
    pub fn create<R: Serialize + ?Sized>(
        &mut self,
        kind: ResourceKind,
        request: &R,
    ) -> SageFakerResult<Record> {
        let mut record = Record::from_serialize(request)?;

        if let Err(e) = schema::validate_fields(kind, &record) {
            warn!("Rejected {} create: {}", kind, e);
            return Err(e);
        }

        if kind == ResourceKind::Endpoint {
            let arn = record
                .identity(kind)
                .map(|name| self.config.endpoint_arn(name))
                .unwrap_or_default();
            record.insert(ENDPOINT_ARN_FIELD, Value::String(arn));
        }

        match self.collection_mut(kind).insert(record) {
            Ok(stored) => {
                debug!(
                    "Created {} '{}'",
                    kind,
                    stored.identity(kind).unwrap_or_default()
                );
                Ok(stored.clone())
            }
            Err(e) => {
                warn!("Rejected {} create: {}", kind, e);
                Err(e)
            }
        }
    }

    /// Borrow the stored record named `name`, if any.
    pub fn get(&self, kind: ResourceKind, name: &str) -> SageFakerResult<Option<&Record>> {
        self.collection(kind).get(name)
    }

    /// Copy of the stored record named `name`.
    pub fn describe(&self, kind: ResourceKind, name: &str) -> SageFakerResult<Record> {
        debug!("Describing {} '{}'", kind, name);
        self.get(kind, name)?
            .cloned()
            .ok_or_else(|| SageFakerError::NotFound {
                kind,
                name: name.to_string(),
            })
    }

    /// Copy of every record of `kind`, in creation order.
    pub fn snapshot(&self, kind: ResourceKind) -> Vec<Record> {
        self.collection(kind).records().to_vec()
    }

    #[cfg(test)]
    pub(crate) fn push_unchecked(&mut self, kind: ResourceKind, record: Record) {
        self.collection_mut(kind).push_unchecked(record);
    }
}
