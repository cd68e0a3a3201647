//! Append-only collection of records of one resource kind.

use crate::error::{SageFakerError, SageFakerResult};
use crate::types::{Record, ResourceKind};
use log::{error, trace};

#[derive(Debug, Clone)]
pub struct Collection {
    kind: ResourceKind,
    records: Vec<Record>,
}

impl Collection {
    pub fn new(kind: ResourceKind) -> Self {
        Self {
            kind,
            records: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Stored records in creation order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Look up the record named `name`.
    ///
    /// Returns `Ok(None)` when nothing matches. More than one match means
    /// uniqueness enforcement was bypassed and is reported as
    /// [`SageFakerError::InvariantViolation`].
    pub fn get(&self, name: &str) -> SageFakerResult<Option<&Record>> {
        trace!("Looking up {} '{}'", self.kind, name);
        let mut matches = self
            .records
            .iter()
            .filter(|r| r.identity(self.kind) == Some(name));

        let Some(first) = matches.next() else {
            return Ok(None);
        };

        let extra = matches.count();
        if extra > 0 {
            let field = self.kind.identity_field();
            error!(
                "{} should be unique but {} {} records share the name '{}'",
                field,
                extra + 1,
                self.kind,
                name
            );
            return Err(SageFakerError::InvariantViolation {
                kind: self.kind,
                field,
                name: name.to_string(),
                count: extra + 1,
            });
        }
        Ok(Some(first))
    }

    /// Append `record` unless one with the same name already exists.
    /// The record must already have passed schema validation.
    pub(crate) fn insert(&mut self, record: Record) -> SageFakerResult<&Record> {
        let name = record
            .identity(self.kind)
            .ok_or(SageFakerError::IdentityType {
                kind: self.kind,
                field: self.kind.identity_field(),
            })?;

        if self.get(name)?.is_some() {
            return Err(SageFakerError::DuplicateResource {
                kind: self.kind,
                name: name.to_string(),
            });
        }

        self.records.push(record);
        let index = self.records.len() - 1;
        Ok(&self.records[index])
    }

    /// Append without the uniqueness check, for exercising corruption paths.
    #[cfg(test)]
    pub(crate) fn push_unchecked(&mut self, record: Record) {
        self.records.push(record);
    }
}
