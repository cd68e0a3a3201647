//! Error types for the fake SageMaker client.

use crate::types::ResourceKind;
use thiserror::Error;

/// Errors returned by [`SageFakerClient`](crate::SageFakerClient) and its
/// paginators and waiters.
#[derive(Debug, Error)]
pub enum SageFakerError {
    /// The supplied field set does not match the resource's required fields.
    #[error("Invalid {kind} request: missing fields {missing:?}, unexpected fields {unexpected:?}")]
    Schema {
        kind: ResourceKind,
        missing: Vec<String>,
        unexpected: Vec<String>,
    },

    /// The identity field is present but is not a string.
    #[error("Invalid {kind} request: {field} must be a string")]
    IdentityType {
        kind: ResourceKind,
        field: &'static str,
    },

    /// A resource with the same name already exists.
    #[error("{kind} '{name}' already exists")]
    DuplicateResource { kind: ResourceKind, name: String },

    /// No resource with the given name exists.
    #[error("Could not find {kind} '{name}'")]
    NotFound { kind: ResourceKind, name: String },

    /// More than one stored resource shares a name. This is a bug in the
    /// store, never a caller error.
    #[error("{field} should be unique but {count} {kind} resources were discovered with the name '{name}'")]
    InvariantViolation {
        kind: ResourceKind,
        field: &'static str,
        name: String,
        count: usize,
    },

    /// The named paginator or waiter is not supported.
    #[error("SageFakerClient.{operation} does not yet support {name}")]
    UnsupportedOperation {
        operation: &'static str,
        name: String,
    },

    /// The arguments passed to a waiter were not the expected keyword set.
    #[error("Invalid waiter arguments: expected {expected:?}, got {actual:?}")]
    Argument {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    /// The waited-for resource was not found on the single lookup attempt.
    #[error("Waiter {waiter} failed: no resource found for {selector}='{value}'")]
    TimeoutOrNotFound {
        waiter: &'static str,
        selector: &'static str,
        value: String,
    },

    /// A request could not be converted to or from a JSON record.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The client configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SageFakerError {
    /// Creates a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether the error was caused by the caller's input rather than by a
    /// broken store invariant or bad configuration.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::InvariantViolation { .. } | Self::Config(_))
    }
}

/// Result type alias for fake SageMaker operations
pub type SageFakerResult<T> = Result<T, SageFakerError>;
