//! Required-field validation for create requests.

use crate::error::{SageFakerError, SageFakerResult};
use crate::types::{Record, ResourceKind};
use std::collections::BTreeSet;

/// Check that `record` supplies exactly the fields `kind` requires and that
/// its identity field is a string.
pub(crate) fn validate_fields(kind: ResourceKind, record: &Record) -> SageFakerResult<()> {
    let required: BTreeSet<&str> = kind.required_fields().iter().copied().collect();
    let supplied: BTreeSet<&str> = record.field_names().collect();

    if required != supplied {
        let missing = required
            .difference(&supplied)
            .map(|f| (*f).to_string())
            .collect();
        let unexpected = supplied
            .difference(&required)
            .map(|f| (*f).to_string())
            .collect();
        return Err(SageFakerError::Schema {
            kind,
            missing,
            unexpected,
        });
    }

    if record.identity(kind).is_none() {
        return Err(SageFakerError::IdentityType {
            kind,
            field: kind.identity_field(),
        });
    }

    Ok(())
}
