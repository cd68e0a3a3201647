//! Fake waiters.
//!
//! A real SageMaker waiter polls until the resource reaches a terminal state.
//! The fake performs exactly one lookup: the wait succeeds if the resource
//! exists and fails otherwise. Callers that need real polling must loop
//! themselves, re-fetching the waiter between attempts.

use crate::error::{SageFakerError, SageFakerResult};
use crate::types::{Record, WaiterConfig};
use log::{debug, trace};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// Keyword under which polling settings are passed to [`Waiter::wait`].
pub const WAITER_CONFIG_KEY: &str = "WaiterConfig";

type Lookup<'a> = Box<dyn Fn(&str) -> SageFakerResult<Option<&'a Record>> + 'a>;

pub struct Waiter<'a> {
    name: &'static str,
    selector_name: &'static str,
    selector: Lookup<'a>,
}

impl<'a> Waiter<'a> {
    /// * `name` - waiter name, used in errors and logs
    /// * `selector_name` - keyword passed to [`wait`](Self::wait) that selects
    ///   the resource to wait on
    /// * `selector` - looks up the resource by that keyword's value, returning
    ///   `None` if it does not exist
    pub fn new<F>(name: &'static str, selector_name: &'static str, selector: F) -> Self
    where
        F: Fn(&str) -> SageFakerResult<Option<&'a Record>> + 'a,
    {
        Self {
            name,
            selector_name,
            selector: Box::new(selector),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn selector_name(&self) -> &'static str {
        self.selector_name
    }

    /// Wait using boto3-style keyword arguments, e.g.
    /// `{"TrainingJobName": "job-1", "WaiterConfig": {"Delay": 30}}`.
    ///
    /// The argument keys must be exactly the selector keyword and
    /// `WaiterConfig`. The `WaiterConfig` value itself is never validated.
    pub fn wait<A: Serialize + ?Sized>(&self, args: &A) -> SageFakerResult<()> {
        let args = match serde_json::to_value(args)? {
            Value::Object(map) => map,
            _ => return Err(self.argument_error(Vec::new())),
        };

        let mut actual: Vec<String> = args.keys().cloned().collect();
        actual.sort_unstable();
        if actual.len() != 2
            || !args.contains_key(self.selector_name)
            || !args.contains_key(WAITER_CONFIG_KEY)
        {
            return Err(self.argument_error(actual));
        }

        let config = &args[WAITER_CONFIG_KEY];
        match serde_json::from_value::<WaiterConfig>(config.clone()) {
            Ok(parsed) => trace!(
                "Waiter {} polling settings ignored (delay={:?}, max_attempts={:?})",
                self.name,
                parsed.delay,
                parsed.max_attempts
            ),
            Err(e) => debug!(
                "Waiter {} ignoring unrecognised {} {}: {}",
                self.name,
                WAITER_CONFIG_KEY,
                config,
                e
            ),
        }

        // Stored names are always strings, so any other selector value has no match.
        match &args[self.selector_name] {
            Value::String(value) => self.attempt(value),
            other => Err(self.not_found(other.to_string())),
        }
    }

    /// Typed form of [`wait`](Self::wait).
    pub fn wait_for(&self, value: &str, config: &WaiterConfig) -> SageFakerResult<()> {
        let mut args = Map::new();
        args.insert(self.selector_name.to_string(), Value::String(value.to_string()));
        args.insert(WAITER_CONFIG_KEY.to_string(), serde_json::to_value(config)?);
        self.wait(&args)
    }

    fn attempt(&self, value: &str) -> SageFakerResult<()> {
        trace!(
            "Waiter {} checking {}='{}' once",
            self.name,
            self.selector_name,
            value
        );
        match (self.selector)(value)? {
            Some(_) => Ok(()),
            None => Err(self.not_found(value.to_string())),
        }
    }

    fn not_found(&self, value: String) -> SageFakerError {
        SageFakerError::TimeoutOrNotFound {
            waiter: self.name,
            selector: self.selector_name,
            value,
        }
    }

    fn argument_error(&self, actual: Vec<String>) -> SageFakerError {
        let mut expected = vec![self.selector_name.to_string(), WAITER_CONFIG_KEY.to_string()];
        expected.sort_unstable();
        SageFakerError::Argument { expected, actual }
    }
}

impl fmt::Debug for Waiter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Waiter")
            .field("name", &self.name)
            .field("selector_name", &self.selector_name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn things() -> Vec<Record> {
        vec![Record::from_serialize(&json!({"ThingName": "present"})).expect("object")]
    }

    fn waiter(records: &[Record]) -> Waiter<'_> {
        Waiter::new("thing_exists", "ThingName", move |name| {
            Ok(records.iter().find(|r| r.get_str("ThingName") == Some(name)))
        })
    }

    #[test]
    fn test_wait_succeeds_when_present() {
        let records = things();
        let waiter = waiter(&records);
        waiter
            .wait(&json!({"ThingName": "present", "WaiterConfig": {"Delay": 1}}))
            .expect("present resource should satisfy the waiter");
    }

    #[test]
    fn test_wait_fails_when_absent() {
        let records = things();
        let err = waiter(&records)
            .wait(&json!({"ThingName": "absent", "WaiterConfig": {}}))
            .unwrap_err();
        match err {
            SageFakerError::TimeoutOrNotFound {
                waiter,
                selector,
                value,
            } => {
                assert_eq!(waiter, "thing_exists");
                assert_eq!(selector, "ThingName");
                assert_eq!(value, "absent");
            }
            other => panic!("Expected TimeoutOrNotFound, got {other:?}"),
        }
    }

    #[rstest]
    #[case::missing_config(json!({"ThingName": "present"}))]
    #[case::missing_selector(json!({"WaiterConfig": {}}))]
    #[case::extra_key(json!({"ThingName": "present", "WaiterConfig": {}, "Other": 1}))]
    #[case::wrong_selector(json!({"Name": "present", "WaiterConfig": {}}))]
    #[case::not_a_map(json!("present"))]
    fn test_wait_rejects_bad_arguments(#[case] args: Value) {
        let records = things();
        let err = waiter(&records).wait(&args).unwrap_err();
        match err {
            SageFakerError::Argument { expected, .. } => {
                assert_eq!(expected, vec!["ThingName", "WaiterConfig"]);
            }
            other => panic!("Expected Argument error, got {other:?}"),
        }
    }

    #[rstest]
    #[case::null(json!(null))]
    #[case::unknown_key(json!({"Delay": 10, "Extra": 1}))]
    #[case::float_delay(json!({"Delay": 5.5}))]
    #[case::not_a_map(json!("soon"))]
    fn test_wait_treats_config_as_opaque(#[case] config: Value) {
        let records = things();
        let waiter = waiter(&records);
        waiter
            .wait(&json!({"ThingName": "present", "WaiterConfig": config.clone()}))
            .expect("any WaiterConfig value is accepted");
        let err = waiter
            .wait(&json!({"ThingName": "absent", "WaiterConfig": config}))
            .unwrap_err();
        assert!(matches!(err, SageFakerError::TimeoutOrNotFound { .. }));
    }

    #[test]
    fn test_wait_with_non_string_selector_finds_nothing() {
        let records = things();
        let err = waiter(&records)
            .wait(&json!({"ThingName": 3, "WaiterConfig": {}}))
            .unwrap_err();
        match err {
            SageFakerError::TimeoutOrNotFound { value, .. } => assert_eq!(value, "3"),
            other => panic!("Expected TimeoutOrNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_wait_for_builds_arguments() {
        let records = things();
        let waiter = waiter(&records);
        assert!(waiter.wait_for("present", &WaiterConfig::default()).is_ok());
        assert!(waiter.wait_for("absent", &WaiterConfig::default()).is_err());
    }

    #[test]
    fn test_lookup_errors_propagate() {
        let waiter = Waiter::new("broken", "ThingName", |name| {
            Err(SageFakerError::InvariantViolation {
                kind: crate::types::ResourceKind::TrainingJob,
                field: "TrainingJobName",
                name: name.to_string(),
                count: 2,
            })
        });
        let err = waiter
            .wait_for("x", &WaiterConfig::default())
            .unwrap_err();
        assert!(matches!(err, SageFakerError::InvariantViolation { .. }));
    }
}
