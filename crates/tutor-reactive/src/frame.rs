use serde::Serialize;
use tutor_model::{ControlId, Payload, TargetId, Value};

use crate::error::BindingError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetUpdate {
    pub target: TargetId,
    pub payload: Payload,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlUpdate {
    pub control: ControlId,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BindingFailure {
    pub binding: String,
    #[serde(serialize_with = "serialize_error")]
    pub error: BindingError,
}

fn serialize_error<S: serde::Serializer>(
    error: &BindingError,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

/// Everything one load or dispatch changed, in evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Frame {
    pub triggered: Vec<ControlId>,
    /// Names of the bindings that ran successfully.
    pub evaluated: Vec<String>,
    pub updates: Vec<TargetUpdate>,
    pub control_updates: Vec<ControlUpdate>,
    pub failures: Vec<BindingFailure>,
    /// Bindings not run because one of their inputs failed to update.
    pub skipped: Vec<String>,
}

impl Frame {
    pub fn update(&self, target: &str) -> Option<&Payload> {
        self.updates
            .iter()
            .find(|update| update.target.as_str() == target)
            .map(|update| &update.payload)
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty() && self.control_updates.is_empty() && self.failures.is_empty()
    }
}
