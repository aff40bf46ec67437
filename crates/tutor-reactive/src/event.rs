use tutor_model::{ControlId, Value};

/// A user interaction: the named control now holds `value`.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub control: ControlId,
    pub value: Value,
}

impl Event {
    pub fn new(control: ControlId, value: impl Into<Value>) -> Self {
        Self {
            control,
            value: value.into(),
        }
    }
}
