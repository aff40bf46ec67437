use std::collections::BTreeMap;

use serde::Serialize;
use tutor_model::{ControlId, Value};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ControlKind {
    /// Click counter (`n_clicks`), starts at zero.
    Button,
    Slider { min: f64, max: f64, step: f64 },
    NumberInput,
    TextInput,
    /// Page-session state written only by bindings.
    Store,
}

impl ControlKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Slider { .. } => "slider",
            Self::NumberInput => "number",
            Self::TextInput => "text",
            Self::Store => "store",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Control {
    pub id: ControlId,
    pub kind: ControlKind,
    pub initial: Value,
}

impl Control {
    pub fn new(id: ControlId, kind: ControlKind, initial: Value) -> Self {
        Self { id, kind, initial }
    }

    /// Bring a user-supplied value into the control's domain.
    ///
    /// Sliders clamp to their range and snap to their step. Number inputs
    /// parse typed text and drop what does not parse; text inputs keep the
    /// literal exactly as typed. Buttons and stores take the value as given.
    pub fn normalize(&self, value: Value) -> Value {
        match (&self.kind, value) {
            (ControlKind::NumberInput, Value::Text(text)) => match Value::from_literal(&text) {
                Value::Text(_) => Value::Empty,
                parsed => parsed,
            },
            (ControlKind::TextInput, Value::Number(number)) => Value::Text(number.to_string()),
            (ControlKind::Slider { min, max, step }, value) => {
                let Some(number) = value.as_number() else {
                    return self.initial.clone();
                };
                let clamped = number.clamp(*min, *max);
                let snapped = if *step > 0.0 {
                    min + ((clamped - min) / step).round() * step
                } else {
                    clamped
                };
                Value::Number(snapped.min(*max))
            }
            (_, value) => value,
        }
    }
}

/// Current value of every control of a page session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InputRegistry {
    values: BTreeMap<ControlId, Value>,
}

impl InputRegistry {
    pub fn from_controls<'a>(controls: impl IntoIterator<Item = &'a Control>) -> Self {
        let values = controls
            .into_iter()
            .map(|control| (control.id.clone(), control.initial.clone()))
            .collect();
        Self { values }
    }

    pub fn get(&self, id: &str) -> Option<&Value> {
        self.values.get(id)
    }

    /// Replace a value, returning the previous one.
    pub fn set(&mut self, id: &ControlId, value: Value) -> Option<Value> {
        self.values.insert(id.clone(), value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ControlId, &Value)> {
        self.values.iter()
    }
}
