//! Control values.
//!
//! Controls report whatever the user entered, which may be nothing at all on
//! first load. Accessors therefore fall back to a neutral value (zero, the
//! empty string, the empty sequence) instead of failing.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Empty,
    Number(f64),
    Text(String),
    Sequence(Vec<f64>),
}

impl Value {
    /// Interpret a literal typed by a user: blank is `Empty`, anything that
    /// parses as a float is a `Number`, the rest is `Text`.
    pub fn from_literal(literal: &str) -> Self {
        let trimmed = literal.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(number) => Self::Number(number),
            Err(_) => Self::Text(literal.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.trim().is_empty(),
            Self::Sequence(values) => values.is_empty(),
            Self::Number(_) => false,
        }
    }

    /// Numeric view of the value. Text is parsed; sequences yield their last sample.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            Self::Text(text) => text.trim().parse().ok(),
            Self::Sequence(values) => values.last().copied(),
            Self::Empty => None,
        }
    }

    pub fn number_or_zero(&self) -> f64 {
        self.as_number().unwrap_or(0.0)
    }

    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text.as_str()),
            Self::Number(number) => Cow::Owned(number.to_string()),
            Self::Empty | Self::Sequence(_) => Cow::Borrowed(""),
        }
    }

    pub fn as_sequence(&self) -> &[f64] {
        match self {
            Self::Sequence(values) => values,
            _ => &[],
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<f64>> for Value {
    fn from(values: Vec<f64>) -> Self {
        Self::Sequence(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_classification() {
        assert_eq!(Value::from_literal("  "), Value::Empty);
        assert_eq!(Value::from_literal("2.5"), Value::Number(2.5));
        assert_eq!(Value::from_literal("1,2,3"), Value::Text("1,2,3".to_string()));
    }

    #[test]
    fn neutral_defaults() {
        assert_eq!(Value::Empty.number_or_zero(), 0.0);
        assert_eq!(Value::Empty.as_text(), "");
        assert!(Value::Empty.as_sequence().is_empty());
        assert!(Value::Text("   ".to_string()).is_empty());
    }
}
