use serde::{Deserialize, Serialize};

use crate::{Figure, Value};

/// Content delivered to a render target by a binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Payload {
    Figure(Box<Figure>),
    Text(String),
    /// New value for a control or store written back by its own binding.
    Value(Value),
    Region(RegionFill),
    Grid(GridSpec),
    Empty,
}

impl Payload {
    pub fn figure(figure: Figure) -> Self {
        Self::Figure(Box::new(figure))
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn as_figure(&self) -> Option<&Figure> {
        match self {
            Self::Figure(figure) => Some(figure),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }
}

/// Fill style of a static SVG region (used by the Venn diagram).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionFill {
    pub fill: String,
    pub opacity: f64,
}

impl RegionFill {
    pub const NONE: &'static str = "none";

    pub fn hidden() -> Self {
        Self {
            fill: Self::NONE.to_string(),
            opacity: 0.0,
        }
    }

    pub fn highlighted(color: &str) -> Self {
        Self {
            fill: color.to_string(),
            opacity: 1.0,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.fill != Self::NONE && self.opacity > 0.0
    }
}

/// A grid of equally sized squares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub rows: u32,
    pub cols: u32,
    pub square_size: f64,
    pub color: String,
}

impl GridSpec {
    pub fn cell_count(&self) -> u64 {
        u64::from(self.rows) * u64::from(self.cols)
    }
}
