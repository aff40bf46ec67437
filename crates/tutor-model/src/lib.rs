//! Shared data types for the math tutor pages.
//!
//! - **ids**: control and render-target identifiers
//! - **value**: current values held by controls
//! - **payload**: what a binding delivers to a render target
//! - **figure**: declarative chart description consumed by the renderer

pub mod error;
pub mod figure;
pub mod ids;
pub mod payload;
pub mod value;

pub use error::{ModelError, Result};
pub use figure::{
    Annotation, Axis, Dash, Figure, Fill, Font, Layer, Layout, Line, Margin, Marker, MinorTicks,
    Mode, Shape, ShapeKind, Title, Trace,
};
pub use ids::{ControlId, TargetId};
pub use payload::{GridSpec, Payload, RegionFill};
pub use value::Value;
