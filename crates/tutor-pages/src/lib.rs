//! Math tutor pages.
//!
//! - **geometry**: plane vectors, arcs, circle intersections, number formatting
//! - **trig**: sine parameters and the shared unit-circle chart
//! - **pages**: one module per page, each with its formulas and definition
//! - **registry**: lookup of pages by path and filtering by name

pub mod error;
pub mod geometry;
pub mod pages;
pub mod registry;
pub mod trig;

pub use error::{PageError, Result};
pub use registry::{PageEntry, PageRegistry, default_registry};
