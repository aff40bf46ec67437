//! Declarative reactive-update graph for tutor pages.
//!
//! A [`Page`] declares its controls and a set of [`Binding`]s, each a pure
//! function from named inputs to named outputs. A [`Session`] owns the live
//! state of one loaded page and re-evaluates exactly the bindings affected by
//! an input change, in dependency order, returning one [`Frame`] of updates.
//!
//! # Example
//!
//! ```ignore
//! use tutor_reactive::{Binding, Page, Session};
//!
//! let page = Page::builder("/counter", "Counter")
//!     .button("btn-inc")
//!     .binding(Binding::new("show", ["btn-inc"], ["label"], |inputs| {
//!         Ok(vec![Payload::text(format!("{}", inputs.number("btn-inc")?))])
//!     }))
//!     .build()?;
//! let mut session = Session::new(page.into());
//! session.load();
//! let frame = session.click("btn-inc")?;
//! ```

pub mod binding;
pub mod control;
pub mod error;
pub mod event;
pub mod frame;
pub mod layout;
pub mod page;
pub mod session;

pub use binding::{Binding, BindingFn, BindingInputs, NodeRef};
pub use control::{Control, ControlKind, InputRegistry};
pub use error::{BindingError, GraphError, SessionError};
pub use event::Event;
pub use frame::{BindingFailure, ControlUpdate, Frame, TargetUpdate};
pub use layout::{LayoutNode, SvgElement};
pub use page::{Page, PageBuilder};
pub use session::{RenderState, Session};
