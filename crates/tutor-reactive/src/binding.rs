//! Bindings: declared pure functions from named inputs to named outputs.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use tutor_model::{ControlId, Payload, TargetId, Value};

use crate::control::InputRegistry;
use crate::error::BindingError;

/// Producer function of a binding.
///
/// Returns one payload per declared destination, in declaration order.
pub type BindingFn =
    Box<dyn Fn(&BindingInputs<'_>) -> Result<Vec<Payload>, BindingError> + Send + Sync>;

/// A resolved node of the page graph.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeRef {
    Control(ControlId),
    Target(TargetId),
}

impl NodeRef {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Control(id) => id.as_str(),
            Self::Target(id) => id.as_str(),
        }
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct Binding {
    pub(crate) name: String,
    pub(crate) declared_sources: Vec<String>,
    pub(crate) declared_destinations: Vec<String>,
    pub(crate) sources: Vec<NodeRef>,
    pub(crate) destinations: Vec<NodeRef>,
    pub(crate) func: BindingFn,
}

impl Binding {
    /// Declare a binding. Identifiers are resolved against the page's
    /// controls when the page is built.
    pub fn new<'a, F>(
        name: impl Into<String>,
        sources: impl IntoIterator<Item = &'a str>,
        destinations: impl IntoIterator<Item = &'a str>,
        func: F,
    ) -> Self
    where
        F: Fn(&BindingInputs<'_>) -> Result<Vec<Payload>, BindingError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            declared_sources: sources.into_iter().map(str::to_string).collect(),
            declared_destinations: destinations.into_iter().map(str::to_string).collect(),
            sources: Vec::new(),
            destinations: Vec::new(),
            func: Box::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sources(&self) -> &[NodeRef] {
        &self.sources
    }

    pub fn destinations(&self) -> &[NodeRef] {
        &self.destinations
    }

    pub(crate) fn reads(&self, node: &str) -> bool {
        self.sources.iter().any(|source| source.as_str() == node)
    }

    pub(crate) fn evaluate(
        &self,
        inputs: &BindingInputs<'_>,
    ) -> Result<Vec<Payload>, BindingError> {
        (self.func)(inputs)
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("name", &self.name)
            .field("sources", &self.declared_sources)
            .field("destinations", &self.declared_destinations)
            .finish_non_exhaustive()
    }
}

/// Read-only view of the values a binding declared as its sources.
pub struct BindingInputs<'a> {
    binding: &'a Binding,
    controls: &'a InputRegistry,
    targets: &'a BTreeMap<TargetId, Payload>,
    triggered: &'a BTreeSet<ControlId>,
}

impl<'a> BindingInputs<'a> {
    pub(crate) fn new(
        binding: &'a Binding,
        controls: &'a InputRegistry,
        targets: &'a BTreeMap<TargetId, Payload>,
        triggered: &'a BTreeSet<ControlId>,
    ) -> Self {
        Self {
            binding,
            controls,
            targets,
            triggered,
        }
    }

    fn declared(&self, id: &str) -> Result<&'a NodeRef, BindingError> {
        self.binding
            .sources
            .iter()
            .find(|source| source.as_str() == id)
            .ok_or_else(|| BindingError::UndeclaredInput(id.to_string()))
    }

    /// Current value of a source control. A source that has no value yet
    /// (or is a render target) reads as `Value::Empty`.
    pub fn value(&self, id: &str) -> Result<&'a Value, BindingError> {
        static EMPTY: Value = Value::Empty;
        match self.declared(id)? {
            NodeRef::Control(control) => Ok(self.controls.get(control.as_str()).unwrap_or(&EMPTY)),
            NodeRef::Target(_) => Ok(&EMPTY),
        }
    }

    /// Current payload of a source render target, if it was produced yet.
    pub fn payload(&self, id: &str) -> Result<Option<&'a Payload>, BindingError> {
        match self.declared(id)? {
            NodeRef::Target(target) => Ok(self.targets.get(target.as_str())),
            NodeRef::Control(_) => Ok(None),
        }
    }

    /// Numeric value of a source, zero when missing.
    pub fn number(&self, id: &str) -> Result<f64, BindingError> {
        Ok(self.value(id)?.number_or_zero())
    }

    /// Numeric value of a source, `None` when missing or not numeric.
    pub fn opt_number(&self, id: &str) -> Result<Option<f64>, BindingError> {
        Ok(self.value(id)?.as_number())
    }

    pub fn text(&self, id: &str) -> Result<Cow<'a, str>, BindingError> {
        Ok(self.value(id)?.as_text())
    }

    pub fn sequence(&self, id: &str) -> Result<&'a [f64], BindingError> {
        Ok(self.value(id)?.as_sequence())
    }

    /// Controls whose change caused this evaluation. Empty on initial load.
    pub fn triggered(&self) -> impl Iterator<Item = &'a ControlId> + use<'a> {
        let binding = self.binding;
        self.triggered
            .iter()
            .filter(move |id| binding.reads(id.as_str()))
    }

    /// The single triggering control among this binding's sources, if any.
    ///
    /// When several sources changed in one coalesced pass the one declared
    /// last wins.
    pub fn trigger(&self) -> Option<&'a ControlId> {
        self.binding
            .sources
            .iter()
            .rev()
            .find_map(|source| match source {
                NodeRef::Control(id) if self.triggered.contains(id) => Some(id),
                _ => None,
            })
    }

    pub fn was_triggered(&self, id: &str) -> bool {
        self.triggered.contains(id) && self.binding.reads(id)
    }

    pub fn is_initial_load(&self) -> bool {
        self.triggered.is_empty()
    }
}
