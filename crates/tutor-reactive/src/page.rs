//! Page definition and validation.
//!
//! A page is assembled once with [`PageBuilder`] and is immutable afterwards.
//! [`PageBuilder::build`] resolves every binding identifier, checks the graph
//! invariants and stores the bindings in evaluation (topological) order, so
//! a session only ever has to walk them front to back.

use std::collections::{BTreeMap, BTreeSet};

use tutor_model::{ControlId, TargetId, Value};

use crate::binding::{Binding, NodeRef};
use crate::control::{Control, ControlKind};
use crate::error::GraphError;
use crate::layout::LayoutNode;

#[derive(Debug)]
pub struct Page {
    path: String,
    name: String,
    controls: Vec<Control>,
    bindings: Vec<Binding>,
    layout: Vec<LayoutNode>,
    /// Bindings reading each node, by binding index.
    dependents: BTreeMap<String, Vec<usize>>,
}

impl Page {
    pub fn builder(path: impl Into<String>, name: impl Into<String>) -> PageBuilder {
        PageBuilder {
            path: path.into(),
            name: name.into(),
            controls: Vec::new(),
            bindings: Vec::new(),
            layout: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    pub fn control(&self, id: &str) -> Option<&Control> {
        self.controls.iter().find(|control| control.id.as_str() == id)
    }

    /// Bindings in evaluation order.
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn layout(&self) -> &[LayoutNode] {
        &self.layout
    }

    /// Every render target produced by a binding, in evaluation order.
    pub fn targets(&self) -> Vec<&TargetId> {
        self.bindings
            .iter()
            .flat_map(|binding| binding.destinations.iter())
            .filter_map(|node| match node {
                NodeRef::Target(id) => Some(id),
                NodeRef::Control(_) => None,
            })
            .collect()
    }

    pub(crate) fn dependents(&self, node: &str) -> &[usize] {
        self.dependents
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

pub struct PageBuilder {
    path: String,
    name: String,
    controls: Vec<Control>,
    bindings: Vec<Binding>,
    layout: Vec<LayoutNode>,
    errors: Vec<GraphError>,
}

impl PageBuilder {
    #[must_use]
    pub fn control(mut self, id: &str, kind: ControlKind, initial: Value) -> Self {
        match ControlId::new(id) {
            Ok(id) => self.controls.push(Control::new(id, kind, initial)),
            Err(error) => self.errors.push(error.into()),
        }
        self
    }

    /// A button; its value is the click count.
    #[must_use]
    pub fn button(self, id: &str) -> Self {
        self.control(id, ControlKind::Button, Value::Number(0.0))
    }

    #[must_use]
    pub fn slider(self, id: &str, min: f64, max: f64, step: f64, initial: f64) -> Self {
        self.control(
            id,
            ControlKind::Slider { min, max, step },
            Value::Number(initial),
        )
    }

    #[must_use]
    pub fn number_input(self, id: &str, initial: Option<f64>) -> Self {
        let initial = initial.map_or(Value::Empty, Value::Number);
        self.control(id, ControlKind::NumberInput, initial)
    }

    #[must_use]
    pub fn text_input(self, id: &str) -> Self {
        self.control(id, ControlKind::TextInput, Value::Empty)
    }

    #[must_use]
    pub fn store(self, id: &str) -> Self {
        self.control(id, ControlKind::Store, Value::Empty)
    }

    #[must_use]
    pub fn binding(mut self, binding: Binding) -> Self {
        self.bindings.push(binding);
        self
    }

    #[must_use]
    pub fn layout(mut self, node: LayoutNode) -> Self {
        self.layout.push(node);
        self
    }

    pub fn build(mut self) -> Result<Page, GraphError> {
        if let Some(error) = self.errors.into_iter().next() {
            return Err(error);
        }

        let mut control_ids = BTreeSet::new();
        for control in &self.controls {
            if !control_ids.insert(control.id.as_str().to_string()) {
                return Err(GraphError::DuplicateControl(control.id.to_string()));
            }
        }

        // Resolve destinations first: a source may name any destination.
        let mut producers: BTreeMap<String, usize> = BTreeMap::new();
        let mut names = BTreeSet::new();
        for binding in &mut self.bindings {
            if !names.insert(binding.name.clone()) {
                return Err(GraphError::DuplicateBinding(binding.name.clone()));
            }
            if binding.declared_destinations.is_empty() {
                return Err(GraphError::NoDestinations(binding.name.clone()));
            }
            let mut destinations = Vec::with_capacity(binding.declared_destinations.len());
            for raw in &binding.declared_destinations {
                let node = if control_ids.contains(raw.trim()) {
                    if !binding.declared_sources.iter().any(|s| s.trim() == raw.trim()) {
                        return Err(GraphError::ForeignControlWrite {
                            binding: binding.name.clone(),
                            control: raw.clone(),
                        });
                    }
                    NodeRef::Control(ControlId::new(raw.as_str())?)
                } else {
                    NodeRef::Target(TargetId::new(raw.as_str())?)
                };
                destinations.push(node);
            }
            binding.destinations = destinations;
        }
        for (index, binding) in self.bindings.iter().enumerate() {
            for node in &binding.destinations {
                if let Some(first) = producers.insert(node.as_str().to_string(), index) {
                    return Err(GraphError::DuplicateProducer {
                        target: node.to_string(),
                        first: self.bindings[first].name.clone(),
                        second: binding.name.clone(),
                    });
                }
            }
        }

        for binding in &mut self.bindings {
            let mut sources = Vec::with_capacity(binding.declared_sources.len());
            for raw in &binding.declared_sources {
                let key = raw.trim();
                let node = if control_ids.contains(key) {
                    NodeRef::Control(ControlId::new(key)?)
                } else if producers.contains_key(key) {
                    NodeRef::Target(TargetId::new(key)?)
                } else {
                    return Err(GraphError::UnknownInput {
                        binding: binding.name.clone(),
                        input: raw.clone(),
                    });
                };
                sources.push(node);
            }
            binding.sources = sources;
        }

        for node in &self.layout {
            for reference in node.references() {
                if !control_ids.contains(reference) && !producers.contains_key(reference) {
                    return Err(GraphError::UnknownLayoutReference(reference.to_string()));
                }
            }
        }

        let order = evaluation_order(&self.bindings, &producers)?;
        let mut slots: Vec<Option<Binding>> = self.bindings.into_iter().map(Some).collect();
        let bindings: Vec<Binding> = order
            .into_iter()
            .filter_map(|index| slots[index].take())
            .collect();

        let mut dependents: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (index, binding) in bindings.iter().enumerate() {
            for source in &binding.sources {
                let readers = dependents.entry(source.as_str().to_string()).or_default();
                if !readers.contains(&index) {
                    readers.push(index);
                }
            }
        }

        Ok(Page {
            path: self.path,
            name: self.name,
            controls: self.controls,
            bindings,
            layout: self.layout,
            dependents,
        })
    }
}

/// Kahn's algorithm; ties keep declaration order. A binding writing back to
/// one of its own sources does not depend on itself.
fn evaluation_order(
    bindings: &[Binding],
    producers: &BTreeMap<String, usize>,
) -> Result<Vec<usize>, GraphError> {
    let count = bindings.len();
    let mut indegree = vec![0usize; count];
    let mut downstream: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); count];
    for (index, binding) in bindings.iter().enumerate() {
        for source in &binding.sources {
            if let Some(&producer) = producers.get(source.as_str()) {
                if producer != index && downstream[producer].insert(index) {
                    indegree[index] += 1;
                }
            }
        }
    }

    let mut ready: BTreeSet<usize> = (0..count).filter(|&i| indegree[i] == 0).collect();
    let mut order = Vec::with_capacity(count);
    while let Some(next) = ready.pop_first() {
        order.push(next);
        for &child in &downstream[next] {
            indegree[child] -= 1;
            if indegree[child] == 0 {
                ready.insert(child);
            }
        }
    }

    if order.len() != count {
        let stuck = (0..count)
            .filter(|&i| indegree[i] > 0)
            .map(|i| bindings[i].name.clone())
            .collect();
        return Err(GraphError::Cycle(stuck));
    }
    Ok(order)
}
