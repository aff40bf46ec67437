//! The re-evaluation driver.
//!
//! A [`Session`] is one loaded page: it owns the current control values and
//! the last payload delivered to every render target. Each user event is
//! processed to completion before the next one: the session collects every
//! binding reachable from the changed controls, evaluates them once each in
//! the page's topological order and returns the resulting [`Frame`].
//!
//! A binding that fails (returns an error or panics) updates nothing; the
//! bindings fed by its destinations are skipped for this frame and every
//! other binding still runs.

use std::collections::{BTreeMap, BTreeSet};
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info_span, warn};
use tutor_model::{ControlId, Payload, TargetId, Value};

use crate::binding::{BindingInputs, NodeRef};
use crate::control::{ControlKind, InputRegistry};
use crate::error::{BindingError, SessionError};
use crate::event::Event;
use crate::frame::{BindingFailure, ControlUpdate, Frame, TargetUpdate};
use crate::page::Page;

pub struct Session {
    page: Arc<Page>,
    inputs: InputRegistry,
    targets: BTreeMap<TargetId, Payload>,
}

/// Serializable snapshot of a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderState {
    pub page: String,
    pub controls: BTreeMap<ControlId, Value>,
    pub targets: BTreeMap<TargetId, Payload>,
}

impl Session {
    pub fn new(page: Arc<Page>) -> Self {
        let inputs = InputRegistry::from_controls(page.controls());
        Self {
            page,
            inputs,
            targets: BTreeMap::new(),
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn value(&self, control: &str) -> Option<&Value> {
        self.inputs.get(control)
    }

    pub fn target(&self, target: &str) -> Option<&Payload> {
        self.targets.get(target)
    }

    pub fn render_state(&self) -> RenderState {
        RenderState {
            page: self.page.path().to_string(),
            controls: self
                .inputs
                .iter()
                .map(|(id, value)| (id.clone(), value.clone()))
                .collect(),
            targets: self.targets.clone(),
        }
    }

    /// Initial load: every control reports its default at once, so every
    /// binding runs exactly once.
    pub fn load(&mut self) -> Frame {
        let span = info_span!("load", page = %self.page.path());
        let _guard = span.enter();
        let all: BTreeSet<usize> = (0..self.page.bindings().len()).collect();
        self.evaluate(&all, BTreeSet::new())
    }

    /// Apply one control change and refresh everything that depends on it.
    pub fn dispatch(&mut self, event: Event) -> Result<Frame, SessionError> {
        self.dispatch_batch(vec![event])
    }

    /// Apply several simultaneous changes as one coalesced pass.
    pub fn dispatch_batch(&mut self, events: Vec<Event>) -> Result<Frame, SessionError> {
        let span = info_span!("dispatch", page = %self.page.path(), events = events.len());
        let _guard = span.enter();

        let mut normalized = Vec::with_capacity(events.len());
        for event in events {
            let control = self.page.control(event.control.as_str()).ok_or_else(|| {
                SessionError::UnknownControl {
                    page: self.page.path().to_string(),
                    control: event.control.to_string(),
                }
            })?;
            if control.kind == ControlKind::Store {
                return Err(SessionError::ReadOnlyControl(event.control.to_string()));
            }
            let value = control.normalize(event.value);
            normalized.push((event.control, value));
        }

        let mut triggered = BTreeSet::new();
        for (control, value) in normalized {
            debug!(control = %control, ?value, "control changed");
            self.inputs.set(&control, value);
            triggered.insert(control);
        }

        let affected = self.affected_by(&triggered);
        Ok(self.evaluate(&affected, triggered))
    }

    /// Press a button: bump its click count and dispatch.
    pub fn click(&mut self, button: &str) -> Result<Frame, SessionError> {
        let control = self
            .page
            .control(button)
            .ok_or_else(|| SessionError::UnknownControl {
                page: self.page.path().to_string(),
                control: button.to_string(),
            })?;
        if control.kind != ControlKind::Button {
            return Err(SessionError::NotAButton(button.to_string()));
        }
        let id = control.id.clone();
        let clicks = self.inputs.get(button).map_or(0.0, Value::number_or_zero);
        self.dispatch(Event::new(id, clicks + 1.0))
    }

    /// Indices of every binding reachable from the changed controls,
    /// directly or through other bindings' destinations.
    fn affected_by(&self, changed: &BTreeSet<ControlId>) -> BTreeSet<usize> {
        let mut affected = BTreeSet::new();
        let mut pending: Vec<usize> = changed
            .iter()
            .flat_map(|id| self.page.dependents(id.as_str()).iter().copied())
            .collect();
        while let Some(index) = pending.pop() {
            if !affected.insert(index) {
                continue;
            }
            for destination in self.page.bindings()[index].destinations() {
                pending.extend(
                    self.page
                        .dependents(destination.as_str())
                        .iter()
                        .copied()
                        .filter(|&reader| reader != index),
                );
            }
        }
        affected
    }

    fn evaluate(&mut self, affected: &BTreeSet<usize>, triggered: BTreeSet<ControlId>) -> Frame {
        let page = Arc::clone(&self.page);
        let mut frame = Frame {
            triggered: triggered.iter().cloned().collect(),
            ..Frame::default()
        };
        let mut stale: BTreeSet<&str> = BTreeSet::new();

        // Indices ascend in topological order.
        for &index in affected {
            let binding = &page.bindings()[index];
            if binding
                .sources()
                .iter()
                .any(|source| stale.contains(source.as_str()))
            {
                debug!(binding = binding.name(), "skipped: an input failed to update");
                frame.skipped.push(binding.name().to_string());
                stale.extend(binding.destinations().iter().map(NodeRef::as_str));
                continue;
            }

            let outcome = {
                let inputs = BindingInputs::new(binding, &self.inputs, &self.targets, &triggered);
                match catch_unwind(AssertUnwindSafe(|| binding.evaluate(&inputs))) {
                    Ok(result) => result,
                    Err(panic) => Err(BindingError::Panicked(panic_message(panic.as_ref()))),
                }
            };
            let outcome = outcome.and_then(|payloads| {
                check_outputs(binding.destinations(), &payloads).map(|()| payloads)
            });

            match outcome {
                Ok(payloads) => {
                    debug!(binding = binding.name(), outputs = payloads.len(), "evaluated");
                    frame.evaluated.push(binding.name().to_string());
                    for (destination, payload) in binding.destinations().iter().zip(payloads) {
                        self.deliver(destination, payload, &mut frame);
                    }
                }
                Err(error) => {
                    warn!(binding = binding.name(), %error, "binding failed");
                    frame.failures.push(BindingFailure {
                        binding: binding.name().to_string(),
                        error,
                    });
                    stale.extend(binding.destinations().iter().map(NodeRef::as_str));
                }
            }
        }
        frame
    }

    fn deliver(&mut self, destination: &NodeRef, payload: Payload, frame: &mut Frame) {
        match (destination, payload) {
            (NodeRef::Control(control), Payload::Value(value)) => {
                self.inputs.set(control, value.clone());
                frame.control_updates.push(ControlUpdate {
                    control: control.clone(),
                    value,
                });
            }
            (NodeRef::Target(target), payload) => {
                self.targets.insert(target.clone(), payload.clone());
                frame.updates.push(TargetUpdate {
                    target: target.clone(),
                    payload,
                });
            }
            (NodeRef::Control(_), _) => unreachable!("outputs are checked before delivery"),
        }
    }
}

fn check_outputs(destinations: &[NodeRef], payloads: &[Payload]) -> Result<(), BindingError> {
    if destinations.len() != payloads.len() {
        return Err(BindingError::OutputArity {
            expected: destinations.len(),
            actual: payloads.len(),
        });
    }
    for (destination, payload) in destinations.iter().zip(payloads) {
        if let NodeRef::Control(control) = destination {
            if !matches!(payload, Payload::Value(_)) {
                return Err(BindingError::WriteBackNotValue(control.to_string()));
            }
        }
    }
    Ok(())
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
