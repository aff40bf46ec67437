//! Interaction steps replayed against a page session.
//!
//! On the command line a step is `click:ID` or `set:ID=VALUE`. A script is
//! a TOML file with one `[[step]]` table per step:
//!
//! ```toml
//! [[step]]
//! click = "btn-incArea"
//!
//! [[step]]
//! set = "input-rows"
//! value = 3
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, error, info_span};
use tutor_model::{ControlId, ModelError, Value};
use tutor_reactive::{BindingError, Event, Frame, Page, RenderState, Session, SessionError};

#[derive(Debug, Error)]
pub enum StepError {
    #[error("step {0:?} must look like click:ID or set:ID=VALUE")]
    Malformed(String),
    #[error("step {step:?} names an invalid control")]
    InvalidControl {
        step: String,
        #[source]
        source: ModelError,
    },
    #[error("failed to read script {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid script {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("step {index} in {path} needs exactly one of `click` or `set`")]
    Ambiguous { path: PathBuf, index: usize },
}

/// One user interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Press a button once.
    Click(ControlId),
    /// Give a control a new value. Literals from the command line stay text;
    /// the target control decides how to read them.
    Set(ControlId, Value),
}

impl Step {
    fn control(step: &str, id: &str) -> Result<ControlId, StepError> {
        ControlId::new(id).map_err(|source| StepError::InvalidControl {
            step: step.to_string(),
            source,
        })
    }

    pub fn apply(&self, session: &mut Session) -> Result<Frame, SessionError> {
        match self {
            Self::Click(button) => session.click(button.as_str()),
            Self::Set(control, value) => {
                session.dispatch(Event::new(control.clone(), value.clone()))
            }
        }
    }
}

impl FromStr for Step {
    type Err = StepError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let malformed = || StepError::Malformed(text.to_string());
        let (action, rest) = text.split_once(':').ok_or_else(malformed)?;
        match action.trim() {
            "click" => Ok(Self::Click(Self::control(text, rest)?)),
            "set" => {
                let (id, literal) = rest.split_once('=').ok_or_else(malformed)?;
                let value = if literal.trim().is_empty() {
                    Value::Empty
                } else {
                    Value::Text(literal.to_string())
                };
                Ok(Self::Set(Self::control(text, id)?, value))
            }
            _ => Err(malformed()),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Click(button) => write!(f, "click:{button}"),
            Self::Set(control, value) => write!(f, "set:{control}={}", value.as_text()),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScriptFile {
    #[serde(default)]
    step: Vec<RawStep>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawStep {
    click: Option<String>,
    set: Option<String>,
    #[serde(default)]
    value: Value,
}

/// Parse a replay script.
pub fn parse_script(text: &str, path: &Path) -> Result<Vec<Step>, StepError> {
    let script: ScriptFile = toml::from_str(text).map_err(|source| StepError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    script
        .step
        .into_iter()
        .enumerate()
        .map(|(index, raw)| match (raw.click, raw.set) {
            (Some(button), None) => Ok(Step::Click(Step::control(&button, &button)?)),
            (None, Some(control)) => Ok(Step::Set(Step::control(&control, &control)?, raw.value)),
            _ => Err(StepError::Ambiguous {
                path: path.to_path_buf(),
                index: index + 1,
            }),
        })
        .collect()
}

pub fn load_script(path: &Path) -> Result<Vec<Step>, StepError> {
    let text = fs::read_to_string(path).map_err(|source| StepError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_script(&text, path)
}

/// A binding that failed while a step was being applied.
#[derive(Debug, Clone, PartialEq)]
pub struct StepFailure {
    /// `None` for the initial load.
    pub step: Option<String>,
    pub binding: String,
    pub error: BindingError,
    pub skipped: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Replay {
    pub state: RenderState,
    pub failures: Vec<StepFailure>,
    pub steps: usize,
}

impl Replay {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

fn collect_failures(step: Option<&Step>, frame: Frame, failures: &mut Vec<StepFailure>) {
    let label = step.map(ToString::to_string);
    for failure in frame.failures {
        failures.push(StepFailure {
            step: label.clone(),
            binding: failure.binding,
            error: failure.error,
            skipped: frame.skipped.clone(),
        });
    }
}

/// Load `page`, apply every step in order and return the final state
/// together with every binding failure seen along the way.
pub fn replay(page: Page, steps: &[Step]) -> Result<Replay, SessionError> {
    let span = info_span!("replay", page = %page.path(), steps = steps.len());
    let _guard = span.enter();

    let mut session = Session::new(Arc::new(page));
    let mut failures = Vec::new();
    collect_failures(None, session.load(), &mut failures);
    for step in steps {
        debug!(%step, "applying step");
        let frame = step.apply(&mut session).inspect_err(|error| {
            error!(%step, %error, "step could not be applied");
        })?;
        collect_failures(Some(step), frame, &mut failures);
    }
    Ok(Replay {
        state: session.render_state(),
        failures,
        steps: steps.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_step_forms() {
        assert_eq!(
            "click:btn-inc".parse::<Step>().unwrap(),
            Step::Click(ControlId::new("btn-inc").unwrap())
        );
        assert_eq!(
            "set:input-set-a=1,2,3".parse::<Step>().unwrap(),
            Step::Set(
                ControlId::new("input-set-a").unwrap(),
                Value::Text("1,2,3".to_string())
            )
        );
        assert_eq!(
            "set:input-rows=4".parse::<Step>().unwrap(),
            Step::Set(ControlId::new("input-rows").unwrap(), Value::Text("4".to_string()))
        );
        assert_eq!(
            "set:percent-input=".parse::<Step>().unwrap(),
            Step::Set(ControlId::new("percent-input").unwrap(), Value::Empty)
        );
    }

    #[test]
    fn rejects_malformed_steps() {
        assert!(matches!("press:btn".parse::<Step>(), Err(StepError::Malformed(_))));
        assert!(matches!("set:rows".parse::<Step>(), Err(StepError::Malformed(_))));
        assert!(matches!(
            "click:   ".parse::<Step>(),
            Err(StepError::InvalidControl { .. })
        ));
    }

    #[test]
    fn step_display_round_trips() {
        let step: Step = "set:angle-a=45".parse().unwrap();
        assert_eq!(step.to_string(), "set:angle-a=45");
    }
}
