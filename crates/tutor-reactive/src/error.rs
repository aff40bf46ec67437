use thiserror::Error;
use tutor_model::ModelError;

/// Configuration errors detected while building a page.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error(transparent)]
    InvalidIdentifier(#[from] ModelError),
    #[error("duplicate control `{0}`")]
    DuplicateControl(String),
    #[error("duplicate binding name `{0}`")]
    DuplicateBinding(String),
    #[error("binding `{0}` declares no destinations")]
    NoDestinations(String),
    #[error("binding `{binding}` reads unknown identifier `{input}`")]
    UnknownInput { binding: String, input: String },
    #[error("binding `{binding}` writes control `{control}` without reading it")]
    ForeignControlWrite { binding: String, control: String },
    #[error("`{target}` is written by both `{first}` and `{second}`")]
    DuplicateProducer {
        target: String,
        first: String,
        second: String,
    },
    #[error("bindings form a cycle: {}", .0.join(", "))]
    Cycle(Vec<String>),
    #[error("layout references unknown identifier `{0}`")]
    UnknownLayoutReference(String),
}

/// Failure of a single binding evaluation. Never fatal to the session.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BindingError {
    #[error("`{0}` is not a declared input of this binding")]
    UndeclaredInput(String),
    #[error("expected {expected} outputs, got {actual}")]
    OutputArity { expected: usize, actual: usize },
    #[error("write-back to control `{0}` must carry a value")]
    WriteBackNotValue(String),
    #[error("{0}")]
    Invalid(String),
    #[error("binding panicked: {0}")]
    Panicked(String),
}

impl BindingError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}

/// Errors raised when an event cannot be applied to a session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("page `{page}` has no control `{control}`")]
    UnknownControl { page: String, control: String },
    #[error("control `{0}` is not a button")]
    NotAButton(String),
    #[error("control `{0}` is only written by bindings")]
    ReadOnlyControl(String),
}
