use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid control identifier: {0:?}")]
    InvalidControlId(String),
    #[error("invalid render target identifier: {0:?}")]
    InvalidTargetId(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
