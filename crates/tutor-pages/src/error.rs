use thiserror::Error;
use tutor_reactive::GraphError;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("no page registered at {0}")]
    UnknownPage(String),
    #[error("page {path} is malformed")]
    Graph {
        path: String,
        #[source]
        source: GraphError,
    },
}

pub type Result<T> = std::result::Result<T, PageError>;
