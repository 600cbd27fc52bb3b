use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum LogError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for LogError {
    fn from(msg: String) -> Self {
        LogError::ActorCommunicationError(msg)
    }
}
