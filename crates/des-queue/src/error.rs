use des_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueueError {
    #[error("queue configuration error: {0}")]
    Config(String),

    #[error("unknown queue implementation '{0}'")]
    UnknownImplementation(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type QueueResult<T> = Result<T, QueueError>;
