use thiserror::Error;

pub type DatasetResult<T> = Result<T, DatasetError>;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("consumer refresh failed: {0}")]
    Consumer(String),

    #[error("invalid chart `{id}`: {reason}")]
    Validation { id: String, reason: String },
}
