use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("value not found in sequence")]
    ValueNotFound,
}

pub type Result<T> = std::result::Result<T, SequenceError>;
