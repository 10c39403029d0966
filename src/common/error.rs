use thiserror::Error;

use crate::common::types::Operand;

#[derive(Error, Debug)]
pub enum EuclidError {
    #[error("{0} must be positive integer")]
    InvalidInput(Operand),

    #[error("unexpected end of input while reading {0}")]
    UnexpectedEof(Operand),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EuclidError>;
