//! Error types for datekey operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DateKeyError {
    #[error("Invalid date key: {0}")]
    InvalidKey(String),
}

pub type Result<T> = std::result::Result<T, DateKeyError>;
