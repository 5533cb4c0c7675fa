// src/error.rs
//! Public error types for the entire crate

use thiserror::Error;

use crate::consts::MAX_SIZE;

pub type Result<T> = std::result::Result<T, GrandError>;

#[derive(Error, Debug)]
pub enum GrandError {
    #[error(transparent)]
    Size(#[from] SizeError),

    #[error("encoding not found")]
    UnknownEncoding(String),

    #[error("parse error")]
    CountParse,

    #[error("n must be greater than zero")]
    InvalidCount,

    #[error("random source failed: {0}")]
    Random(String),

    #[error("output buffer too small: need {needed} bytes, have {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GrandError {
    /// True for errors caused by bad arguments rather than a runtime failure
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            GrandError::Size(_)
                | GrandError::UnknownEncoding(_)
                | GrandError::CountParse
                | GrandError::InvalidCount
        )
    }
}

/// Why a size expression was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeError {
    #[error("parse error")]
    Parse,

    #[error("size must be greater than zero")]
    NotPositive,

    #[error("size min must be greater than zero")]
    MinNotPositive,

    #[error("size max must not be less than size min")]
    MaxLessThanMin,

    #[error("size max must not be greater than {}", MAX_SIZE)]
    TooLarge,
}
