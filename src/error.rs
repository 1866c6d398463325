//! Error types for marga-map.

use thiserror::Error;

use crate::map::MapError;
use crate::validate::Rejection;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum MargaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Map error: {0}")]
    Map(#[from] MapError),

    /// A start or goal point failed validation and the shell's policy is to
    /// abort rendering. The rejection itself is a result value (see
    /// [`crate::validate`]); this variant is the abort policy applied to it.
    #[error("{which} point rejected: {reason}")]
    RejectedPoint {
        which: &'static str,
        reason: Rejection,
    },
}

impl From<toml::de::Error> for MargaError {
    fn from(e: toml::de::Error) -> Self {
        MargaError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MargaError>;
