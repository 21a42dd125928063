//! Crate-level error type.

use crate::builder::BuildError;
use thiserror::Error;

/// Errors surfaced by the driver and the binary.
///
/// Firing shots never fails; only building a hero, writing reports and
/// exporting history can.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("Failed to write shot report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize history: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
