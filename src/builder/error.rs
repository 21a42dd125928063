//! Build errors for the hero builder.

use crate::validation::{describe, ConfigViolation};
use thiserror::Error;

/// Errors that can occur when building a hero.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Invalid hero configuration: {}", describe(.0))]
    InvalidConfig(Vec<ConfigViolation>),
}
