//! Configuration violations.
//!
//! Checks run through stillwater's `Validation` so that every broken rule is
//! reported together instead of stopping at the first one.

mod violations;

pub use violations::{describe, ConfigViolation};
