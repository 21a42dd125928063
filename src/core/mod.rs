//! Core state vocabulary.
//!
//! - State definitions via the `State` trait
//! - Immutable history of transitions
//!
//! Nothing in this module performs I/O or logging.

mod history;
mod state;

pub use history::{StateHistory, StateTransition};
pub use state::State;
