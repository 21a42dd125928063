//! The hero state machine.
//!
//! [`Hero`] is the context: it owns the counter and the active
//! [`HeroState`]. Each shot hands the hero to the active state as a
//! [`Context`] borrow so the state can request a transition before the shot
//! returns.

mod context;
mod shot;
mod state;

pub use context::Hero;
pub use shot::Shot;
pub use state::{Context, HeroState};
