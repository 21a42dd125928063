//! hero-state: a State pattern demonstrator
//!
//! A [`Hero`] owns one active [`HeroState`] and a shot counter. Every shot is
//! delegated to the active state, which computes the damage and may swap the
//! hero into another state before the shot returns.
//!
//! # Core Concepts
//!
//! - **State**: closed set of behaviors (`Common`, `Super`) implementing [`State`]
//! - **Context**: the [`Hero`], handed to states as a short-lived borrow
//! - **History**: immutable record of every state swap
//! - **Builder**: validated damage and charge tuning
//!
//! # Example
//!
//! ```rust
//! use hero_state::{Hero, HeroState};
//!
//! let mut hero = Hero::new();
//! let damage: Vec<u32> = (0..5).map(|_| hero.shoot().damage).collect();
//!
//! assert_eq!(damage, vec![5, 5, 5, 10, 5]);
//! assert_eq!(hero.state(), HeroState::Common);
//! assert_eq!(hero.shots(), 5);
//! ```

pub mod builder;
pub mod core;
pub mod driver;
pub mod error;
pub mod hero;
pub mod validation;

// Re-export commonly used types
pub use builder::{BuildError, HeroBuilder, HeroConfig};
pub use crate::core::{State, StateHistory, StateTransition};
pub use error::{Error, Result};
pub use hero::{Context, Hero, HeroState, Shot};
