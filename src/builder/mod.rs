//! Builder API for ergonomic hero construction.
//!
//! ```
//! use hero_state::builder::HeroBuilder;
//! use hero_state::HeroState;
//!
//! let mut hero = HeroBuilder::new()
//!     .super_damage(25)
//!     .charge_every(2)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(hero.shoot().damage, 5);
//! assert_eq!(hero.state(), HeroState::Common);
//! assert_eq!(hero.shoot().damage, 5);
//! assert_eq!(hero.state(), HeroState::Super);
//! assert_eq!(hero.shoot().damage, 25);
//! ```

pub mod config;
pub mod error;
pub mod hero;

pub use config::HeroConfig;
pub use error::BuildError;
pub use hero::HeroBuilder;
