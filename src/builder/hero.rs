//! Builder for constructing heroes.

use crate::builder::config::HeroConfig;
use crate::builder::error::BuildError;
use crate::hero::{Hero, HeroState};
use stillwater::validation::Validation;
use tracing::warn;

/// Builder for constructing a [`Hero`] with a fluent API.
#[derive(Clone, Debug)]
pub struct HeroBuilder {
    initial: Option<HeroState>,
    config: HeroConfig,
    record_history: bool,
}

impl HeroBuilder {
    /// Create a new builder with default tuning.
    pub fn new() -> Self {
        Self {
            initial: None,
            config: HeroConfig::default(),
            record_history: true,
        }
    }

    /// Set the initial state (defaults to `Common`).
    pub fn initial(mut self, state: HeroState) -> Self {
        self.initial = Some(state);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: HeroConfig) -> Self {
        self.config = config;
        self
    }

    pub fn common_damage(mut self, damage: u32) -> Self {
        self.config.common_damage = damage;
        self
    }

    pub fn super_damage(mut self, damage: u32) -> Self {
        self.config.super_damage = damage;
        self
    }

    /// Charge into `Super` every `n`-th shot.
    pub fn charge_every(mut self, n: u32) -> Self {
        self.config.charge_every = n;
        self
    }

    /// Keep a transition history (on by default).
    pub fn record_history(mut self, enabled: bool) -> Self {
        self.record_history = enabled;
        self
    }

    /// Build the hero.
    /// Returns every configuration violation at once if the tuning is invalid.
    pub fn build(self) -> Result<Hero, BuildError> {
        if let Validation::Failure(errors) = self.config.validate() {
            let violations: Vec<_> = errors.iter().cloned().collect();
            warn!(count = violations.len(), "rejected hero configuration");
            return Err(BuildError::InvalidConfig(violations));
        }

        Ok(Hero::from_parts(self.initial.unwrap_or_default(), self.config, self.record_history))
    }
}

impl Default for HeroBuilder {
    fn default() -> Self {
        Self::new()
    }
}
