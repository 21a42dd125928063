//! The hero: owns the active state and the shot counter.

use super::shot::Shot;
use super::state::{Context, HeroState};
use crate::builder::{HeroBuilder, HeroConfig};
use crate::core::{State, StateHistory, StateTransition};
use chrono::Utc;
use tracing::{debug, info, warn};

/// Context of the state machine.
///
/// Holds exactly one active [`HeroState`] and delegates every shot to it.
/// The counter starts at zero and grows by one per shot.
#[derive(Clone, Debug)]
pub struct Hero {
    state: HeroState,
    shots: u64,
    config: HeroConfig,
    history: StateHistory<HeroState>,
    record_history: bool,
}

impl Hero {
    /// A hero in `Common` state with default damage tuning.
    pub fn new() -> Self {
        Self::from_parts(HeroState::Common, HeroConfig::default(), true)
    }

    /// Start a fluent builder for a custom hero.
    pub fn builder() -> HeroBuilder {
        HeroBuilder::new()
    }

    pub(crate) fn from_parts(
        initial: HeroState,
        config: HeroConfig,
        record_history: bool,
    ) -> Self {
        Self {
            state: initial,
            shots: 0,
            config,
            history: StateHistory::new(),
            record_history,
        }
    }

    pub fn state(&self) -> HeroState {
        self.state
    }

    /// Number of shots fired so far.
    pub fn shots(&self) -> u64 {
        self.shots
    }

    pub fn config(&self) -> &HeroConfig {
        &self.config
    }

    /// Recorded state swaps. Always empty when built with
    /// `record_history(false)`.
    pub fn history(&self) -> &StateHistory<HeroState> {
        &self.history
    }

    /// Replace the active state. Always succeeds.
    pub fn transition_to(&mut self, state: HeroState) {
        self.replace_state(state);
    }

    /// Fire once: bump the counter, let the active state compute damage,
    /// report it.
    ///
    /// The counter saturates at `u64::MAX` rather than wrapping.
    pub fn shoot(&mut self) -> Shot {
        self.shots = match self.shots.checked_add(1) {
            Some(next) => next,
            None => {
                warn!(shots = self.shots, "shot counter saturated");
                u64::MAX
            }
        };
        let state = self.state;
        let damage = state.do_damage(self.shots, self);

        let shot = Shot {
            number: self.shots,
            damage,
            state,
            next: self.state,
        };
        info!(shot = shot.number, damage, state = state.name(), "{shot}");
        shot
    }

    fn replace_state(&mut self, state: HeroState) {
        if state != self.state {
            debug!(
                from = self.state.name(),
                to = state.name(),
                shot = self.shots,
                "hero transition"
            );
            if self.record_history {
                self.history.push(StateTransition {
                    from: self.state,
                    to: state,
                    timestamp: Utc::now(),
                    shot: self.shots,
                });
            }
        }
        self.state = state;
    }
}

impl Default for Hero {
    fn default() -> Self {
        Self::new()
    }
}

impl Context for Hero {
    fn config(&self) -> &HeroConfig {
        &self.config
    }

    fn transition_to(&mut self, state: HeroState) {
        self.replace_state(state);
    }
}
