//! Hero states and the handle they use to drive transitions.

use crate::builder::HeroConfig;
use crate::core::State;
use serde::{Deserialize, Serialize};

/// Handle a state receives while it computes damage.
///
/// The state borrows its context only for the duration of one call; it never
/// stores the reference.
pub trait Context {
    /// Damage and charge tuning of the hero being driven.
    fn config(&self) -> &HeroConfig;

    /// Replace the active state.
    fn transition_to(&mut self, state: HeroState);
}

/// Behavior the hero is currently shooting with.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum HeroState {
    /// Regular shots. Charges up on every `charge_every`-th shot.
    #[default]
    Common,
    /// One charged shot, then back to `Common`.
    Super,
}

impl HeroState {
    /// Compute the damage for shot number `shot`, possibly moving `hero` to
    /// another state before returning.
    ///
    /// ```rust
    /// use hero_state::{Hero, HeroState};
    ///
    /// let mut hero = Hero::new();
    /// assert_eq!(HeroState::Common.do_damage(3, &mut hero), 5);
    /// assert_eq!(hero.state(), HeroState::Super);
    /// ```
    pub fn do_damage<C: Context + ?Sized>(&self, shot: u64, hero: &mut C) -> u32 {
        match self {
            Self::Common => {
                let config = *hero.config();
                if shot % u64::from(config.charge_every) == 0 {
                    hero.transition_to(Self::Super);
                }
                config.common_damage
            }
            Self::Super => {
                hero.transition_to(Self::Common);
                hero.config().super_damage
            }
        }
    }
}

impl State for HeroState {
    fn name(&self) -> &str {
        match self {
            Self::Common => "Common",
            Self::Super => "Super",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Bare context that only remembers where it was sent.
    struct Probe {
        config: HeroConfig,
        moved_to: Vec<HeroState>,
    }

    impl Probe {
        fn new() -> Self {
            Self {
                config: HeroConfig::default(),
                moved_to: Vec::new(),
            }
        }
    }

    impl Context for Probe {
        fn config(&self) -> &HeroConfig {
            &self.config
        }

        fn transition_to(&mut self, state: HeroState) {
            self.moved_to.push(state);
        }
    }

    #[test]
    fn common_deals_base_damage_without_transition() {
        let mut probe = Probe::new();
        assert_eq!(HeroState::Common.do_damage(1, &mut probe), 5);
        assert_eq!(HeroState::Common.do_damage(2, &mut probe), 5);
        assert!(probe.moved_to.is_empty());
    }

    #[test]
    fn common_charges_on_multiple_of_three() {
        let mut probe = Probe::new();
        assert_eq!(HeroState::Common.do_damage(3, &mut probe), 5);
        assert_eq!(probe.moved_to, vec![HeroState::Super]);

        assert_eq!(HeroState::Common.do_damage(9, &mut probe), 5);
        assert_eq!(probe.moved_to, vec![HeroState::Super, HeroState::Super]);
    }

    #[test]
    fn super_always_reverts() {
        for shot in [1, 2, 3, 4, 100] {
            let mut probe = Probe::new();
            assert_eq!(HeroState::Super.do_damage(shot, &mut probe), 10);
            assert_eq!(probe.moved_to, vec![HeroState::Common]);
        }
    }

    #[test]
    fn charge_period_follows_config() {
        let mut probe = Probe::new();
        probe.config.charge_every = 4;

        HeroState::Common.do_damage(3, &mut probe);
        assert!(probe.moved_to.is_empty());
        HeroState::Common.do_damage(8, &mut probe);
        assert_eq!(probe.moved_to, vec![HeroState::Super]);
    }

    #[test]
    fn states_are_never_final() {
        assert!(!HeroState::Common.is_final());
        assert!(!HeroState::Super.is_final());
        assert!(!HeroState::Super.is_error());
    }

    #[test]
    fn default_state_is_common() {
        assert_eq!(HeroState::default(), HeroState::Common);
        assert_eq!(HeroState::Super.name(), "Super");
    }
}
