//! Damage and charge tuning for a hero.

use crate::validation::ConfigViolation;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub const DEFAULT_COMMON_DAMAGE: u32 = 5;
pub const DEFAULT_SUPER_DAMAGE: u32 = 10;
pub const DEFAULT_CHARGE_EVERY: u32 = 3;

/// Tuning knobs read by the hero states.
///
/// The defaults reproduce the classic trace: 5 per regular shot, 10 for the
/// charged shot, charging on every third shot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    /// Damage dealt in `Common` state
    pub common_damage: u32,
    /// Damage dealt in `Super` state
    pub super_damage: u32,
    /// `Common` charges into `Super` when the shot number is a multiple of this
    pub charge_every: u32,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            common_damage: DEFAULT_COMMON_DAMAGE,
            super_damage: DEFAULT_SUPER_DAMAGE,
            charge_every: DEFAULT_CHARGE_EVERY,
        }
    }
}

impl HeroConfig {
    /// Check every rule, accumulating ALL violations.
    ///
    /// ```rust
    /// use hero_state::builder::HeroConfig;
    ///
    /// let config = HeroConfig { charge_every: 0, super_damage: 1, ..HeroConfig::default() };
    /// assert!(config.validate().is_failure());
    /// assert!(HeroConfig::default().validate().is_success());
    /// ```
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        checks.push(if self.charge_every == 0 {
            Validation::fail(ConfigViolation::ZeroChargePeriod)
        } else {
            Validation::success(())
        });

        for (field, value) in [
            ("common_damage", self.common_damage),
            ("super_damage", self.super_damage),
        ] {
            checks.push(if value == 0 {
                Validation::fail(ConfigViolation::ZeroDamage { field })
            } else {
                Validation::success(())
            });
        }

        checks.push(if self.super_damage <= self.common_damage {
            Validation::fail(ConfigViolation::SuperNotStronger {
                common_damage: self.common_damage,
                super_damage: self.super_damage,
            })
        } else {
            Validation::success(())
        });

        Validation::all_vec(checks).map(|_| ())
    }
}
