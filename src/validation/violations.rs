use thiserror::Error;

/// A single broken configuration rule.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("charge_every must be at least 1")]
    ZeroChargePeriod,

    #[error("{field} must be greater than zero")]
    ZeroDamage { field: &'static str },

    #[error("super_damage ({super_damage}) must exceed common_damage ({common_damage})")]
    SuperNotStronger {
        common_damage: u32,
        super_damage: u32,
    },
}

/// Join violations into one `; `-separated message.
pub fn describe(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
