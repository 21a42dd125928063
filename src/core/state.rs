//! Core State trait for state machine states.
//!
//! Every state a context can be in implements this trait, which exposes
//! pure inspection methods with no side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. States are plain values describing which behavior
/// a context currently delegates to.
///
/// # Required Traits
///
/// - `Clone`: states are copied into transition records
/// - `PartialEq`: transitions compare old and new variants
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: history can be exported
///
/// # Example
///
/// ```rust
/// use hero_state::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Stance {
///     Guarding,
///     Charging,
///     Stunned,
/// }
///
/// impl State for Stance {
///     fn name(&self) -> &str {
///         match self {
///             Self::Guarding => "Guarding",
///             Self::Charging => "Charging",
///             Self::Stunned => "Stunned",
///         }
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Stunned)
///     }
/// }
///
/// assert_eq!(Stance::Charging.name(), "Charging");
/// assert!(!Stance::Charging.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a terminal state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}
