//! State transition history tracking.
//!
//! Keeps an append-only record of every time a context swapped its active
//! state, tagged with the action counter that caused the swap.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use hero_state::core::StateTransition;
/// use hero_state::HeroState;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: HeroState::Common,
///     to: HeroState::Super,
///     timestamp: Utc::now(),
///     shot: 3,
/// };
/// assert_eq!(transition.shot, 3);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// Counter value of the action that triggered the transition
    pub shot: u64,
}

/// Ordered history of state transitions.
///
/// `record` never mutates; it returns a new history with the transition
/// appended.
///
/// ```rust
/// use hero_state::core::{StateHistory, StateTransition};
/// use hero_state::HeroState;
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: HeroState::Common,
///         to: HeroState::Super,
///         timestamp: Utc::now(),
///         shot: 3,
///     })
///     .record(StateTransition {
///         from: HeroState::Super,
///         to: HeroState::Common,
///         timestamp: Utc::now(),
///         shot: 4,
///     });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&HeroState::Common, &HeroState::Super, &HeroState::Common]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append a transition in place.
    ///
    /// Amortized O(1); owners that record on every action use this instead of
    /// `record`.
    pub fn push(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
    }

    /// Get the path of states traversed.
    ///
    /// The first transition's `from` state, then the `to` state of each
    /// transition in order. Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Wall-clock time between the first and last recorded transition.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Shot numbers at which the context entered `state`.
    pub fn entries_into(&self, state: &S) -> Vec<u64> {
        self.transitions
            .iter()
            .filter(|t| &t.to == state)
            .map(|t| t.shot)
            .collect()
    }

    /// Get all transitions.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
