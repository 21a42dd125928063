use super::state::HeroState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of one `Hero::shoot` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shot {
    /// Counter value after the increment, starting at 1.
    pub number: u64,
    pub damage: u32,
    /// State that computed the damage.
    pub state: HeroState,
    /// State active once the shot returned.
    pub next: HeroState,
}

impl Shot {
    pub fn transitioned(&self) -> bool {
        self.state != self.next
    }
}

impl fmt::Display for Shot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hero do damage: {}", self.damage)
    }
}
