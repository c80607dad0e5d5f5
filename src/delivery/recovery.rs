use serde::{Deserialize, Serialize};

use crate::constants::SOBA_STACK_SIZE;

/// How a crashed rider gets their bowls back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryPolicy {
    /// Each action press restores `per_press` bowls.
    Mash { per_press: usize },
    /// A single action press restores the whole stack.
    Instant,
}

impl Default for RecoveryPolicy {
    fn default() -> Self {
        RecoveryPolicy::Mash { per_press: 1 }
    }
}

impl RecoveryPolicy {
    /// Bowls restored by one action press.
    pub fn bowls_per_press(self) -> usize {
        match self {
            RecoveryPolicy::Mash { per_press } => per_press,
            RecoveryPolicy::Instant => SOBA_STACK_SIZE,
        }
    }

    /// Presses needed to refill an empty stack.
    pub fn presses_to_recover(self) -> usize {
        SOBA_STACK_SIZE.div_ceil(self.bowls_per_press().max(1))
    }
}
