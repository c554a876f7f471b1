//! Continuo scoring configuration.

use serde::{Deserialize, Serialize};

/// Continuo configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContinuoConfig {
    /// Multiplier applied to a chain that closes into a loop (default: 2).
    pub cycle_multiplier: i32,

    /// Cards placed by the opening sequence (default: 2).
    pub opening_cards: usize,
}

impl Default for ContinuoConfig {
    fn default() -> Self {
        Self {
            cycle_multiplier: 2,
            opening_cards: 2,
        }
    }
}

impl ContinuoConfig {
    /// Set the loop multiplier.
    pub fn with_cycle_multiplier(mut self, multiplier: i32) -> Self {
        self.cycle_multiplier = multiplier;
        self
    }

    /// Set the opening length.
    pub fn with_opening_cards(mut self, cards: usize) -> Self {
        self.opening_cards = cards;
        self
    }
}
