//! Hexago scoring configuration.

use serde::{Deserialize, Serialize};

/// Hexago configuration parameters.
///
/// Colour and number matches score independently; a wedge pair matching on
/// both earns both.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexagoConfig {
    /// Points per adjacent wedge pair with equal colours (default: 1).
    pub colour_match_points: i32,

    /// Points per adjacent wedge pair with equal numbers (default: 1).
    pub number_match_points: i32,

    /// Cards placed by the opening sequence (default: 3).
    pub opening_cards: usize,
}

impl Default for HexagoConfig {
    fn default() -> Self {
        Self {
            colour_match_points: 1,
            number_match_points: 1,
            opening_cards: 3,
        }
    }
}

impl HexagoConfig {
    /// Set points per colour match.
    pub fn with_colour_match_points(mut self, points: i32) -> Self {
        self.colour_match_points = points;
        self
    }

    /// Set points per number match.
    pub fn with_number_match_points(mut self, points: i32) -> Self {
        self.number_match_points = points;
        self
    }

    /// Set the opening length.
    pub fn with_opening_cards(mut self, cards: usize) -> Self {
        self.opening_cards = cards;
        self
    }
}
