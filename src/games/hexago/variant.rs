//! `Variant` implementation for Hexago.

use super::board::HexBoard;
use super::card::{HexCard, HexRotation};
use super::config::HexagoConfig;
use super::evaluator::{self, HexagoMove, Match};
use crate::cards::Deck;
use crate::core::{GameRng, Result};
use crate::rules::Variant;

/// The hex-card variant.
#[derive(Clone, Debug)]
pub struct Hexago {
    config: HexagoConfig,
    deck: Deck<HexCard>,
}

impl Hexago {
    /// Default configuration with a deck shuffled from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, HexagoConfig::default())
    }

    /// Custom configuration with a deck shuffled from `seed`.
    #[must_use]
    pub fn with_config(seed: u64, config: HexagoConfig) -> Self {
        let rng = GameRng::new(seed).for_context("hexago-deck");
        Self {
            config,
            deck: Deck::new(HexCard::all_cards(), rng),
        }
    }

    #[must_use]
    pub fn config(&self) -> &HexagoConfig {
        &self.config
    }
}

impl Variant for Hexago {
    type Card = HexCard;
    type Orientation = HexRotation;
    type Evidence = Match;
    type Board = HexBoard;

    fn name(&self) -> &'static str {
        "hexago"
    }

    fn deck(&self) -> &Deck<HexCard> {
        &self.deck
    }

    fn deck_mut(&mut self) -> &mut Deck<HexCard> {
        &mut self.deck
    }

    fn empty_board(&self) -> HexBoard {
        HexBoard::new()
    }

    /// Panics if `card` is not one of the canonical cards.
    fn evaluate_card(&self, board: &HexBoard, card: &HexCard) -> Result<Vec<HexagoMove>> {
        assert!(
            self.original_cards().binary_search(card).is_ok(),
            "Card is not part of the Hexago deck: {card}"
        );
        evaluator::evaluate_card(board, card, &self.config)
    }

    fn opening_cards(&self) -> usize {
        self.config.opening_cards
    }
}
