//! `Variant` implementation for Continuo.

use super::board::ContinuoBoard;
use super::card::{ContinuoCard, ContinuoOrientation};
use super::config::ContinuoConfig;
use super::evaluator::{self, Chain, ContinuoMove};
use crate::cards::Deck;
use crate::core::{GameRng, Result};
use crate::rules::Variant;

/// The square-card variant.
#[derive(Clone, Debug)]
pub struct Continuo {
    config: ContinuoConfig,
    deck: Deck<ContinuoCard>,
}

impl Continuo {
    /// Default configuration with a deck shuffled from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, ContinuoConfig::default())
    }

    /// Custom configuration with a deck shuffled from `seed`.
    #[must_use]
    pub fn with_config(seed: u64, config: ContinuoConfig) -> Self {
        let rng = GameRng::new(seed).for_context("continuo-deck");
        Self {
            config,
            deck: Deck::new(ContinuoCard::all_cards(), rng),
        }
    }

    /// Scoring configuration.
    #[must_use]
    pub fn config(&self) -> &ContinuoConfig {
        &self.config
    }
}

impl Variant for Continuo {
    type Card = ContinuoCard;
    type Orientation = ContinuoOrientation;
    type Evidence = Chain;
    type Board = ContinuoBoard;

    fn name(&self) -> &'static str {
        "continuo"
    }

    fn deck(&self) -> &Deck<ContinuoCard> {
        &self.deck
    }

    fn deck_mut(&mut self) -> &mut Deck<ContinuoCard> {
        &mut self.deck
    }

    fn empty_board(&self) -> ContinuoBoard {
        ContinuoBoard::new()
    }

    /// Panics if `card` is not one of the canonical cards.
    fn evaluate_card(&self, board: &ContinuoBoard, card: &ContinuoCard) -> Result<Vec<ContinuoMove>> {
        assert!(
            self.original_cards().binary_search(card).is_ok(),
            "Card is not part of the Continuo deck:\n{card}"
        );
        evaluator::evaluate_card(board, card, &self.config)
    }

    fn opening_cards(&self) -> usize {
        self.config.opening_cards
    }
}
