//! Opening sequence.
//!
//! The first card goes to the origin in the default orientation. Each further
//! opening card goes to the best-ranked placement on the board built so far.
//! The host drives the steps: ask for a placement, place it, ask again.

use crate::cards::PlacedCard;
use crate::core::{Cell, GameError, Result};

use super::variant::{PlacedOf, TileBoard, Variant};

/// Where the opening currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpeningState {
    /// Nothing placed yet.
    First,
    /// `remaining` cards still go to their best placement.
    Best { remaining: usize },
    /// All opening cards placed.
    Done,
}

/// Step-by-step opening driver.
///
/// ```
/// use tileplace::games::hexago::Hexago;
/// use tileplace::rules::{Opening, TileBoard, Variant};
///
/// let mut variant = Hexago::new(42);
/// let mut board = variant.empty_board();
/// let mut opening = Opening::new(variant.opening_cards());
///
/// while let Some(placed) = opening.next_placement(&mut variant, &board).unwrap() {
///     board = board.place_card(&placed).unwrap();
/// }
/// assert_eq!(board.len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct Opening {
    cards: usize,
    state: OpeningState,
}

impl Opening {
    /// Opening that places `cards` cards.
    #[must_use]
    pub fn new(cards: usize) -> Self {
        let state = if cards == 0 {
            OpeningState::Done
        } else {
            OpeningState::First
        };
        Self { cards, state }
    }

    /// Total cards this opening places.
    #[must_use]
    pub fn cards(&self) -> usize {
        self.cards
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> OpeningState {
        self.state
    }

    /// Check if every opening card has been handed out.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.state == OpeningState::Done
    }

    /// Draw the next opening card and decide where it goes.
    ///
    /// `board` must already hold every placement returned so far. Returns
    /// `None` once the opening is complete.
    pub fn next_placement<V: Variant>(
        &mut self,
        variant: &mut V,
        board: &V::Board,
    ) -> Result<Option<PlacedOf<V>>> {
        let (placed, remaining) = match self.state {
            OpeningState::Done => return Ok(None),
            OpeningState::First => {
                let card = variant.deck_mut().next_card()?;
                (
                    PlacedCard::at(card, Cell::ORIGIN, V::Orientation::default()),
                    self.cards.saturating_sub(1),
                )
            }
            OpeningState::Best { remaining } => {
                let card = variant.deck_mut().next_card()?;
                let moves = variant.evaluate_card(board, &card)?;
                let best = moves
                    .into_iter()
                    .next()
                    .ok_or(GameError::NoLegalPlacement { card_count: board.len() })?;
                (best.placed_card, remaining - 1)
            }
        };

        self.state = if remaining == 0 {
            OpeningState::Done
        } else {
            OpeningState::Best { remaining }
        };
        log::info!(
            "{} opening card at ({}, {}) {:?}",
            variant.name(),
            placed.row,
            placed.col,
            placed.orientation
        );
        Ok(Some(placed))
    }
}
