//! Engine error taxonomy.
//!
//! These are integrity checks. Under correct sequencing by the host none of
//! them occur, and nothing here is retried.

use thiserror::Error;

/// Errors surfaced by decks, boards, the evaluator and sessions.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// A card was drawn from an empty deck.
    #[error("deck exhausted: no cards left to draw")]
    DeckExhausted,

    /// A placement overlaps occupied cells, or was not offered by the
    /// evaluator for the current turn.
    #[error("illegal placement at ({row}, {col})")]
    IllegalPlacement { row: i32, col: i32 },

    /// The evaluator found no legal placement for a card.
    #[error("no legal placement on a board of {card_count} cards")]
    NoLegalPlacement { card_count: usize },

    /// A commit was attempted before a card was drawn.
    #[error("no card has been drawn for this turn")]
    NoPendingCard,
}

pub type Result<T> = std::result::Result<T, GameError>;
