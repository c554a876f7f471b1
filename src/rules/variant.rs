//! The variant-agnostic adapter surface.
//!
//! Hosts code against `Variant` and never name a variant's card, colour or
//! orientation types directly. Each variant supplies:
//! - Its deck and canonical card set
//! - An empty board
//! - The move evaluator
//!
//! Rotation, relocation and placement equality come for free from
//! `PlacedCard`.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::cards::{Deck, Orientation, PlacedCard};
use crate::core::{Bounds, Cell, Result};

/// One legal placement with its score and supporting evidence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PossibleMove<C, O, E> {
    pub placed_card: PlacedCard<C, O>,
    pub score: i32,
    pub evidence: Vec<E>,
}

impl<C, O, E> PossibleMove<C, O, E> {
    /// Create a possible move.
    #[must_use]
    pub fn new(placed_card: PlacedCard<C, O>, score: i32, evidence: Vec<E>) -> Self {
        Self {
            placed_card,
            score,
            evidence,
        }
    }
}

/// Stable-sort moves by score, highest first.
///
/// Ties keep their enumeration order, so the result is deterministic for a
/// deterministic enumeration.
pub fn rank_moves<C, O, E>(moves: &mut [PossibleMove<C, O, E>]) {
    moves.sort_by(|a, b| b.score.cmp(&a.score));
}

/// Immutable board of placed cards.
///
/// `place_card` returns a new board and leaves `self` untouched, so the
/// evaluator can try placements freely.
pub trait TileBoard: Clone + Debug {
    type Card: Clone + Debug;
    type Orientation: Orientation;

    /// Board with `placed` added.
    ///
    /// Fails with `IllegalPlacement` if any target cell is occupied.
    fn place_card(&self, placed: &PlacedCard<Self::Card, Self::Orientation>) -> Result<Self>;

    /// Deduplicated candidate anchors in ascending cell order.
    ///
    /// Only the origin on an empty board.
    fn find_available_card_positions(&self) -> Vec<Cell>;

    /// Bounding box over occupied cells, `None` when empty.
    fn bounds(&self) -> Option<Bounds>;

    /// Placed cards in placement order.
    fn placed_cards(&self) -> Vec<PlacedCard<Self::Card, Self::Orientation>>;

    /// Number of placed cards.
    fn len(&self) -> usize;

    /// Check if no card has been placed.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Placed card type of a variant.
pub type PlacedOf<V> = PlacedCard<<V as Variant>::Card, <V as Variant>::Orientation>;

/// Possible move type of a variant.
pub type MoveOf<V> =
    PossibleMove<<V as Variant>::Card, <V as Variant>::Orientation, <V as Variant>::Evidence>;

/// A rule variant.
///
/// ## Implementation Notes
///
/// - `evaluate_card`: must be pure; returns a non-empty list sorted by score
///   descending, or `NoLegalPlacement`
/// - `evaluate_card` panics on cards outside `original_cards`
/// - `opening_cards`: how many cards the opening places before turns begin
pub trait Variant {
    type Card: Clone + Debug + PartialEq;
    type Orientation: Orientation;
    type Evidence: Clone + Debug;
    type Board: TileBoard<Card = Self::Card, Orientation = Self::Orientation>;

    /// Short variant name for logs.
    fn name(&self) -> &'static str;

    /// The draw pile.
    fn deck(&self) -> &Deck<Self::Card>;

    /// The draw pile, mutably.
    fn deck_mut(&mut self) -> &mut Deck<Self::Card>;

    /// A board with no cards.
    fn empty_board(&self) -> Self::Board;

    /// Enumerate, score and rank every legal placement of `card`.
    fn evaluate_card(&self, board: &Self::Board, card: &Self::Card) -> Result<Vec<MoveOf<Self>>>;

    /// Cards placed by the opening sequence.
    fn opening_cards(&self) -> usize;

    /// The canonical card set.
    fn original_cards(&self) -> &[Self::Card] {
        self.deck().original_cards()
    }

    fn placed_card_rotate_cw(&self, placed: &PlacedOf<Self>) -> PlacedOf<Self> {
        placed.rotate_cw()
    }

    fn placed_card_rotate_ccw(&self, placed: &PlacedOf<Self>) -> PlacedOf<Self> {
        placed.rotate_ccw()
    }

    fn placed_card_move_to(&self, placed: &PlacedOf<Self>, row: i32, col: i32) -> PlacedOf<Self> {
        placed.move_to(row, col)
    }

    fn placed_cards_have_same_placement(&self, a: &PlacedOf<Self>, b: &PlacedOf<Self>) -> bool {
        a.has_same_placement(b)
    }
}
