//! Hexago move evaluation.
//!
//! Each candidate cell is tried in all six rotations. Every side the new
//! card shares with a placed neighbour yields one `Match`, flagged for
//! colour and number equality separately.

use serde::{Deserialize, Serialize};

use super::board::{opposite, wedge_facing, HexBoard, HexPlacedCard};
use super::card::{HexCard, HexRotation};
use super::config::HexagoConfig;
use crate::cards::{Orientation, PlacedCard};
use crate::core::{Cell, GameError, Result};
use crate::rules::{rank_moves, PossibleMove, TileBoard};

/// A Hexago possible move.
pub type HexagoMove = PossibleMove<HexCard, HexRotation, Match>;

/// Comparison of two touching wedges on different cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Cell of the new card.
    pub cell: Cell,
    /// Canonical wedge index on the new card.
    pub wedge: usize,
    /// Cell of the placed neighbour.
    pub neighbour: Cell,
    /// Canonical wedge index on the neighbour.
    pub neighbour_wedge: usize,
    pub colours_match: bool,
    pub numbers_match: bool,
}

impl Match {
    /// Points this pair is worth.
    #[must_use]
    pub fn score(&self, config: &HexagoConfig) -> i32 {
        let colour = if self.colours_match { config.colour_match_points } else { 0 };
        let number = if self.numbers_match { config.number_match_points } else { 0 };
        colour + number
    }
}

/// Matches between `placed` and the cards already on `board`, in direction
/// order.
#[must_use]
pub fn find_matches(board: &HexBoard, placed: &HexPlacedCard) -> Vec<Match> {
    let cell = placed.anchor();
    board
        .occupied_neighbours(cell)
        .map(|(direction, other)| {
            let back = opposite(direction);
            let mine = wedge_facing(placed, direction);
            let theirs = wedge_facing(other, back);
            Match {
                cell,
                wedge: HexCard::wedge_index_facing(direction, placed.orientation),
                neighbour: other.anchor(),
                neighbour_wedge: HexCard::wedge_index_facing(back, other.orientation),
                colours_match: mine.colour == theirs.colour,
                numbers_match: mine.number == theirs.number,
            }
        })
        .collect()
}

/// Enumerate, score and rank every legal placement of `card`.
pub fn evaluate_card(board: &HexBoard, card: &HexCard, config: &HexagoConfig) -> Result<Vec<HexagoMove>> {
    let mut moves = Vec::new();

    for anchor in board.find_available_card_positions() {
        if board.is_occupied(anchor) {
            continue;
        }
        for &rotation in HexRotation::ALL {
            let placed: HexPlacedCard = PlacedCard::at(*card, anchor, rotation);
            let matches = find_matches(board, &placed);
            let score: i32 = matches.iter().map(|m| m.score(config)).sum();
            log::trace!("hexago {:?} at {} scores {}", rotation, anchor, score);
            moves.push(PossibleMove::new(placed, score, matches));
        }
    }

    if moves.is_empty() {
        log::warn!("hexago: no legal placement on a board of {} cards", board.len());
        return Err(GameError::NoLegalPlacement { card_count: board.len() });
    }

    rank_moves(&mut moves);
    log::debug!(
        "hexago: {} placements, best {}, worst {}",
        moves.len(),
        moves[0].score,
        moves[moves.len() - 1].score
    );
    Ok(moves)
}
