//! Continuo move evaluation.
//!
//! For every legal placement the card is put on a trial board, then each
//! same-colour component touching the new card is flood-filled across the
//! whole board. Components reaching into another card are chains:
//!
//! - A chain scores one point per card region it spans
//! - A chain whose regions form a loop scores `cycle_multiplier` times that
//!
//! Placement score is the sum over its chains.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, VecDeque};

use super::board::{footprint, ContinuoBoard, ContinuoPlacedCard};
use super::card::{ContinuoCard, ContinuoColour, ContinuoOrientation};
use super::config::ContinuoConfig;
use crate::cards::{Orientation, PlacedCard};
use crate::core::{Cell, GameError, Result};
use crate::rules::{rank_moves, PossibleMove, TileBoard};

/// A Continuo possible move.
pub type ContinuoMove = PossibleMove<ContinuoCard, ContinuoOrientation, Chain>;

/// Connected same-colour run of cells through the newly placed card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    pub colour: ContinuoColour,
    /// Cells in breadth-first order from the new card.
    pub cells: Vec<Cell>,
    /// Card regions the chain spans.
    pub segments: usize,
    /// The regions close into a loop.
    pub is_cycle: bool,
}

impl Chain {
    /// Points this chain is worth.
    #[must_use]
    pub fn score(&self, config: &ContinuoConfig) -> i32 {
        let base = self.segments as i32;
        if self.is_cycle {
            base * config.cycle_multiplier
        } else {
            base
        }
    }
}

/// Chains through the card at `card_index` on `board`.
///
/// Chains come out in the order their first cell appears in the card's
/// footprint, so the result is deterministic.
#[must_use]
pub fn find_chains(board: &ContinuoBoard, card_index: u32) -> Vec<Chain> {
    let Some(placed) = board.placed_card(card_index) else {
        return Vec::new();
    };

    let mut visited: FxHashSet<Cell> = FxHashSet::default();
    let mut chains = Vec::new();

    for (seed, _, _) in footprint(placed.anchor()) {
        if visited.contains(&seed) {
            continue;
        }
        if let Some(chain) = flood_chain(board, seed, card_index, &mut visited) {
            chains.push(chain);
        }
    }

    chains
}

/// Breadth-first fill of the component at `seed`.
///
/// Returns `None` when the component stays inside the new card.
fn flood_chain(
    board: &ContinuoBoard,
    seed: Cell,
    card_index: u32,
    visited: &mut FxHashSet<Cell>,
) -> Option<Chain> {
    let colour = board.colour_at(seed)?;

    let mut cells = Vec::new();
    let mut segments = BTreeSet::new();
    let mut links = BTreeSet::new();
    let mut queue = VecDeque::from([seed]);
    visited.insert(seed);

    while let Some(cell) = queue.pop_front() {
        let Some(info) = board.cell(cell) else { continue };
        cells.push(cell);
        segments.insert(info.segment_key());

        for next in cell.orthogonal_neighbours() {
            let Some(other) = board.cell(next) else { continue };
            if other.colour != colour {
                continue;
            }
            let (a, b) = (info.segment_key(), other.segment_key());
            if a != b {
                links.insert((a.min(b), a.max(b)));
            }
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    if segments.iter().all(|&(owner, _)| owner == card_index) {
        return None;
    }

    // A connected graph has a cycle iff it has at least as many edges as nodes.
    let is_cycle = links.len() >= segments.len();
    Some(Chain {
        colour,
        cells,
        segments: segments.len(),
        is_cycle,
    })
}

/// Enumerate, score and rank every legal placement of `card`.
///
/// Anchors are tried in ascending cell order and orientations in
/// enumeration order; the ranking is a stable sort, so ties keep that order.
pub fn evaluate_card(
    board: &ContinuoBoard,
    card: &ContinuoCard,
    config: &ContinuoConfig,
) -> Result<Vec<ContinuoMove>> {
    let card_index = board.len() as u32;
    let mut moves = Vec::new();

    for anchor in board.find_available_card_positions() {
        if !board.is_vacant(anchor) {
            continue;
        }
        for &orientation in ContinuoOrientation::ALL {
            let placed: ContinuoPlacedCard = PlacedCard::at(*card, anchor, orientation);
            let trial = board.place_card(&placed)?;
            let chains = find_chains(&trial, card_index);
            let score: i32 = chains.iter().map(|chain| chain.score(config)).sum();
            log::trace!("continuo {:?} at {} scores {}", orientation, anchor, score);
            moves.push(PossibleMove::new(placed, score, chains));
        }
    }

    if moves.is_empty() {
        log::warn!("continuo: no legal placement on a board of {} cards", board.len());
        return Err(GameError::NoLegalPlacement { card_count: board.len() });
    }

    rank_moves(&mut moves);
    log::debug!(
        "continuo: {} placements, best {}, worst {}",
        moves.len(),
        moves[0].score,
        moves[moves.len() - 1].score
    );
    Ok(moves)
}
