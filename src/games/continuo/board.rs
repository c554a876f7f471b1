//! Continuo board: a persistent map from cells to coloured card regions.
//!
//! Each placed card covers a 4x4 footprint anchored at its top-left cell.
//! Cards may sit at any integer offset as long as footprints never overlap.

use im::{OrdMap, Vector};
use std::collections::BTreeSet;

use super::card::{ContinuoCard, ContinuoColour, ContinuoOrientation, CARD_SIZE};
use crate::cards::PlacedCard;
use crate::core::{Bounds, Cell, GameError, Result};
use crate::rules::TileBoard;

/// A Continuo card on the board.
pub type ContinuoPlacedCard = PlacedCard<ContinuoCard, ContinuoOrientation>;

/// What occupies a single board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellInfo {
    pub colour: ContinuoColour,
    /// Index of the owning card in placement order.
    pub card_index: u32,
    /// Region label on the owning card.
    pub segment: u8,
}

impl CellInfo {
    /// Key identifying the card region this cell belongs to.
    #[must_use]
    pub fn segment_key(&self) -> (u32, u8) {
        (self.card_index, self.segment)
    }
}

/// Immutable Continuo board.
///
/// Cloning is O(1); `place_card` shares structure with the board it came
/// from.
#[derive(Clone, Debug, Default)]
pub struct ContinuoBoard {
    placed: Vector<ContinuoPlacedCard>,
    cells: OrdMap<Cell, CellInfo>,
}

/// Cells covered by a card anchored at `anchor`, row-major, with their local
/// coordinates.
pub fn footprint(anchor: Cell) -> impl Iterator<Item = (Cell, usize, usize)> {
    (0..CARD_SIZE).flat_map(move |r| {
        (0..CARD_SIZE).map(move |c| (anchor.offset(r, c), r as usize, c as usize))
    })
}

impl ContinuoBoard {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Occupant of a cell.
    #[must_use]
    pub fn cell(&self, cell: Cell) -> Option<&CellInfo> {
        self.cells.get(&cell)
    }

    /// Colour at a cell, `None` if empty.
    #[must_use]
    pub fn colour_at(&self, cell: Cell) -> Option<ContinuoColour> {
        self.cell(cell).map(|info| info.colour)
    }

    /// Check if a cell is occupied.
    #[must_use]
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.cells.contains_key(&cell)
    }

    /// Check if a card anchored at `anchor` would cover only empty cells.
    #[must_use]
    pub fn is_vacant(&self, anchor: Cell) -> bool {
        footprint(anchor).all(|(cell, _, _)| !self.is_occupied(cell))
    }

    /// Placed card by index in placement order.
    #[must_use]
    pub fn placed_card(&self, index: u32) -> Option<&ContinuoPlacedCard> {
        self.placed.get(index as usize)
    }

    /// Occupied cells in ascending order.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.keys().copied()
    }

    /// Empty cells sharing an edge with an occupied cell.
    fn frontier(&self) -> BTreeSet<Cell> {
        self.cells
            .keys()
            .flat_map(|cell| cell.orthogonal_neighbours())
            .filter(|cell| !self.is_occupied(*cell))
            .collect()
    }
}

impl TileBoard for ContinuoBoard {
    type Card = ContinuoCard;
    type Orientation = ContinuoOrientation;

    fn place_card(&self, placed: &ContinuoPlacedCard) -> Result<Self> {
        if let Some((cell, _, _)) = footprint(placed.anchor()).find(|(cell, _, _)| self.is_occupied(*cell)) {
            return Err(GameError::IllegalPlacement {
                row: cell.row,
                col: cell.col,
            });
        }

        let card_index = self.placed.len() as u32;
        let mut next = self.clone();
        for (cell, r, c) in footprint(placed.anchor()) {
            let info = CellInfo {
                colour: placed.card.colour_at(r, c, placed.orientation),
                card_index,
                segment: placed.card.segment_at(r, c, placed.orientation),
            };
            next.cells.insert(cell, info);
        }
        next.placed.push_back(*placed);
        Ok(next)
    }

    /// Every anchor whose footprint is empty and touches the placed cards.
    fn find_available_card_positions(&self) -> Vec<Cell> {
        if self.cells.is_empty() {
            return vec![Cell::ORIGIN];
        }

        let anchors: BTreeSet<Cell> = self
            .frontier()
            .into_iter()
            .flat_map(|cell| footprint(cell).map(move |(_, r, c)| cell.offset(-(r as i32), -(c as i32))))
            .collect();

        anchors.into_iter().filter(|anchor| self.is_vacant(*anchor)).collect()
    }

    fn bounds(&self) -> Option<Bounds> {
        Bounds::from_cells(self.occupied_cells())
    }

    fn placed_cards(&self) -> Vec<ContinuoPlacedCard> {
        self.placed.iter().copied().collect()
    }

    fn len(&self) -> usize {
        self.placed.len()
    }
}
