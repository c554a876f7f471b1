//! Hexago board: one card per hex cell, axial coordinates.
//!
//! Rows grow downward. Directions are numbered clockwise on screen starting
//! east (E, SE, SW, W, NW, NE); direction `d` and `d + 3` are opposite, so
//! the wedge a card points in direction `d` touches the wedge its neighbour
//! points in direction `d + 3`.

use im::{OrdMap, Vector};
use std::collections::BTreeSet;

use super::card::{HexCard, HexRotation, Wedge, WEDGES};
use crate::cards::PlacedCard;
use crate::core::{Bounds, Cell, GameError, Result};
use crate::rules::TileBoard;

/// A Hexago card on the board.
pub type HexPlacedCard = PlacedCard<HexCard, HexRotation>;

/// `(d_row, d_col)` per direction in axial coordinates.
pub const DIRECTIONS: [(i32, i32); WEDGES] = [(0, 1), (1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1)];

/// The direction pointing back at a neighbour.
#[must_use]
pub const fn opposite(direction: usize) -> usize {
    (direction + WEDGES / 2) % WEDGES
}

/// The cell next to `cell` in `direction`.
#[must_use]
pub fn neighbour(cell: Cell, direction: usize) -> Cell {
    let (d_row, d_col) = DIRECTIONS[direction % WEDGES];
    cell.offset(d_row, d_col)
}

/// The wedge a placed card points in `direction`.
#[must_use]
pub fn wedge_facing(placed: &HexPlacedCard, direction: usize) -> Wedge {
    placed.card.wedge(HexCard::wedge_index_facing(direction, placed.orientation))
}

/// Immutable Hexago board.
#[derive(Clone, Debug, Default)]
pub struct HexBoard {
    placed: Vector<HexPlacedCard>,
    cells: OrdMap<Cell, HexPlacedCard>,
}

impl HexBoard {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Card at a cell.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<&HexPlacedCard> {
        self.cells.get(&cell)
    }

    /// Check if a cell is occupied.
    #[must_use]
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.cells.contains_key(&cell)
    }

    /// Wedge of the card at `cell` pointing in `direction`.
    #[must_use]
    pub fn wedge_at(&self, cell: Cell, direction: usize) -> Option<Wedge> {
        self.get(cell).map(|placed| wedge_facing(placed, direction))
    }

    /// Occupied neighbours of `cell` with the direction they lie in.
    pub fn occupied_neighbours(&self, cell: Cell) -> impl Iterator<Item = (usize, &HexPlacedCard)> + '_ {
        (0..WEDGES).filter_map(move |d| self.get(neighbour(cell, d)).map(|placed| (d, placed)))
    }
}

impl TileBoard for HexBoard {
    type Card = HexCard;
    type Orientation = HexRotation;

    fn place_card(&self, placed: &HexPlacedCard) -> Result<Self> {
        let cell = placed.anchor();
        if self.is_occupied(cell) {
            return Err(GameError::IllegalPlacement {
                row: cell.row,
                col: cell.col,
            });
        }

        let mut next = self.clone();
        next.cells.insert(cell, *placed);
        next.placed.push_back(*placed);
        Ok(next)
    }

    /// Every empty cell next to a placed card, each exactly once.
    fn find_available_card_positions(&self) -> Vec<Cell> {
        if self.cells.is_empty() {
            return vec![Cell::ORIGIN];
        }

        let candidates: BTreeSet<Cell> = self
            .cells
            .keys()
            .flat_map(|&cell| (0..WEDGES).map(move |d| neighbour(cell, d)))
            .filter(|cell| !self.is_occupied(*cell))
            .collect();
        candidates.into_iter().collect()
    }

    fn bounds(&self) -> Option<Bounds> {
        Bounds::from_cells(self.cells.keys().copied())
    }

    fn placed_cards(&self) -> Vec<HexPlacedCard> {
        self.placed.iter().copied().collect()
    }

    fn len(&self) -> usize {
        self.placed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hexago::HexColour::{Blue, Green, Red};

    fn card() -> HexCard {
        HexCard::from_colours(Red, Green, Blue)
    }

    fn board_at(cells: &[Cell]) -> HexBoard {
        cells.iter().fold(HexBoard::new(), |board, &cell| {
            board.place_card(&PlacedCard::at(card(), cell, HexRotation::Deg0)).unwrap()
        })
    }

    #[test]
    fn test_directions_are_opposite_pairs() {
        for d in 0..WEDGES {
            let (r1, c1) = DIRECTIONS[d];
            let (r2, c2) = DIRECTIONS[opposite(d)];
            assert_eq!((r1 + r2, c1 + c2), (0, 0));
            assert_eq!(neighbour(neighbour(Cell::ORIGIN, d), opposite(d)), Cell::ORIGIN);
        }
    }

    #[test]
    fn test_directions_turn_clockwise() {
        // East, then down-right: rows grow downward, so clockwise on screen.
        assert_eq!(neighbour(Cell::ORIGIN, 0), Cell::new(0, 1));
        assert_eq!(neighbour(Cell::ORIGIN, 1), Cell::new(1, 0));
        assert_eq!(neighbour(Cell::ORIGIN, 4), Cell::new(-1, 0));

        // Screen x of an axial cell is `col + row / 2`; successive directions
        // sweep E, SE, SW, W, NW, NE.
        let xs: Vec<i32> = DIRECTIONS.iter().map(|&(r, c)| 2 * c + r).collect();
        let ys: Vec<i32> = DIRECTIONS.iter().map(|&(r, _)| r).collect();
        assert_eq!(xs, vec![2, 1, -1, -2, -1, 1]);
        assert_eq!(ys, vec![0, 1, 1, 0, -1, -1]);
    }

    #[test]
    fn test_single_card_neighbours() {
        let board = board_at(&[Cell::ORIGIN]);
        let anchors = board.find_available_card_positions();

        assert_eq!(anchors.len(), 6);
        assert!(!anchors.contains(&Cell::ORIGIN));
        for d in 0..WEDGES {
            assert!(anchors.contains(&neighbour(Cell::ORIGIN, d)));
        }
    }

    #[test]
    fn test_surrounded_cell_listed_once() {
        let hole = Cell::new(2, 2);
        let ring: Vec<_> = (0..WEDGES).map(|d| neighbour(hole, d)).collect();
        let board = board_at(&ring);

        let anchors = board.find_available_card_positions();
        assert_eq!(anchors.iter().filter(|&&c| c == hole).count(), 1);
        assert!(ring.iter().all(|c| !anchors.contains(c)));
        assert_eq!(board.occupied_neighbours(hole).count(), 6);
    }

    #[test]
    fn test_place_card_is_persistent_and_checked() {
        let empty = HexBoard::new();
        let one = board_at(&[Cell::ORIGIN]);

        assert!(empty.is_empty());
        assert_eq!(one.len(), 1);
        assert_eq!(
            one.place_card(&PlacedCard::at(card(), Cell::ORIGIN, HexRotation::Deg120)).unwrap_err(),
            GameError::IllegalPlacement { row: 0, col: 0 }
        );
    }

    #[test]
    fn test_bounds() {
        let board = board_at(&[Cell::ORIGIN, Cell::new(-1, 1), Cell::new(1, -1)]);
        assert_eq!(board.bounds(), Some(Bounds { left: -1, right: 1, top: -1, bottom: 1 }));
        assert_eq!(HexBoard::new().bounds(), None);
    }

    #[test]
    fn test_wedge_at_follows_rotation() {
        let placed = PlacedCard::at(card(), Cell::ORIGIN, HexRotation::Deg60);
        let board = HexBoard::new().place_card(&placed).unwrap();

        // One step clockwise turns wedge 0 towards direction 1.
        assert_eq!(board.wedge_at(Cell::ORIGIN, 1), Some(card().wedge(0)));
        assert_eq!(board.wedge_at(Cell::new(5, 5), 1), None);
    }
}
