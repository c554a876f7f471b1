//! Placed cards and orientations.
//!
//! A `PlacedCard` pins a card to an anchor cell in one orientation. It is a
//! plain value: rotating or moving it yields a new `PlacedCard` and never
//! checks legality. Legality belongs to the evaluator.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::core::Cell;

/// Closed set of orientations for one variant.
///
/// `rotate_cw` and `rotate_ccw` must be inverse cyclic permutations of
/// `ALL`, and `Default` is the orientation used for opening cards.
pub trait Orientation: Copy + Eq + Ord + Debug + Default + 'static {
    /// Every orientation in enumeration order.
    const ALL: &'static [Self];

    /// Next orientation clockwise.
    #[must_use]
    fn rotate_cw(self) -> Self;

    /// Next orientation counter-clockwise.
    #[must_use]
    fn rotate_ccw(self) -> Self;
}

/// A card fixed to a board position.
///
/// ## Example
///
/// ```
/// use tileplace::cards::PlacedCard;
/// use tileplace::games::continuo::{ContinuoCard, ContinuoColour, ContinuoOrientation};
///
/// let card = ContinuoCard::new(
///     ContinuoColour::Red,
///     ContinuoColour::Green,
///     ContinuoColour::Blue,
///     ContinuoColour::Yellow,
/// );
/// let placed = PlacedCard::new(card, 0, 0, ContinuoOrientation::NorthSouth);
/// let moved = placed.rotate_cw().move_to(4, 0);
///
/// assert_eq!(moved.orientation, ContinuoOrientation::EastWest);
/// assert_eq!((moved.row, moved.col), (4, 0));
/// assert!(!moved.has_same_placement(&placed));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedCard<C, O> {
    pub card: C,
    pub row: i32,
    pub col: i32,
    pub orientation: O,
}

impl<C, O: Orientation> PlacedCard<C, O> {
    /// Create a placed card.
    #[must_use]
    pub fn new(card: C, row: i32, col: i32, orientation: O) -> Self {
        Self {
            card,
            row,
            col,
            orientation,
        }
    }

    /// Create a placed card anchored at `cell`.
    #[must_use]
    pub fn at(card: C, cell: Cell, orientation: O) -> Self {
        Self::new(card, cell.row, cell.col, orientation)
    }

    /// The anchor cell.
    #[must_use]
    pub fn anchor(&self) -> Cell {
        Cell::new(self.row, self.col)
    }

    /// Same card and position, next orientation clockwise.
    #[must_use]
    pub fn rotate_cw(&self) -> Self
    where
        C: Clone,
    {
        Self::new(self.card.clone(), self.row, self.col, self.orientation.rotate_cw())
    }

    /// Same card and position, next orientation counter-clockwise.
    #[must_use]
    pub fn rotate_ccw(&self) -> Self
    where
        C: Clone,
    {
        Self::new(self.card.clone(), self.row, self.col, self.orientation.rotate_ccw())
    }

    /// Same card and orientation at a new anchor.
    #[must_use]
    pub fn move_to(&self, row: i32, col: i32) -> Self
    where
        C: Clone,
    {
        Self::new(self.card.clone(), row, col, self.orientation)
    }

    /// Compare anchor and orientation, ignoring which card is placed.
    #[must_use]
    pub fn has_same_placement<D>(&self, other: &PlacedCard<D, O>) -> bool {
        self.row == other.row && self.col == other.col && self.orientation == other.orientation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
    enum Turn {
        #[default]
        A,
        B,
        C,
    }

    impl Orientation for Turn {
        const ALL: &'static [Self] = &[Turn::A, Turn::B, Turn::C];

        fn rotate_cw(self) -> Self {
            match self {
                Turn::A => Turn::B,
                Turn::B => Turn::C,
                Turn::C => Turn::A,
            }
        }

        fn rotate_ccw(self) -> Self {
            match self {
                Turn::A => Turn::C,
                Turn::B => Turn::A,
                Turn::C => Turn::B,
            }
        }
    }

    #[test]
    fn test_rotate_round_trip() {
        for &o in Turn::ALL {
            let placed = PlacedCard::new('x', 1, 2, o);
            assert_eq!(placed.rotate_cw().rotate_ccw(), placed);
            assert_eq!(placed.rotate_ccw().rotate_cw(), placed);
        }
    }

    #[test]
    fn test_move_preserves_orientation() {
        let placed = PlacedCard::new('x', 1, 2, Turn::C);
        let moved = placed.move_to(-5, 9);

        assert_eq!(moved.anchor(), Cell::new(-5, 9));
        assert_eq!(moved.orientation, Turn::C);
        assert_eq!(moved.card, 'x');
    }

    #[test]
    fn test_same_placement_ignores_card() {
        let a = PlacedCard::new('x', 0, 0, Turn::A);
        let b = PlacedCard::new("other", 0, 0, Turn::A);
        let c = PlacedCard::new('x', 0, 0, Turn::B);

        assert!(a.has_same_placement(&b));
        assert!(!a.has_same_placement(&c));
        assert_ne!(a, c);
    }
}
