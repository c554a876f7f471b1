//! Continuo cards: 4x4 colour grids.
//!
//! Every card is built from four region colours:
//!
//! ```text
//!  C N N C      C = corner
//!  E M M E      N = north/south edge
//!  E M M E      E = east/west edge
//!  C N N C      M = centre
//! ```
//!
//! The corner colour differs from both edge colours, and so does the centre
//! colour. Cards are symmetric under a half turn, so only two orientations
//! exist. A card and its quarter turn are the same physical card; the
//! canonical grid is the smaller of the two.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::cards::Orientation;

/// Cells along each side of a card.
pub const CARD_SIZE: i32 = 4;

const N: usize = CARD_SIZE as usize;

type Grid<T> = [[T; N]; N];

/// Continuo colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ContinuoColour {
    Red,
    Yellow,
    Green,
    Blue,
}

impl ContinuoColour {
    pub const ALL: [ContinuoColour; 4] = [
        ContinuoColour::Red,
        ContinuoColour::Yellow,
        ContinuoColour::Green,
        ContinuoColour::Blue,
    ];
}

impl std::fmt::Display for ContinuoColour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let c = match self {
            ContinuoColour::Red => 'R',
            ContinuoColour::Yellow => 'Y',
            ContinuoColour::Green => 'G',
            ContinuoColour::Blue => 'B',
        };
        write!(f, "{c}")
    }
}

/// The two distinct orientations of a Continuo card.
///
/// `EastWest` is the canonical grid turned a quarter clockwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ContinuoOrientation {
    #[default]
    NorthSouth,
    EastWest,
}

impl Orientation for ContinuoOrientation {
    const ALL: &'static [Self] = &[ContinuoOrientation::NorthSouth, ContinuoOrientation::EastWest];

    fn rotate_cw(self) -> Self {
        match self {
            ContinuoOrientation::NorthSouth => ContinuoOrientation::EastWest,
            ContinuoOrientation::EastWest => ContinuoOrientation::NorthSouth,
        }
    }

    fn rotate_ccw(self) -> Self {
        // Half-turn symmetry makes both directions the same swap.
        self.rotate_cw()
    }
}

/// One Continuo card, stored in canonical form.
///
/// `segments` labels each maximal same-colour region of the grid; the chain
/// scorer counts regions, not cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ContinuoCard {
    grid: Grid<ContinuoColour>,
    segments: Grid<u8>,
}

impl ContinuoCard {
    /// Build a card from its region colours.
    ///
    /// Panics if an edge colour matches the corner or centre colour.
    #[must_use]
    pub fn new(
        corner: ContinuoColour,
        north_south: ContinuoColour,
        east_west: ContinuoColour,
        centre: ContinuoColour,
    ) -> Self {
        assert!(
            Self::is_valid_layout(corner, north_south, east_west, centre),
            "Edge colours must differ from corner and centre: {corner} {north_south} {east_west} {centre}"
        );

        use ContinuoColour as C;
        let (c, n, e, m) = (corner, north_south, east_west, centre);
        let grid: Grid<C> = [[c, n, n, c], [e, m, m, e], [e, m, m, e], [c, n, n, c]];

        let turned = quarter_turn(&grid);
        let grid = if turned < grid { turned } else { grid };
        Self {
            grid,
            segments: label_segments(&grid),
        }
    }

    fn is_valid_layout(
        corner: ContinuoColour,
        north_south: ContinuoColour,
        east_west: ContinuoColour,
        centre: ContinuoColour,
    ) -> bool {
        corner != north_south && corner != east_west && centre != north_south && centre != east_west
    }

    /// Every distinct card, sorted by canonical grid.
    ///
    /// ```
    /// use tileplace::games::continuo::ContinuoCard;
    ///
    /// assert_eq!(ContinuoCard::all_cards().len(), 60);
    /// ```
    #[must_use]
    pub fn all_cards() -> Vec<ContinuoCard> {
        let mut cards = BTreeSet::new();
        for corner in ContinuoColour::ALL {
            for north_south in ContinuoColour::ALL {
                for east_west in ContinuoColour::ALL {
                    for centre in ContinuoColour::ALL {
                        if Self::is_valid_layout(corner, north_south, east_west, centre) {
                            cards.insert(Self::new(corner, north_south, east_west, centre));
                        }
                    }
                }
            }
        }
        cards.into_iter().collect()
    }

    /// The canonical grid, row-major.
    #[must_use]
    pub fn grid(&self) -> &[[ContinuoColour; N]; N] {
        &self.grid
    }

    /// Colour at local `(row, col)` when placed in `orientation`.
    #[must_use]
    pub fn colour_at(&self, row: usize, col: usize, orientation: ContinuoOrientation) -> ContinuoColour {
        let (r, c) = canonical_position(row, col, orientation);
        self.grid[r][c]
    }

    /// Region label at local `(row, col)` when placed in `orientation`.
    #[must_use]
    pub fn segment_at(&self, row: usize, col: usize, orientation: ContinuoOrientation) -> u8 {
        let (r, c) = canonical_position(row, col, orientation);
        self.segments[r][c]
    }

    /// Number of distinct regions on the card.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.iter().flatten().copied().max().map_or(0, |m| m as usize + 1)
    }
}

impl std::fmt::Display for ContinuoCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.grid.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for colour in row {
                write!(f, "{colour}")?;
            }
        }
        Ok(())
    }
}

/// Map a placed position back onto the canonical grid.
fn canonical_position(row: usize, col: usize, orientation: ContinuoOrientation) -> (usize, usize) {
    match orientation {
        ContinuoOrientation::NorthSouth => (row, col),
        ContinuoOrientation::EastWest => (N - 1 - col, row),
    }
}

fn quarter_turn<T: Copy>(grid: &Grid<T>) -> Grid<T> {
    let mut out = *grid;
    for (row, out_row) in out.iter_mut().enumerate() {
        for (col, cell) in out_row.iter_mut().enumerate() {
            *cell = grid[N - 1 - col][row];
        }
    }
    out
}

/// Flood-fill same-colour regions, labelled in row-major discovery order.
fn label_segments(grid: &Grid<ContinuoColour>) -> Grid<u8> {
    let mut labels: Grid<Option<u8>> = [[None; N]; N];
    let mut next = 0u8;

    for row in 0..N {
        for col in 0..N {
            if labels[row][col].is_some() {
                continue;
            }
            let colour = grid[row][col];
            let mut stack = vec![(row, col)];
            labels[row][col] = Some(next);
            while let Some((r, c)) = stack.pop() {
                let neighbours = [
                    (r.wrapping_sub(1), c),
                    (r + 1, c),
                    (r, c.wrapping_sub(1)),
                    (r, c + 1),
                ];
                for (nr, nc) in neighbours {
                    if nr < N && nc < N && labels[nr][nc].is_none() && grid[nr][nc] == colour {
                        labels[nr][nc] = Some(next);
                        stack.push((nr, nc));
                    }
                }
            }
            next += 1;
        }
    }

    labels.map(|row| row.map(|label| label.unwrap_or_default()))
}
