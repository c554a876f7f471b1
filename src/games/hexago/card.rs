//! Hexago cards: six wedges of (colour, number).
//!
//! Wedge `i` carries the number `i + 1`, and the wedge colours repeat three
//! distinct colours twice, `a b c a b c`. Rotations of a card are the same
//! physical card, so cards are stored rotated until the wedge numbered 1 is
//! wedge 0.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::cards::Orientation;

/// Wedges per card.
pub const WEDGES: usize = 6;

/// Hexago colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HexColour {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
}

impl HexColour {
    pub const ALL: [HexColour; 6] = [
        HexColour::Red,
        HexColour::Orange,
        HexColour::Yellow,
        HexColour::Green,
        HexColour::Blue,
        HexColour::Purple,
    ];
}

impl std::fmt::Display for HexColour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let c = match self {
            HexColour::Red => 'R',
            HexColour::Orange => 'O',
            HexColour::Yellow => 'Y',
            HexColour::Green => 'G',
            HexColour::Blue => 'B',
            HexColour::Purple => 'P',
        };
        write!(f, "{c}")
    }
}

/// Card rotation in 60 degree clockwise steps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HexRotation {
    #[default]
    Deg0,
    Deg60,
    Deg120,
    Deg180,
    Deg240,
    Deg300,
}

impl HexRotation {
    /// Number of 60 degree steps.
    #[must_use]
    pub const fn steps(self) -> usize {
        self as usize
    }

    /// Rotation of `steps` 60 degree steps, modulo a full turn.
    #[must_use]
    pub fn from_steps(steps: usize) -> Self {
        Self::ALL[steps % WEDGES]
    }
}

impl Orientation for HexRotation {
    const ALL: &'static [Self] = &[
        HexRotation::Deg0,
        HexRotation::Deg60,
        HexRotation::Deg120,
        HexRotation::Deg180,
        HexRotation::Deg240,
        HexRotation::Deg300,
    ];

    fn rotate_cw(self) -> Self {
        Self::from_steps(self.steps() + 1)
    }

    fn rotate_ccw(self) -> Self {
        Self::from_steps(self.steps() + WEDGES - 1)
    }
}

/// One wedge of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Wedge {
    pub colour: HexColour,
    /// 1 through 6.
    pub number: u8,
}

impl Wedge {
    #[must_use]
    pub const fn new(colour: HexColour, number: u8) -> Self {
        Self { colour, number }
    }
}

impl std::fmt::Display for Wedge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.colour, self.number)
    }
}

/// One Hexago card, stored under its canonical rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HexCard {
    wedges: [Wedge; WEDGES],
}

impl HexCard {
    /// Build a card from wedges in clockwise order.
    ///
    /// Panics unless the numbers are 1 through 6, each exactly once.
    #[must_use]
    pub fn new(wedges: [Wedge; WEDGES]) -> Self {
        let mut numbers = wedges.map(|w| w.number);
        numbers.sort_unstable();
        assert!(numbers == [1, 2, 3, 4, 5, 6], "Wedge numbers must be 1 through 6: {wedges:?}");

        let shift = wedges.iter().position(|w| w.number == 1).unwrap_or(0);
        Self {
            wedges: rotated(&wedges, shift),
        }
    }

    /// Card with colours `a b c a b c` and numbers 1 through 6 clockwise.
    #[must_use]
    pub fn from_colours(a: HexColour, b: HexColour, c: HexColour) -> Self {
        let pattern = [a, b, c];
        let wedges = std::array::from_fn(|i| Wedge::new(pattern[i % 3], i as u8 + 1));
        Self::new(wedges)
    }

    /// Every distinct card, sorted by canonical wedges.
    ///
    /// ```
    /// use tileplace::games::hexago::HexCard;
    ///
    /// assert_eq!(HexCard::all_cards().len(), 120);
    /// ```
    #[must_use]
    pub fn all_cards() -> Vec<HexCard> {
        let mut cards = BTreeSet::new();
        for a in HexColour::ALL {
            for b in HexColour::ALL {
                for c in HexColour::ALL {
                    if a != b && b != c && a != c {
                        cards.insert(Self::from_colours(a, b, c));
                    }
                }
            }
        }
        cards.into_iter().collect()
    }

    /// Canonical wedges in clockwise order.
    #[must_use]
    pub fn wedges(&self) -> &[Wedge; WEDGES] {
        &self.wedges
    }

    /// Wedge by canonical index.
    #[must_use]
    pub fn wedge(&self, index: usize) -> Wedge {
        self.wedges[index % WEDGES]
    }

    /// Canonical index of the wedge pointing in `direction` when the card is
    /// placed with `rotation`.
    #[must_use]
    pub fn wedge_index_facing(direction: usize, rotation: HexRotation) -> usize {
        (direction + WEDGES - rotation.steps()) % WEDGES
    }
}

impl std::fmt::Display for HexCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, wedge) in self.wedges.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{wedge}")?;
        }
        Ok(())
    }
}

fn rotated(wedges: &[Wedge; WEDGES], shift: usize) -> [Wedge; WEDGES] {
    std::array::from_fn(|i| wedges[(i + shift) % WEDGES])
}
