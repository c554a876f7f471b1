//! Variant-independent card plumbing: decks and placed cards.
//!
//! ## Key Types
//!
//! - `Deck`: shuffled draw pile over a canonical card set
//! - `PlacedCard`: a card pinned to an anchor cell in one orientation
//! - `Orientation`: closed set of rotations for a variant

pub mod deck;
pub mod placed;

pub use deck::Deck;
pub use placed::{Orientation, PlacedCard};
