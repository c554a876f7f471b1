//! # tileplace
//!
//! Move evaluation for two tile-placement games sharing one engine.
//!
//! ## Design Principles
//!
//! 1. **Variant-Agnostic Hosts**: UI and AI code drives a game through the
//!    `Variant` trait and never names a variant's card types.
//!
//! 2. **Persistent Boards**: placing a card returns a new board. Trial
//!    placements during evaluation are O(1) clones via `im-rs`.
//!
//! 3. **Deterministic Evaluation**: the evaluator is pure and its ranking is
//!    stable. Randomness only enters through an explicit `GameRng`.
//!
//! ## Modules
//!
//! - `core`: cells, bounds, errors, RNG
//! - `cards`: decks and placed cards
//! - `rules`: the `Variant`/`TileBoard` traits, move ranking and selection,
//!   opening sequence and game sessions
//! - `games`: the Continuo and Hexago variants

pub mod core;
pub mod cards;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{Bounds, Cell, GameError, GameRng, GameRngState, Result};

pub use crate::cards::{Deck, Orientation, PlacedCard};

pub use crate::rules::{
    rank_moves, random_best, random_worst,
    MoveOf, PlacedOf, PossibleMove, TileBoard, Variant,
    Opening, OpeningState, Session,
};

pub use crate::games::continuo::Continuo;
pub use crate::games::hexago::Hexago;
