//! Core engine types shared by both variants: cells, RNG, errors.
//!
//! Nothing in here knows about squares or hexagons.

pub mod cell;
pub mod error;
pub mod rng;

pub use cell::{Bounds, Cell};
pub use error::{GameError, Result};
pub use rng::{GameRng, GameRngState};
