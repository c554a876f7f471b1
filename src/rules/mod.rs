//! Variant-agnostic rules surface.
//!
//! Variants implement `Variant` (and `TileBoard` for their board) to define:
//! - The canonical card set and deck
//! - Legal placements and their scores
//! - The opening length
//!
//! Everything else here (selection, opening, sessions) is written once
//! against that trait.

pub mod opening;
pub mod selection;
pub mod session;
pub mod variant;

pub use opening::{Opening, OpeningState};
pub use selection::{best_score, moves_with_score, random_best, random_worst, worst_score};
pub use session::Session;
pub use variant::{rank_moves, MoveOf, PlacedOf, PossibleMove, TileBoard, Variant};
