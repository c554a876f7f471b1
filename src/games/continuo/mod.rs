//! Continuo: square cards of 4x4 colour grids.
//!
//! - Cards carry four region colours and have two orientations
//! - Cards may be placed at any cell offset touching the existing layout
//! - Placements score by the same-colour chains they extend, with a bonus
//!   for chains that close into a loop

mod board;
mod card;
mod config;
mod evaluator;
mod variant;

pub use board::{footprint, CellInfo, ContinuoBoard, ContinuoPlacedCard};
pub use card::{ContinuoCard, ContinuoColour, ContinuoOrientation, CARD_SIZE};
pub use config::ContinuoConfig;
pub use evaluator::{evaluate_card, find_chains, Chain, ContinuoMove};
pub use variant::Continuo;
