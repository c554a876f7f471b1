//! Hexago: hexagonal cards of six coloured, numbered wedges.
//!
//! - Cards are placed one per hex cell, next to an existing card
//! - Each pair of touching wedges scores for equal colours and for equal
//!   numbers

mod board;
mod card;
mod config;
mod evaluator;
mod variant;

pub use board::{neighbour, opposite, wedge_facing, HexBoard, HexPlacedCard, DIRECTIONS};
pub use card::{HexCard, HexColour, HexRotation, Wedge, WEDGES};
pub use config::HexagoConfig;
pub use evaluator::{evaluate_card, find_matches, HexagoMove, Match};
pub use variant::Hexago;
