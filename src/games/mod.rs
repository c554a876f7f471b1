//! Concrete variants.
//!
//! - `continuo`: square 4x4 colour cards scored by chains
//! - `hexago`: hex cards scored by matching wedges

pub mod continuo;
pub mod hexago;
