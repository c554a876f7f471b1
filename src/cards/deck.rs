//! Shuffled draw pile over a variant's canonical card set.
//!
//! The canonical set is generated once and kept in generation order so hosts
//! can pre-render every card. `reset` refills the pile from it and
//! reshuffles; draws pop from the top (end of the vec).

use crate::core::{GameError, GameRng, Result};

/// A finite, non-repeating deck.
///
/// ## Example
///
/// ```
/// use tileplace::cards::Deck;
/// use tileplace::core::GameRng;
///
/// let mut deck = Deck::new(vec![1, 2, 3], GameRng::new(42));
/// assert_eq!(deck.num_cards_left(), 3);
///
/// let mut drawn: Vec<_> = (0..3).map(|_| deck.next_card().unwrap()).collect();
/// drawn.sort();
/// assert_eq!(drawn, vec![1, 2, 3]);
/// assert!(deck.next_card().is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Deck<C> {
    original: Vec<C>,
    cards: Vec<C>,
    rng: GameRng,
}

impl<C: Clone> Deck<C> {
    /// Create a deck over `original` and shuffle it.
    #[must_use]
    pub fn new(original: Vec<C>, rng: GameRng) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(original.len()),
            original,
            rng,
        };
        deck.reset();
        deck
    }

    /// Refill from the canonical set and reshuffle.
    pub fn reset(&mut self) {
        self.cards.clear();
        self.cards.extend(self.original.iter().cloned());
        self.rng.shuffle(&mut self.cards);
        log::info!("deck reset with {} cards", self.cards.len());
    }

    /// Draw the top card.
    ///
    /// Fails with `DeckExhausted` when no cards remain; callers should check
    /// `num_cards_left` first.
    pub fn next_card(&mut self) -> Result<C> {
        self.cards.pop().ok_or(GameError::DeckExhausted)
    }

    /// Cards remaining in the pile.
    #[must_use]
    pub fn num_cards_left(&self) -> usize {
        self.cards.len()
    }

    /// Check if the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The canonical card set in generation order, stable across resets.
    #[must_use]
    pub fn original_cards(&self) -> &[C] {
        &self.original
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Deck<u32> {
        Deck::new((0..20).collect(), GameRng::new(7))
    }

    #[test]
    fn test_draw_until_exhausted() {
        let mut deck = sample();

        for left in (0..20).rev() {
            assert!(deck.next_card().is_ok());
            assert_eq!(deck.num_cards_left(), left);
        }

        assert!(deck.is_empty());
        assert_eq!(deck.next_card(), Err(GameError::DeckExhausted));
    }

    #[test]
    fn test_draws_are_distinct() {
        let mut deck = sample();
        let mut drawn: Vec<_> = std::iter::from_fn(|| deck.next_card().ok()).collect();
        drawn.sort_unstable();
        assert_eq!(drawn, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_reset_reshuffles_same_cards() {
        let mut deck = sample();
        let first: Vec<_> = std::iter::from_fn(|| deck.next_card().ok()).collect();

        deck.reset();
        assert_eq!(deck.num_cards_left(), 20);
        let second: Vec<_> = std::iter::from_fn(|| deck.next_card().ok()).collect();

        assert_ne!(first, second);
        assert_eq!(deck.original_cards(), (0..20).collect::<Vec<_>>().as_slice());
    }

    #[test]
    fn test_same_seed_same_order() {
        let mut a = sample();
        let mut b = sample();

        for _ in 0..20 {
            assert_eq!(a.next_card(), b.next_card());
        }
    }
}
