//! Turn driver with integrity checks.
//!
//! A `Session` owns a variant, the current board and the move list for the
//! card in hand. Every committed placement must come from that move list, so
//! a board built through a session only ever holds opening cards and
//! evaluator-approved placements.

use crate::core::{GameError, GameRng, Result};

use super::opening::Opening;
use super::selection::{random_best, random_worst};
use super::variant::{MoveOf, PlacedOf, TileBoard, Variant};

/// Card in hand with its ranked moves.
struct Pending<V: Variant> {
    card: V::Card,
    moves: Vec<MoveOf<V>>,
}

/// A single game in progress.
pub struct Session<V: Variant> {
    variant: V,
    board: V::Board,
    pending: Option<Pending<V>>,
    turn: u32,
    total_score: i64,
}

impl<V: Variant> Session<V> {
    /// Reset the deck and play the opening.
    pub fn new(mut variant: V) -> Result<Self> {
        variant.deck_mut().reset();

        let mut board = variant.empty_board();
        let mut opening = Opening::new(variant.opening_cards());
        while let Some(placed) = opening.next_placement(&mut variant, &board)? {
            board = board.place_card(&placed)?;
        }

        Ok(Self {
            variant,
            board,
            pending: None,
            turn: 0,
            total_score: 0,
        })
    }

    /// The variant being played.
    #[must_use]
    pub fn variant(&self) -> &V {
        &self.variant
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &V::Board {
        &self.board
    }

    /// Completed turns, not counting the opening.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Sum of the scores of every committed move.
    #[must_use]
    pub fn total_score(&self) -> i64 {
        self.total_score
    }

    /// Cards left to draw.
    #[must_use]
    pub fn cards_left(&self) -> usize {
        self.variant.deck().num_cards_left()
    }

    /// Check if the deck is empty and no card is in hand.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.pending.is_none() && self.variant.deck().is_empty()
    }

    /// The card in hand, if one has been drawn.
    #[must_use]
    pub fn pending_card(&self) -> Option<&V::Card> {
        self.pending.as_ref().map(|p| &p.card)
    }

    /// Ranked moves for the card in hand, empty if none has been drawn.
    #[must_use]
    pub fn pending_moves(&self) -> &[MoveOf<V>] {
        self.pending.as_ref().map_or(&[], |p| p.moves.as_slice())
    }

    /// Draw the next card and evaluate it.
    ///
    /// Drawing again before committing returns the existing moves.
    pub fn draw(&mut self) -> Result<&[MoveOf<V>]> {
        if self.pending.is_none() {
            let card = self.variant.deck_mut().next_card()?;
            let moves = self.variant.evaluate_card(&self.board, &card)?;
            self.pending = Some(Pending { card, moves });
        }
        Ok(self.pending_moves())
    }

    /// Commit a placement for the card in hand and return the chosen move.
    ///
    /// The placement is matched against the pending moves by anchor and
    /// orientation; anything else is `IllegalPlacement` and leaves the card
    /// in hand.
    pub fn commit(&mut self, placed: &PlacedOf<V>) -> Result<MoveOf<V>> {
        let pending = self.pending.as_ref().ok_or(GameError::NoPendingCard)?;
        let index = pending
            .moves
            .iter()
            .position(|m| self.variant.placed_cards_have_same_placement(&m.placed_card, placed))
            .ok_or(GameError::IllegalPlacement {
                row: placed.row,
                col: placed.col,
            })?;

        let board = self.board.place_card(&pending.moves[index].placed_card)?;
        let chosen = match self.pending.take() {
            Some(mut pending) => pending.moves.swap_remove(index),
            None => return Err(GameError::NoPendingCard),
        };

        self.board = board;
        self.total_score += i64::from(chosen.score);
        self.turn += 1;
        log::debug!(
            "{} turn {}: placed at ({}, {}) for {}",
            self.variant.name(),
            self.turn,
            chosen.placed_card.row,
            chosen.placed_card.col,
            chosen.score
        );
        Ok(chosen)
    }

    /// Draw, pick uniformly among the best moves, and commit.
    pub fn play_best(&mut self, rng: &mut GameRng) -> Result<MoveOf<V>> {
        let moves = self.draw()?;
        let placed = random_best(moves, rng)
            .map(|m| m.placed_card.clone())
            .ok_or(GameError::NoLegalPlacement { card_count: self.board.len() })?;
        self.commit(&placed)
    }

    /// Draw, pick uniformly among the worst moves, and commit.
    pub fn play_worst(&mut self, rng: &mut GameRng) -> Result<MoveOf<V>> {
        let moves = self.draw()?;
        let placed = random_worst(moves, rng)
            .map(|m| m.placed_card.clone())
            .ok_or(GameError::NoLegalPlacement { card_count: self.board.len() })?;
        self.commit(&placed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::continuo::Continuo;
    use crate::games::hexago::Hexago;

    #[test]
    fn test_new_session_plays_opening() {
        let session = Session::new(Continuo::new(3)).unwrap();

        assert_eq!(session.board().len(), 2);
        assert_eq!(session.cards_left(), 58);
        assert_eq!(session.turn(), 0);
        assert!(session.pending_moves().is_empty());
        assert!(!session.is_finished());
    }

    #[test]
    fn test_opening_length_follows_config() {
        use crate::games::hexago::HexagoConfig;

        for cards in [1, 5] {
            let variant = Hexago::with_config(3, HexagoConfig::default().with_opening_cards(cards));
            let session = Session::new(variant).unwrap();

            assert_eq!(session.board().len(), cards);
            assert_eq!(session.cards_left(), 120 - cards);
        }
    }

    #[test]
    fn test_draw_is_idempotent_until_commit() {
        let mut session = Session::new(Hexago::new(3)).unwrap();

        let first = session.draw().unwrap().len();
        let left = session.cards_left();
        let second = session.draw().unwrap().len();

        assert_eq!(first, second);
        assert_eq!(session.cards_left(), left);
        assert!(session.pending_card().is_some());
    }

    #[test]
    fn test_commit_without_draw() {
        let mut session = Session::new(Hexago::new(3)).unwrap();
        let placed = session.board().placed_cards()[0];

        assert_eq!(session.commit(&placed), Err(GameError::NoPendingCard));
    }

    #[test]
    fn test_commit_rejects_unoffered_placement() {
        let mut session = Session::new(Hexago::new(3)).unwrap();
        session.draw().unwrap();

        // The origin is occupied by the opening, so it is never offered.
        let origin = session.board().placed_cards()[0];
        assert_eq!(
            session.commit(&origin),
            Err(GameError::IllegalPlacement { row: 0, col: 0 })
        );
        assert!(session.pending_card().is_some());
    }

    #[test]
    fn test_commit_accepts_offered_placement() {
        let mut session = Session::new(Hexago::new(3)).unwrap();
        let target = session.draw().unwrap()[0].placed_card;

        let chosen = session.commit(&target).unwrap();

        assert!(chosen.placed_card.has_same_placement(&target));
        assert_eq!(session.board().len(), 4);
        assert_eq!(session.turn(), 1);
        assert_eq!(session.total_score(), i64::from(chosen.score));
        assert!(session.pending_card().is_none());
    }

    #[test]
    fn test_play_best_beats_worst() {
        let mut rng = GameRng::new(8);
        let mut session = Session::new(Continuo::new(8)).unwrap();

        let moves = session.draw().unwrap().to_vec();
        let best = session.play_best(&mut rng).unwrap();

        assert_eq!(best.score, moves[0].score);
        assert!(best.score >= moves[moves.len() - 1].score);
    }
}
