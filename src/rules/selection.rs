//! Picking a move from a ranked list.
//!
//! The evaluator is deterministic; the only randomness is choosing among
//! moves tied at the best or worst score. The RNG is passed in so tests can
//! seed it.

use crate::core::GameRng;

use super::variant::PossibleMove;

/// Score of the first (best) move.
#[must_use]
pub fn best_score<C, O, E>(moves: &[PossibleMove<C, O, E>]) -> Option<i32> {
    moves.first().map(|m| m.score)
}

/// Score of the last (worst) move.
#[must_use]
pub fn worst_score<C, O, E>(moves: &[PossibleMove<C, O, E>]) -> Option<i32> {
    moves.last().map(|m| m.score)
}

/// All moves scoring exactly `score`, in list order.
pub fn moves_with_score<C, O, E>(
    moves: &[PossibleMove<C, O, E>],
    score: i32,
) -> impl Iterator<Item = &PossibleMove<C, O, E>> {
    moves.iter().filter(move |m| m.score == score)
}

/// Uniformly pick one of the moves tied at the best score.
pub fn random_best<'a, C, O, E>(
    moves: &'a [PossibleMove<C, O, E>],
    rng: &mut GameRng,
) -> Option<&'a PossibleMove<C, O, E>> {
    let best = best_score(moves)?;
    pick_tied(moves, best, rng)
}

/// Uniformly pick one of the moves tied at the worst score.
pub fn random_worst<'a, C, O, E>(
    moves: &'a [PossibleMove<C, O, E>],
    rng: &mut GameRng,
) -> Option<&'a PossibleMove<C, O, E>> {
    let worst = worst_score(moves)?;
    pick_tied(moves, worst, rng)
}

fn pick_tied<'a, C, O, E>(
    moves: &'a [PossibleMove<C, O, E>],
    score: i32,
    rng: &mut GameRng,
) -> Option<&'a PossibleMove<C, O, E>> {
    let tied: Vec<_> = moves_with_score(moves, score).collect();
    rng.choose(&tied).copied()
}
