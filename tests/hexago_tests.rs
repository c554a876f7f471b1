//! Hexago integration tests through the public adapter surface.

use tileplace::cards::PlacedCard;
use tileplace::core::{Cell, GameError, GameRng};
use tileplace::games::hexago::{
    neighbour, opposite, HexBoard, HexCard, HexColour, HexRotation, Hexago, HexagoConfig, Wedge, WEDGES,
};
use tileplace::rules::{Session, TileBoard, Variant};

use HexColour::{Blue, Green, Orange, Purple, Red, Yellow};

/// Two cards where wedge 1 of the first touches wedge 4 of the second, both
/// green 2.
fn touching_pair() -> HexBoard {
    let a = HexCard::from_colours(Red, Green, Blue);
    let numbers = [1, 3, 4, 5, 2, 6];
    let colours = [Red, Orange, Yellow, Purple, Green, Blue];
    let b = HexCard::new(std::array::from_fn(|i| Wedge::new(colours[i], numbers[i])));

    HexBoard::new()
        .place_card(&PlacedCard::at(a, Cell::ORIGIN, HexRotation::Deg0))
        .unwrap()
        .place_card(&PlacedCard::at(b, neighbour(Cell::ORIGIN, 1), HexRotation::Deg0))
        .unwrap()
}

fn direction_to(from: Cell, to: Cell) -> Option<usize> {
    (0..WEDGES).find(|&d| neighbour(from, d) == to)
}

// =============================================================================
// Adjacency
// =============================================================================

#[test]
fn test_matches_only_between_adjacent_wedges() {
    let board = touching_pair();
    let variant = Hexago::new(0);
    let card = HexCard::from_colours(Yellow, Purple, Orange);

    let moves = variant.evaluate_card(&board, &card).unwrap();

    for m in &moves {
        let cell = m.placed_card.anchor();
        let occupied = (0..WEDGES).filter(|&d| board.is_occupied(neighbour(cell, d))).count();
        assert_eq!(m.evidence.len(), occupied);

        for found in &m.evidence {
            let d = direction_to(cell, found.neighbour).expect("match with a non-adjacent card");
            let other = board.get(found.neighbour).unwrap();
            assert_eq!(found.wedge, HexCard::wedge_index_facing(d, m.placed_card.orientation));
            assert_eq!(found.neighbour_wedge, HexCard::wedge_index_facing(opposite(d), other.orientation));
        }
    }

    // The slot between both cards borders both of them.
    let slot = neighbour(Cell::ORIGIN, 2);
    let at_slot: Vec<_> = moves.iter().filter(|m| m.placed_card.anchor() == slot).collect();
    assert_eq!(at_slot.len(), WEDGES);
    for m in at_slot {
        let mut touching: Vec<_> = m.evidence.iter().map(|found| found.neighbour).collect();
        touching.sort();
        assert_eq!(touching, vec![Cell::ORIGIN, Cell::new(1, 0)]);
    }
}

#[test]
fn test_surrounded_cell_offered_once() {
    let hole = Cell::new(3, -2);
    let cards = HexCard::all_cards();
    let board = (0..WEDGES).fold(HexBoard::new(), |board, d| {
        let placed = PlacedCard::at(cards[d], neighbour(hole, d), HexRotation::from_steps(d));
        board.place_card(&placed).unwrap()
    });

    let anchors = board.find_available_card_positions();
    assert_eq!(anchors.iter().filter(|&&a| a == hole).count(), 1);
    assert!(anchors.windows(2).all(|w| w[0] < w[1]));

    let moves = Hexago::new(0).evaluate_card(&board, &cards[50]).unwrap();
    let at_hole: Vec<_> = moves.iter().filter(|m| m.placed_card.anchor() == hole).collect();
    assert_eq!(at_hole.len(), WEDGES);
    assert!(at_hole.iter().all(|m| m.evidence.len() == WEDGES));
}

#[test]
fn test_weights_apply_per_pair() {
    let board = touching_pair();
    let config = HexagoConfig::default().with_colour_match_points(3).with_number_match_points(5);
    let variant = Hexago::with_config(0, config);

    let moves = variant.evaluate_card(&board, &HexCard::from_colours(Green, Red, Blue)).unwrap();
    for m in &moves {
        let expected: i32 = m
            .evidence
            .iter()
            .map(|found| 3 * i32::from(found.colours_match) + 5 * i32::from(found.numbers_match))
            .sum();
        assert_eq!(m.score, expected);
    }
}

// =============================================================================
// Sessions
// =============================================================================

#[test]
fn test_full_game_exhausts_deck() {
    let mut rng = GameRng::new(2024);
    let mut session = Session::new(Hexago::new(2024)).unwrap();
    assert_eq!(session.board().len(), 3);

    while !session.is_finished() {
        session.play_best(&mut rng).unwrap();
    }

    assert_eq!(session.board().len(), 120);
    assert_eq!(session.turn(), 117);
    assert_eq!(session.draw().unwrap_err(), GameError::DeckExhausted);

    let mut cards: Vec<_> = session.board().placed_cards().iter().map(|p| p.card).collect();
    cards.sort();
    assert_eq!(cards, session.variant().original_cards());
}

#[test]
fn test_session_with_long_opening() {
    let config = HexagoConfig::default().with_opening_cards(6);
    let mut rng = GameRng::new(31);
    let mut session = Session::new(Hexago::with_config(31, config)).unwrap();

    assert_eq!(session.board().len(), 6);
    assert_eq!(session.cards_left(), 114);
    assert_eq!(session.board().placed_cards()[0].anchor(), Cell::ORIGIN);

    session.play_best(&mut rng).unwrap();
    assert_eq!(session.board().len(), 7);
    assert_eq!(session.turn(), 1);
}

#[test]
fn test_best_never_scores_below_worst() {
    let mut best_rng = GameRng::new(6);
    let mut worst_rng = GameRng::new(6);
    let mut best = Session::new(Hexago::new(6)).unwrap();
    let mut worst = Session::new(Hexago::new(6)).unwrap();

    // Same deck order, so the first drawn card is the same in both.
    let first_best = best.play_best(&mut best_rng).unwrap();
    let first_worst = worst.play_worst(&mut worst_rng).unwrap();
    assert_eq!(first_best.placed_card.card, first_worst.placed_card.card);
    assert!(first_best.score >= first_worst.score);
}
