use std::collections::HashSet;

use freecell_engine::cards::{all_suits, Card, Rank};
use freecell_engine::engine::Engine;
use freecell_engine::errors::{GameError, InvalidInput};
use freecell_engine::game::GameConfig;
use freecell_engine::piles::PileKind::{Cascade, Foundation, Open};
use freecell_engine::rules::MoveStrategy;

/// Four cascades, one suit per pile, kings at the bottom: cascade 1 is
/// clubs, 2 diamonds, 3 hearts, 4 spades, each topping out with its ace.
fn suit_per_pile_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(52);
    for k in 0..13u8 {
        for &suit in &all_suits() {
            deck.push(Card::new(suit, Rank::from_u8(13 - k)));
        }
    }
    deck
}

fn dealt_engine() -> Engine {
    let config = GameConfig::new(4, 4).expect("valid layout");
    let mut engine = Engine::new(config, MoveStrategy::SingleMove, Some(11));
    engine
        .start_game(&suit_per_pile_deck(), false)
        .expect("deal ok");
    engine
}

#[test]
fn ace_moves_to_empty_foundation_and_non_ace_does_not() {
    let mut engine = dealt_engine();
    engine
        .make_move(Cascade, 0, 12, Foundation, 0)
        .expect("top of cascade 1 is an ace");
    assert_eq!(engine.pile(Foundation, 0).unwrap().len(), 1);

    // cascade 1 now tops out with the club two; an empty foundation takes aces only
    let result = engine.make_move(Cascade, 0, 11, Foundation, 1);
    assert!(matches!(
        result,
        Err(GameError::InvalidInput(InvalidInput::CannotPlace { .. }))
    ));
}

#[test]
fn foundation_builds_up_by_suit() {
    let mut engine = dealt_engine();
    engine.make_move(Cascade, 0, 12, Foundation, 0).expect("A♣");
    engine.make_move(Cascade, 0, 11, Foundation, 0).expect("2♣");
    engine.make_move(Cascade, 0, 10, Foundation, 0).expect("3♣");
    assert_eq!(engine.pile(Foundation, 0).unwrap().len(), 3);

    // a second ace cannot land on a started foundation
    let result = engine.make_move(Cascade, 1, 12, Foundation, 0);
    assert!(matches!(
        result,
        Err(GameError::InvalidInput(InvalidInput::CannotPlace { .. }))
    ));
}

#[test]
fn foundation_rejects_wrong_suit_continuation() {
    let mut engine = dealt_engine();
    engine.make_move(Cascade, 0, 12, Foundation, 0).expect("A♣");
    engine.make_move(Cascade, 1, 12, Foundation, 1).expect("A♦");

    // the club two continues clubs, not diamonds
    let result = engine.make_move(Cascade, 0, 11, Foundation, 1);
    assert!(matches!(
        result,
        Err(GameError::InvalidInput(InvalidInput::CannotPlace { .. }))
    ));
}

#[test]
fn only_the_top_card_may_leave_a_pile() {
    let mut engine = dealt_engine();
    let result = engine.make_move(Cascade, 0, 5, Open, 0);
    assert!(matches!(
        result,
        Err(GameError::InvalidInput(InvalidInput::CannotTake {
            card: 5,
            ..
        }))
    ));
}

#[test]
fn open_piles_hold_exactly_one_card() {
    let mut engine = dealt_engine();
    engine.make_move(Cascade, 3, 12, Open, 0).expect("A♠ to cell");
    let result = engine.make_move(Cascade, 2, 12, Open, 0);
    assert!(matches!(
        result,
        Err(GameError::InvalidInput(InvalidInput::CannotPlace { .. }))
    ));

    // the held card is free to move on
    engine.make_move(Open, 0, 0, Foundation, 3).expect("A♠ out");
    assert!(engine.pile(Open, 0).unwrap().is_empty());
}

#[test]
fn cascade_builds_descend_with_alternating_color() {
    let mut engine = dealt_engine();
    engine.make_move(Cascade, 0, 12, Foundation, 0).expect("A♣");

    // red ace onto the black two continues the build
    engine
        .make_move(Cascade, 1, 12, Cascade, 0)
        .expect("A♦ on 2♣");

    // red ace onto the red two does not
    let result = engine.make_move(Cascade, 2, 12, Cascade, 1);
    assert!(matches!(
        result,
        Err(GameError::InvalidInput(InvalidInput::CannotPlace { .. }))
    ));
}

#[test]
fn cascade_rejects_wrong_rank_continuation() {
    let mut engine = dealt_engine();
    engine.make_move(Cascade, 3, 12, Open, 0).expect("A♠ aside");

    // the spade two cannot sit on the club ace: ranks must descend by one
    let result = engine.make_move(Cascade, 3, 11, Cascade, 0);
    assert!(matches!(
        result,
        Err(GameError::InvalidInput(InvalidInput::CannotPlace { .. }))
    ));
}

#[test]
fn out_of_range_pile_indices_are_invalid_input() {
    let mut engine = dealt_engine();
    let result = engine.make_move(Cascade, 4, 0, Open, 0);
    assert!(matches!(
        result,
        Err(GameError::InvalidInput(InvalidInput::NoSuchPile {
            index: 4,
            ..
        }))
    ));

    let result = engine.make_move(Cascade, 0, 12, Open, 7);
    assert!(matches!(
        result,
        Err(GameError::InvalidInput(InvalidInput::NoSuchPile {
            index: 7,
            ..
        }))
    ));
}

#[test]
fn taking_from_an_empty_pile_is_rejected() {
    let mut engine = dealt_engine();
    let result = engine.make_move(Open, 1, 0, Foundation, 0);
    assert!(matches!(
        result,
        Err(GameError::InvalidInput(InvalidInput::CannotTake { .. }))
    ));
}

#[test]
fn foundation_top_may_move_back_out() {
    let mut engine = dealt_engine();
    engine.make_move(Cascade, 0, 12, Foundation, 0).expect("A♣");
    engine.make_move(Cascade, 0, 11, Foundation, 0).expect("2♣");

    engine.make_move(Foundation, 0, 1, Open, 0).expect("2♣ back out");
    assert_eq!(engine.pile(Foundation, 0).unwrap().len(), 1);
    assert_eq!(engine.pile(Open, 0).unwrap().len(), 1);
}

#[test]
fn an_emptied_cascade_accepts_any_card() {
    let mut engine = dealt_engine();
    // run the whole club pile up to its foundation
    for i in 0..13 {
        engine
            .make_move(Cascade, 0, 12 - i, Foundation, 0)
            .expect("club run");
    }
    assert!(engine.pile(Cascade, 0).unwrap().is_empty());

    // no king requirement: the diamond ace may open the empty pile
    engine
        .make_move(Cascade, 1, 12, Cascade, 0)
        .expect("A♦ onto empty cascade");
    assert_eq!(engine.pile(Cascade, 0).unwrap().len(), 1);
}

#[test]
fn moves_never_create_or_lose_cards() {
    let mut engine = dealt_engine();
    engine.make_move(Cascade, 0, 12, Foundation, 0).expect("A♣");
    engine.make_move(Cascade, 1, 12, Cascade, 0).expect("A♦ on 2♣");
    engine.make_move(Cascade, 3, 12, Open, 2).expect("A♠ aside");

    let mut cards = Vec::new();
    for kind in [Foundation, Open, Cascade] {
        for i in 0..engine.pile_count(kind) {
            cards.extend_from_slice(engine.pile(kind, i).unwrap());
        }
    }
    assert_eq!(cards.len(), 52);
    let set: HashSet<Card> = cards.into_iter().collect();
    assert_eq!(set.len(), 52);
}
