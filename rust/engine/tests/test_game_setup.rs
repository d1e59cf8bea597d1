use freecell_engine::engine::Engine;
use freecell_engine::errors::{GameError, IllegalState, InvalidInput};
use freecell_engine::game::{GameConfig, GamePhase};
use freecell_engine::piles::PileKind;
use freecell_engine::rules::MoveStrategy;

#[test]
fn default_config_is_the_classic_table() {
    let config = GameConfig::default();
    assert_eq!(config.cascades(), 8);
    assert_eq!(config.opens(), 4);
}

#[test]
fn engine_exposes_configured_pile_counts() {
    let config = GameConfig::new(6, 2).expect("valid layout");
    let engine = Engine::new(config, MoveStrategy::SingleMove, Some(1));
    assert_eq!(engine.pile_count(PileKind::Foundation), 4);
    assert_eq!(engine.pile_count(PileKind::Open), 2);
    assert_eq!(engine.pile_count(PileKind::Cascade), 6);
}

#[test]
fn too_few_cascades_is_rejected() {
    let result = GameConfig::new(3, 1);
    assert!(matches!(
        result,
        Err(GameError::InvalidInput(InvalidInput::TooFewCascades {
            count: 3
        }))
    ));
}

#[test]
fn too_few_opens_is_rejected() {
    let result = GameConfig::new(4, 0);
    assert!(matches!(
        result,
        Err(GameError::InvalidInput(InvalidInput::TooFewOpens { count: 0 }))
    ));
}

#[test]
fn fresh_engine_has_not_started() {
    let engine = Engine::new(GameConfig::default(), MoveStrategy::SingleMove, None);
    assert_eq!(engine.phase(), GamePhase::NotStarted);
    assert!(!engine.is_game_over());
    assert_eq!(engine.game_state(), "");
}

#[test]
fn move_before_start_is_illegal_state() {
    let mut engine = Engine::new(GameConfig::default(), MoveStrategy::SingleMove, Some(3));
    let result = engine.make_move(PileKind::Cascade, 0, 6, PileKind::Open, 0);
    assert!(matches!(
        result,
        Err(GameError::IllegalState(IllegalState::NotStarted))
    ));
}
