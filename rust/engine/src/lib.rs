//! # freecell-engine: FreeCell Game Engine Core
//!
//! A rule-driven FreeCell solitaire engine: deck generation and validation,
//! per-pile-category legality rules, single- and multi-card move validation,
//! and game-over detection, with reproducible RNG for deterministic deals.
//! The engine is a synchronous state machine; input parsing, rendering loops,
//! and any other I/O belong to the external driver.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Deterministic deck shuffling (ChaCha20 RNG) and deck validation
//! - [`piles`] - Pile kinds and the flat pile arena indexed by (kind, number)
//! - [`rules`] - Per-kind legality predicates and the multi-move capacity rule
//! - [`game`] - Validated table layout and the derived game phase
//! - [`engine`] - Main orchestration: deal, move, game-over, state rendering
//! - [`logger`] - Game record serialization (JSONL) for the external driver
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use freecell_engine::engine::Engine;
//! use freecell_engine::game::GameConfig;
//! use freecell_engine::rules::MoveStrategy;
//!
//! // Classic table: 8 cascades, 4 open piles, single-card moves
//! let mut engine = Engine::new(GameConfig::default(), MoveStrategy::SingleMove, Some(42));
//!
//! let deck = engine.fresh_deck();
//! engine.start_game(&deck, false).expect("a fresh deck always deals");
//!
//! assert!(!engine.is_game_over());
//! println!("{}", engine.game_state());
//! ```
//!
//! ## Deterministic Deals
//!
//! All shuffles are reproducible using seeded RNG:
//!
//! ```rust
//! use freecell_engine::engine::Engine;
//! use freecell_engine::game::GameConfig;
//! use freecell_engine::rules::MoveStrategy;
//!
//! let mut e1 = Engine::new(GameConfig::default(), MoveStrategy::SingleMove, Some(7));
//! let mut e2 = Engine::new(GameConfig::default(), MoveStrategy::SingleMove, Some(7));
//! assert_eq!(e1.fresh_deck(), e2.fresh_deck());
//! ```
//!
//! ## Move Validation
//!
//! Every move is fully validated before any pile changes:
//!
//! ```rust
//! use freecell_engine::engine::Engine;
//! use freecell_engine::errors::GameError;
//! use freecell_engine::game::GameConfig;
//! use freecell_engine::piles::PileKind;
//! use freecell_engine::rules::MoveStrategy;
//!
//! let mut engine = Engine::new(GameConfig::default(), MoveStrategy::SingleMove, Some(7));
//! let deck = engine.fresh_deck();
//! engine.start_game(&deck, false).expect("valid deck");
//!
//! // Under the single-move strategy only the top card of a pile may move
//! let result = engine.make_move(PileKind::Cascade, 0, 0, PileKind::Open, 0);
//! assert!(matches!(result, Err(GameError::InvalidInput(_))));
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod logger;
pub mod piles;
pub mod rules;
