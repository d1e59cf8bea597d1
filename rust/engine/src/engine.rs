use crate::cards::Card;
use crate::deck::{validate_deck, Deck};
use crate::errors::{GameError, IllegalState, InvalidInput};
use crate::game::{GameConfig, GamePhase};
use crate::piles::{Pile, PileKind, PileStore};
use crate::rules::{multi_move_capacity, MoveStrategy, PileRules};

const DEFAULT_SEED: u64 = 0xF4EE_CE11;

/// Core game engine: owns the piles, validates moves against the per-kind
/// rules, and commits them atomically.
///
/// # Examples
///
/// ```
/// use freecell_engine::engine::Engine;
/// use freecell_engine::game::GameConfig;
/// use freecell_engine::piles::PileKind;
/// use freecell_engine::rules::MoveStrategy;
///
/// let mut engine = Engine::new(GameConfig::default(), MoveStrategy::SingleMove, Some(12345));
///
/// // Deal a fresh deck into the cascade piles
/// let deck = engine.fresh_deck();
/// engine.start_game(&deck, false).expect("a fresh deck always deals");
///
/// assert!(!engine.is_game_over());
/// assert_eq!(engine.pile_count(PileKind::Cascade), 8);
/// ```
#[derive(Debug)]
pub struct Engine {
    /// Pile layout the table was built with
    config: GameConfig,
    /// How moves are committed (single cards or whole builds)
    strategy: MoveStrategy,
    /// Every pile in play
    store: PileStore,
    /// Deck generator backing `fresh_deck` and dealt-in shuffles
    deck: Deck,
    /// Set by the first successful `start_game`
    started: bool,
}

impl Engine {
    pub fn new(config: GameConfig, strategy: MoveStrategy, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or(DEFAULT_SEED);
        Self {
            store: PileStore::new(config.opens(), config.cascades()),
            config,
            strategy,
            deck: Deck::new_with_seed(seed),
            started: false,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn strategy(&self) -> MoveStrategy {
        self.strategy
    }

    /// A freshly shuffled complete 52-card deck. Every call produces a new
    /// permutation; nothing about the running game changes.
    pub fn fresh_deck(&mut self) -> Vec<Card> {
        self.deck.fresh()
    }

    /// Validate `deck` and deal it round-robin into the cascade piles,
    /// discarding any previous game. The caller's deck is copied, never
    /// mutated; with `shuffle` the copy is randomized before dealing.
    pub fn start_game(&mut self, deck: &[Card], shuffle: bool) -> Result<(), GameError> {
        validate_deck(deck)?;
        let mut cards = deck.to_vec();
        if shuffle {
            self.deck.shuffle_in_place(&mut cards);
        }
        self.store.clear_all();
        self.store.deal_round_robin(cards);
        self.started = true;
        Ok(())
    }

    /// Move the cards from `card_index` to the top of the source pile onto
    /// the destination pile.
    ///
    /// Validation runs to completion before any card moves: resolve the
    /// source, ask its rules whether the cards may leave, resolve the
    /// destination, ask its rules whether they may land, then check the
    /// multi-move capacity bound. The commit afterwards cannot fail, so a
    /// rejected move leaves every pile untouched.
    ///
    /// # Errors
    ///
    /// [`GameError::IllegalState`] before the first deal or once the game
    /// is over; [`GameError::InvalidInput`] for out-of-range indices, any
    /// rule rejection, or a build larger than the free piles support.
    pub fn make_move(
        &mut self,
        src_kind: PileKind,
        src_pile: usize,
        card_index: usize,
        dst_kind: PileKind,
        dst_pile: usize,
    ) -> Result<(), GameError> {
        if !self.started {
            return Err(IllegalState::NotStarted.into());
        }
        if self.is_game_over() {
            return Err(IllegalState::GameOver.into());
        }

        let src = self
            .store
            .slot(src_kind, src_pile)
            .ok_or(InvalidInput::NoSuchPile {
                kind: src_kind,
                index: src_pile,
            })?;
        let take = PileRules::for_kind(src_kind, self.strategy);
        if !take.can_take(self.store.at(src).cards(), card_index) {
            return Err(InvalidInput::CannotTake {
                kind: src_kind,
                pile: src_pile,
                card: card_index,
            }
            .into());
        }

        let dst = self
            .store
            .slot(dst_kind, dst_pile)
            .ok_or(InvalidInput::NoSuchPile {
                kind: dst_kind,
                index: dst_pile,
            })?;
        let moving = &self.store.at(src).cards()[card_index..];
        let put = PileRules::for_kind(dst_kind, self.strategy);
        if !put.can_place(moving, self.store.at(dst).cards()) {
            return Err(InvalidInput::CannotPlace {
                kind: dst_kind,
                pile: dst_pile,
            }
            .into());
        }

        let moved = moving.len();
        if moved > 1 && src_kind == PileKind::Cascade && dst_kind == PileKind::Cascade {
            let free_opens = self.store.empty_piles_excluding(PileKind::Open, [src, dst]);
            let free_cascades = self
                .store
                .empty_piles_excluding(PileKind::Cascade, [src, dst]);
            let capacity = multi_move_capacity(free_opens, free_cascades);
            if moved as u64 > capacity {
                return Err(InvalidInput::MoveTooLarge { moved, capacity }.into());
            }
        }

        // every check has passed; the commit below cannot fail
        let run = self.store.at_mut(src).take_from(card_index);
        self.store.at_mut(dst).append(run);
        Ok(())
    }

    /// Whether the game has been won: all four foundations full and every
    /// other pile empty. Recomputed from pile contents on each call, and
    /// unconditionally false before the first deal.
    pub fn is_game_over(&self) -> bool {
        if !self.started {
            return false;
        }
        let foundations_full = self
            .store
            .piles_of(PileKind::Foundation)
            .iter()
            .all(|pile| pile.len() == 13);
        let rest_empty = self
            .store
            .piles_of(PileKind::Open)
            .iter()
            .chain(self.store.piles_of(PileKind::Cascade))
            .all(Pile::is_empty);
        foundations_full && rest_empty
    }

    pub fn phase(&self) -> GamePhase {
        if !self.started {
            GamePhase::NotStarted
        } else if self.is_game_over() {
            GamePhase::Over
        } else {
            GamePhase::InProgress
        }
    }

    /// Cards of one pile, bottom first, or `None` when the index is out of
    /// range for that kind.
    pub fn pile(&self, kind: PileKind, index: usize) -> Option<&[Card]> {
        self.store.pile(kind, index).map(Pile::cards)
    }

    pub fn pile_count(&self, kind: PileKind) -> usize {
        self.store.count(kind)
    }

    /// Render the whole table as text: one line per pile, foundations
    /// first, then opens, then cascades. Each line is the pile symbol and
    /// 1-based number, a colon, and the pile's cards comma-joined. No
    /// trailing newline; the empty string before the first deal.
    pub fn game_state(&self) -> String {
        if !self.started {
            return String::new();
        }
        let mut lines = Vec::new();
        for kind in [PileKind::Foundation, PileKind::Open, PileKind::Cascade] {
            for (number, pile) in self.store.piles_of(kind).iter().enumerate() {
                let cards = pile
                    .cards()
                    .iter()
                    .map(|card| card.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                if cards.is_empty() {
                    lines.push(format!("{}{}:", kind.symbol(), number + 1));
                } else {
                    lines.push(format!("{}{}: {}", kind.symbol(), number + 1, cards));
                }
            }
        }
        lines.join("\n")
    }
}
