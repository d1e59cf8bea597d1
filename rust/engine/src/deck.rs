use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card, DECK_SIZE};
use crate::errors::{GameError, InvalidInput};

/// Deterministic deck generator. Produces a freshly shuffled complete deck
/// on every call; only the RNG stream carries over between calls.
#[derive(Debug)]
pub struct Deck {
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// A complete 52-card deck in a fresh random order.
    pub fn fresh(&mut self) -> Vec<Card> {
        let mut cards = full_deck();
        cards.shuffle(&mut self.rng);
        cards
    }

    pub(crate) fn shuffle_in_place(&mut self, cards: &mut [Card]) {
        cards.shuffle(&mut self.rng);
    }
}

/// Check that `deck` is a complete, duplicate-free 52-card deck.
///
/// 52 distinct values drawn from a 52-value space is exactly the full deck,
/// so size plus uniqueness is the whole check.
pub fn validate_deck(deck: &[Card]) -> Result<(), GameError> {
    if deck.len() != DECK_SIZE {
        return Err(InvalidInput::WrongDeckSize { count: deck.len() }.into());
    }
    let mut seen = HashSet::with_capacity(DECK_SIZE);
    for &card in deck {
        if !seen.insert(card) {
            return Err(InvalidInput::DuplicateCard { card }.into());
        }
    }
    Ok(())
}
