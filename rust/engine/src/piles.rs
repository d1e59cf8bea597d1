use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// The three pile categories of a FreeCell table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PileKind {
    /// Built up by suit from Ace to King; filling all four wins the game.
    Foundation,
    /// Single-card holding cell.
    Open,
    /// Main tableau pile; holds the dealt cards and any builds.
    Cascade,
}

impl PileKind {
    /// One-letter symbol used by the state rendering.
    pub fn symbol(self) -> char {
        match self {
            PileKind::Foundation => 'F',
            PileKind::Open => 'O',
            PileKind::Cascade => 'C',
        }
    }
}

impl fmt::Display for PileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PileKind::Foundation => "foundation",
            PileKind::Open => "open",
            PileKind::Cascade => "cascade",
        })
    }
}

/// Number of foundation piles; one per suit.
pub const FOUNDATION_COUNT: usize = 4;

/// An ordered stack of cards. The top of the pile is the last element.
/// Mutators are crate-private: piles change only through engine commits.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove and return the cards from `index` to the top, in order.
    /// Callers must have validated `index` against the pile length.
    pub(crate) fn take_from(&mut self, index: usize) -> Vec<Card> {
        self.cards.split_off(index)
    }

    pub(crate) fn append(&mut self, run: Vec<Card>) {
        self.cards.extend(run);
    }

    pub(crate) fn clear(&mut self) {
        self.cards.clear();
    }
}

/// Resolved position of a pile inside the [`PileStore`] arena.
/// Obtained from [`PileStore::slot`]; holding one proves the pile exists,
/// so slot-based access cannot fail.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PileSlot(usize);

/// Flat arena of every pile in play, indexed by (kind, pile number).
/// Layout: the 4 foundations, then the open piles, then the cascade piles.
#[derive(Debug, Clone)]
pub struct PileStore {
    piles: Vec<Pile>,
    opens: usize,
    cascades: usize,
}

impl PileStore {
    pub fn new(opens: usize, cascades: usize) -> Self {
        Self {
            piles: vec![Pile::default(); FOUNDATION_COUNT + opens + cascades],
            opens,
            cascades,
        }
    }

    pub fn count(&self, kind: PileKind) -> usize {
        match kind {
            PileKind::Foundation => FOUNDATION_COUNT,
            PileKind::Open => self.opens,
            PileKind::Cascade => self.cascades,
        }
    }

    fn base(&self, kind: PileKind) -> usize {
        match kind {
            PileKind::Foundation => 0,
            PileKind::Open => FOUNDATION_COUNT,
            PileKind::Cascade => FOUNDATION_COUNT + self.opens,
        }
    }

    /// Resolve (kind, pile number) to an arena slot, or `None` when the
    /// index is out of range for that kind.
    pub fn slot(&self, kind: PileKind, index: usize) -> Option<PileSlot> {
        if index < self.count(kind) {
            Some(PileSlot(self.base(kind) + index))
        } else {
            None
        }
    }

    pub fn at(&self, slot: PileSlot) -> &Pile {
        &self.piles[slot.0]
    }

    pub(crate) fn at_mut(&mut self, slot: PileSlot) -> &mut Pile {
        &mut self.piles[slot.0]
    }

    pub fn pile(&self, kind: PileKind, index: usize) -> Option<&Pile> {
        self.slot(kind, index).map(|slot| self.at(slot))
    }

    /// All piles of one kind, in pile-number order.
    pub fn piles_of(&self, kind: PileKind) -> &[Pile] {
        let base = self.base(kind);
        &self.piles[base..base + self.count(kind)]
    }

    /// Count the empty piles of `kind`, skipping the excluded slots.
    pub(crate) fn empty_piles_excluding(&self, kind: PileKind, exclude: [PileSlot; 2]) -> usize {
        let base = self.base(kind);
        (0..self.count(kind))
            .map(|i| PileSlot(base + i))
            .filter(|slot| !exclude.contains(slot) && self.at(*slot).is_empty())
            .count()
    }

    /// Distribute a full deck round-robin over the cascade piles: pile `i`
    /// receives deck positions `i`, `i + C`, `i + 2C`, ...
    pub(crate) fn deal_round_robin(&mut self, cards: Vec<Card>) {
        let base = self.base(PileKind::Cascade);
        for (position, card) in cards.into_iter().enumerate() {
            self.piles[base + position % self.cascades].push(card);
        }
    }

    pub(crate) fn clear_all(&mut self) {
        for pile in &mut self.piles {
            pile.clear();
        }
    }

    pub fn total_cards(&self) -> usize {
        self.piles.iter().map(Pile::len).sum()
    }
}
