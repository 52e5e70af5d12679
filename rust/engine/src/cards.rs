use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of cards in a fresh deck.
pub const DECK_SIZE: usize = 94;

/// Highest face value on a Number card.
pub const MAX_NUMBER_VALUE: u8 = 12;

/// Face values of the Addition cards, one card each.
pub const ADDITION_VALUES: [u8; 5] = [2, 4, 6, 8, 10];

/// Copies of each action card (Freeze, FlipThree, SecondChance).
pub const ACTION_CARD_COPIES: usize = 3;

/// Identifies one physical card for the lifetime of a deck.
pub type CardId = u16;

/// The six kinds of card in the deck.
/// Only [`CardKind::Number`] cards can cause a bust.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum CardKind {
    /// Plain number card, 0 through 12
    Number,
    /// Flat bonus added to the round score (+2 .. +10)
    Addition,
    /// Doubles the number and addition total
    Multiplier,
    /// Ends the turn immediately, keeping the score
    Freeze,
    /// Forces three more draws
    FlipThree,
    /// Cancels one bust
    SecondChance,
}

impl CardKind {
    pub fn is_action(self) -> bool {
        matches!(
            self,
            CardKind::Freeze | CardKind::FlipThree | CardKind::SecondChance
        )
    }
}

/// A single physical card.
///
/// `id` is unique within a deck and never reused, so it is the only way to
/// tell apart two cards with the same kind and value.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub kind: CardKind,
    /// Face value for Number and Addition cards, factor for the Multiplier,
    /// zero for action cards.
    pub value: u8,
}

impl Card {
    pub fn number(id: CardId, value: u8) -> Self {
        Self {
            id,
            kind: CardKind::Number,
            value,
        }
    }

    pub fn addition(id: CardId, value: u8) -> Self {
        Self {
            id,
            kind: CardKind::Addition,
            value,
        }
    }

    pub fn multiplier(id: CardId) -> Self {
        Self {
            id,
            kind: CardKind::Multiplier,
            value: 2,
        }
    }

    pub fn action(id: CardId, kind: CardKind) -> Self {
        debug_assert!(kind.is_action(), "{:?} is not an action card", kind);
        Self { id, kind, value: 0 }
    }

    pub fn is_number(&self) -> bool {
        self.kind == CardKind::Number
    }

    /// Short display label: `7`, `+4`, `x2`, `FREEZE`, `FLIP 3`, `2ND CHANCE`.
    pub fn label(&self) -> String {
        match self.kind {
            CardKind::Number => self.value.to_string(),
            CardKind::Addition => format!("+{}", self.value),
            CardKind::Multiplier => format!("x{}", self.value),
            CardKind::Freeze => "FREEZE".to_string(),
            CardKind::FlipThree => "FLIP 3".to_string(),
            CardKind::SecondChance => "2ND CHANCE".to_string(),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Builds the 94-card set in composition order with ascending ids starting at 0.
///
/// | Kind | Count |
/// |---|---|
/// | Number | 79 (one 0, then `v` copies of each `v` in 1..=12) |
/// | Addition | 5 (+2, +4, +6, +8, +10) |
/// | Multiplier | 1 (x2) |
/// | Freeze, FlipThree, SecondChance | 3 each |
pub fn ordered_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    let mut next_id: CardId = 0;
    let mut take_id = || {
        let id = next_id;
        next_id += 1;
        id
    };

    cards.push(Card::number(take_id(), 0));
    for v in 1..=MAX_NUMBER_VALUE {
        for _ in 0..v {
            cards.push(Card::number(take_id(), v));
        }
    }
    for v in ADDITION_VALUES {
        cards.push(Card::addition(take_id(), v));
    }
    cards.push(Card::multiplier(take_id()));
    for kind in [CardKind::Freeze, CardKind::FlipThree, CardKind::SecondChance] {
        for _ in 0..ACTION_CARD_COPIES {
            cards.push(Card::action(take_id(), kind));
        }
    }
    cards
}

/// Builds a fresh deck and returns it in uniformly random order.
///
/// # Examples
///
/// ```
/// use flip7_engine::cards::{build_fresh_deck, DECK_SIZE};
/// use rand::SeedableRng;
///
/// let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(7);
/// let deck = build_fresh_deck(&mut rng);
/// assert_eq!(deck.len(), DECK_SIZE);
/// ```
pub fn build_fresh_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut cards = ordered_deck();
    cards.shuffle(rng);
    cards
}
