use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{build_fresh_deck, Card};

/// The live draw pile. Front of the queue is the next card drawn.
#[derive(Debug)]
pub struct Deck {
    cards: VecDeque<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    /// Fresh shuffled deck driven by a ChaCha20 stream seeded with `seed`.
    pub fn new_with_seed(seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let cards = build_fresh_deck(&mut rng).into();
        Self { cards, rng }
    }

    /// Draw pile in exactly the given order, front first. Later reshuffles
    /// still use the seeded stream.
    pub fn stacked(cards: Vec<Card>, seed: u64) -> Self {
        Self {
            cards: cards.into(),
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Replaces the draw pile with a shuffled permutation of `cards`.
    pub fn load_and_shuffle(&mut self, cards: Vec<Card>) {
        let mut cards = cards;
        cards.shuffle(&mut self.rng);
        self.cards = cards.into();
    }

    /// Throws away the current pile and deals in a fresh 94-card deck.
    pub fn reset(&mut self) {
        self.cards = build_fresh_deck(&mut self.rng).into();
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

/// Used cards waiting to be reshuffled into the draw pile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscardPile {
    cards: Vec<Card>,
}

impl DiscardPile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn extend<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    /// Empties the pile, handing back its cards in discard order.
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
