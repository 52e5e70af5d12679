#![allow(dead_code)]

use flip7_engine::cards::{ordered_deck, Card, CardKind};

/// Shorthand for picking a specific physical card out of a fresh deck.
#[derive(Debug, Clone, Copy)]
pub enum Pick {
    Num(u8),
    Add(u8),
    Mult,
    Freeze,
    Flip,
    Chance,
}

impl Pick {
    fn matches(self, card: &Card) -> bool {
        match self {
            Pick::Num(v) => card.kind == CardKind::Number && card.value == v,
            Pick::Add(v) => card.kind == CardKind::Addition && card.value == v,
            Pick::Mult => card.kind == CardKind::Multiplier,
            Pick::Freeze => card.kind == CardKind::Freeze,
            Pick::Flip => card.kind == CardKind::FlipThree,
            Pick::Chance => card.kind == CardKind::SecondChance,
        }
    }
}

/// Splits a fresh deck into the picked cards (in pick order) and everything
/// else (in composition order). Panics if a pick runs out of copies.
pub fn split_deck(picks: &[Pick]) -> (Vec<Card>, Vec<Card>) {
    let mut rest = ordered_deck();
    let mut picked = Vec::with_capacity(picks.len());
    for &pick in picks {
        let pos = rest
            .iter()
            .position(|c| pick.matches(c))
            .unwrap_or_else(|| panic!("no copies of {:?} left", pick));
        picked.push(rest.remove(pos));
    }
    (picked, rest)
}

/// Full 94-card draw pile that starts with the picked cards.
pub fn scripted_deck(picks: &[Pick]) -> Vec<Card> {
    let (mut picked, rest) = split_deck(picks);
    picked.extend(rest);
    picked
}
