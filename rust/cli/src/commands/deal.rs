//! Deal command handler.
//!
//! Prints the full shuffled draw pile for a seed, front card first, so a
//! seed can be inspected before it is used for a match.

use crate::error::CliError;
use crate::formatters::format_card;
use flip7_engine::cards::{CardKind, DECK_SIZE};
use flip7_engine::deck::Deck;
use std::io::Write;

const CARDS_PER_ROW: usize = 10;

/// Handle the deal command.
///
/// Without a seed a random one is drawn and printed, so the deal can be
/// reproduced.
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let deck = Deck::new_with_seed(seed);

    writeln!(out, "deal: seed={} cards={}", seed, deck.remaining())?;
    let cards: Vec<_> = deck.cards().copied().collect();
    for row in cards.chunks(CARDS_PER_ROW) {
        let line = row.iter().map(format_card).collect::<Vec<_>>().join(" ");
        writeln!(out, "{}", line)?;
    }

    let numbers = cards.iter().filter(|c| c.kind == CardKind::Number).count();
    let actions = cards.iter().filter(|c| c.kind.is_action()).count();
    let modifiers = DECK_SIZE - numbers - actions;
    writeln!(
        out,
        "Numbers: {} Modifiers: {} Actions: {}",
        numbers, modifiers, actions
    )?;
    Ok(())
}
