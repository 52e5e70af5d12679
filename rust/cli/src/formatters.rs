//! Card, hand and event formatters for terminal display.
//!
//! Pure functions; nothing here writes to a stream.
//!
//! ## Example
//!
//! ```rust
//! use flip7_engine::cards::{Card, CardKind};
//! use flip7_cli::formatters::{format_card, format_hand};
//!
//! assert_eq!(format_card(&Card::addition(0, 4)), "[+4]");
//! let hand = [Card::number(1, 7), Card::action(2, CardKind::Freeze)];
//! assert_eq!(format_hand(&hand), "[7] [FREEZE]");
//! ```

use flip7_engine::cards::Card;
use flip7_engine::game::TurnOutcome;
use flip7_engine::turn::{TurnEvent, TurnStatus};

pub fn format_card(card: &Card) -> String {
    format!("[{}]", card.label())
}

/// Cards separated by spaces, or `(empty)`.
pub fn format_hand(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

pub fn format_status(status: TurnStatus) -> &'static str {
    match status {
        TurnStatus::Active => "drawing",
        TurnStatus::Busted => "BUST",
        TurnStatus::Frozen => "frozen",
        TurnStatus::HandLimitReached => "FLIP 7!",
        TurnStatus::ManuallyEnded => "stayed",
    }
}

/// One line per event, as shown to the players.
pub fn format_event(event: &TurnEvent) -> String {
    match event {
        TurnEvent::Reshuffled { card_count } => {
            format!("Deck empty: reshuffled {} discarded cards", card_count)
        }
        TurnEvent::CardDrawn { card, auto: false } => format!("Drew {}", format_card(card)),
        TurnEvent::CardDrawn { card, auto: true } => {
            format!("Flip Three reveals {}", format_card(card))
        }
        TurnEvent::SecondChanceUsed { bust_card, .. } => format!(
            "Second Chance! {} and the Second Chance card are discarded",
            format_card(bust_card)
        ),
        TurnEvent::Busted { card } => format!("BUST on a second {}", format_card(card)),
        TurnEvent::Frozen { .. } => "Frozen: turn over, points banked".to_string(),
        TurnEvent::FlipThree { queued } => format!("Flip Three! {} forced draw(s) queued", queued),
        TurnEvent::HandLimitReached { bonus } => format!("Seven numbers! +{} bonus", bonus),
        TurnEvent::PilesExhausted => "No cards left anywhere; nothing drawn".to_string(),
    }
}

pub fn format_outcome(name: &str, outcome: &TurnOutcome) -> String {
    format!(
        "{} {}: +{} (total {})",
        name,
        format_status(outcome.turn.status),
        outcome.turn.awarded,
        outcome.total_after
    )
}
