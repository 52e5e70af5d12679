use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardKind};
use crate::deck::{Deck, DiscardPile};
use crate::errors::GameError;
use crate::rules::{self, HAND_LIMIT, SEVEN_CARD_BONUS};

/// Automatic draws scheduled by one Flip Three card.
pub const FLIP_THREE_DRAWS: u32 = 3;

/// Where the active player's turn stands.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnStatus {
    /// Player may keep drawing
    #[default]
    Active,
    /// Drew a duplicate number with no Second Chance; scores zero
    Busted,
    /// Drew a Freeze card
    Frozen,
    /// Holds seven number cards
    HandLimitReached,
    /// Player chose to stop
    ManuallyEnded,
}

impl TurnStatus {
    pub fn is_terminal(self) -> bool {
        self != TurnStatus::Active
    }
}

/// One observable step of a draw, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TurnEvent {
    /// Draw pile ran out and the discard pile was shuffled in.
    Reshuffled { card_count: usize },
    /// A card came off the draw pile. `auto` marks Flip Three draws.
    CardDrawn { card: Card, auto: bool },
    /// A bust was cancelled; both cards went to the discard pile.
    SecondChanceUsed { bust_card: Card, consumed: Card },
    Busted { card: Card },
    Frozen { card: Card },
    /// Flip Three drawn; `queued` is the total of automatic draws now pending.
    FlipThree { queued: u32 },
    HandLimitReached { bonus: u32 },
    /// Draw and discard piles are both empty; nothing was drawn.
    PilesExhausted,
}

/// Result of closing out a turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnSummary {
    pub status: TurnStatus,
    /// Every card that was in the hand at the end, bust card included.
    pub cards: Vec<Card>,
    pub round_score: u32,
    /// Points credited to the player: zero on a bust, else `round_score`.
    pub awarded: u32,
}

/// State machine for the active player's turn.
///
/// Pending Flip Three draws are an explicit counter rather than recursion:
/// each Flip Three adds [`FLIP_THREE_DRAWS`] to it and a bust, freeze, or
/// full hand drops whatever is left. Player draws and end-turn requests are
/// refused until the counter is back to zero.
#[derive(Debug, Clone, Default)]
pub struct TurnEngine {
    hand: Vec<Card>,
    round_score: u32,
    status: TurnStatus,
    pending_flip_three: u32,
}

impl TurnEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn round_score(&self) -> u32 {
        self.round_score
    }

    pub fn status(&self) -> TurnStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == TurnStatus::Active
    }

    pub fn is_busted(&self) -> bool {
        self.status == TurnStatus::Busted
    }

    pub fn pending_auto_flips(&self) -> u32 {
        self.pending_flip_three
    }

    pub fn auto_flip_in_progress(&self) -> bool {
        self.pending_flip_three > 0
    }

    /// Checks whether the player may ask for a card right now.
    pub fn check_can_draw(&self) -> Result<(), GameError> {
        if !self.is_active() {
            return Err(GameError::TurnNotActive);
        }
        if self.auto_flip_in_progress() {
            return Err(GameError::AutoFlipInProgress {
                pending: self.pending_flip_three,
            });
        }
        if rules::number_card_count(&self.hand) >= HAND_LIMIT {
            return Err(GameError::HandFull { limit: HAND_LIMIT });
        }
        Ok(())
    }

    /// Player-initiated draw. Any Flip Three draws it schedules are left
    /// pending for [`TurnEngine::advance_auto_flip`].
    pub fn request_draw(
        &mut self,
        deck: &mut Deck,
        discard: &mut DiscardPile,
    ) -> Result<Vec<TurnEvent>, GameError> {
        self.check_can_draw()?;
        let mut events = Vec::new();
        self.draw_one(deck, discard, false, &mut events);
        Ok(events)
    }

    /// Performs the next scheduled Flip Three draw, if any.
    pub fn advance_auto_flip(
        &mut self,
        deck: &mut Deck,
        discard: &mut DiscardPile,
    ) -> Result<Vec<TurnEvent>, GameError> {
        if !self.is_active() {
            return Err(GameError::TurnNotActive);
        }
        let mut events = Vec::new();
        if self.pending_flip_three > 0 {
            self.pending_flip_three -= 1;
            self.draw_one(deck, discard, true, &mut events);
        }
        Ok(events)
    }

    /// Drains every pending Flip Three draw.
    pub fn run_auto_flips(&mut self, deck: &mut Deck, discard: &mut DiscardPile) -> Vec<TurnEvent> {
        let mut events = Vec::new();
        while self.is_active() && self.pending_flip_three > 0 {
            self.pending_flip_three -= 1;
            self.draw_one(deck, discard, true, &mut events);
        }
        events
    }

    /// Player stops drawing and keeps the current round score.
    pub fn end_turn(&mut self) -> Result<(), GameError> {
        if !self.is_active() {
            return Err(GameError::TurnNotActive);
        }
        if self.auto_flip_in_progress() {
            return Err(GameError::AutoFlipInProgress {
                pending: self.pending_flip_three,
            });
        }
        if self.hand.is_empty() {
            return Err(GameError::EmptyHand);
        }
        self.status = TurnStatus::ManuallyEnded;
        Ok(())
    }

    /// Closes a terminal turn: moves the hand to the discard pile and resets
    /// for the next player.
    pub fn finalize(&mut self, discard: &mut DiscardPile) -> Result<TurnSummary, GameError> {
        if !self.status.is_terminal() {
            return Err(GameError::TurnNotFinished);
        }
        let awarded = match self.status {
            TurnStatus::Busted => 0,
            _ => self.round_score,
        };
        let summary = TurnSummary {
            status: self.status,
            cards: self.hand.clone(),
            round_score: self.round_score,
            awarded,
        };
        discard.extend(self.hand.drain(..));
        self.reset();
        Ok(summary)
    }

    /// Drops all turn state without touching any pile.
    pub fn reset(&mut self) {
        self.hand.clear();
        self.round_score = 0;
        self.status = TurnStatus::Active;
        self.pending_flip_three = 0;
    }

    fn draw_one(
        &mut self,
        deck: &mut Deck,
        discard: &mut DiscardPile,
        auto: bool,
        events: &mut Vec<TurnEvent>,
    ) {
        if deck.is_empty() && !discard.is_empty() {
            let cards = discard.take_all();
            let card_count = cards.len();
            deck.load_and_shuffle(cards);
            tracing::debug!(card_count, "draw pile empty, reshuffled discards");
            events.push(TurnEvent::Reshuffled { card_count });
        }
        let Some(card) = deck.draw() else {
            tracing::debug!("draw and discard piles both empty");
            events.push(TurnEvent::PilesExhausted);
            return;
        };
        tracing::debug!(card = %card, id = card.id, auto, "drew card");
        events.push(TurnEvent::CardDrawn { card, auto });

        if rules::is_bust(&self.hand, &card) {
            let mitigated = rules::has_second_chance(&self.hand);
            self.hand.push(card);
            if mitigated {
                let resolution = rules::resolve_second_chance(&self.hand, card.id);
                let consumed = resolution
                    .removed_cards
                    .iter()
                    .copied()
                    .find(|c| c.kind == CardKind::SecondChance)
                    .unwrap_or(card);
                self.hand = resolution.remaining_hand;
                discard.extend(resolution.removed_cards);
                tracing::debug!(card = %card, "second chance cancelled bust");
                events.push(TurnEvent::SecondChanceUsed {
                    bust_card: card,
                    consumed,
                });
            } else {
                self.status = TurnStatus::Busted;
                self.round_score = 0;
                self.pending_flip_three = 0;
                tracing::debug!(card = %card, "busted");
                events.push(TurnEvent::Busted { card });
            }
            return;
        }

        self.hand.push(card);
        self.round_score = rules::compute_round_score(&self.hand);

        match card.kind {
            CardKind::Freeze => {
                self.status = TurnStatus::Frozen;
                self.pending_flip_three = 0;
                events.push(TurnEvent::Frozen { card });
            }
            CardKind::FlipThree => {
                self.pending_flip_three += FLIP_THREE_DRAWS;
                tracing::debug!(pending = self.pending_flip_three, "flip three scheduled");
                events.push(TurnEvent::FlipThree {
                    queued: self.pending_flip_three,
                });
            }
            _ if rules::number_card_count(&self.hand) == HAND_LIMIT => {
                self.status = TurnStatus::HandLimitReached;
                self.pending_flip_three = 0;
                events.push(TurnEvent::HandLimitReached {
                    bonus: SEVEN_CARD_BONUS,
                });
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;

    fn n(id: CardId, v: u8) -> Card {
        Card::number(id, v)
    }

    fn engine_with(cards: Vec<Card>) -> (TurnEngine, Deck, DiscardPile) {
        (TurnEngine::new(), Deck::stacked(cards, 1), DiscardPile::new())
    }

    #[test]
    fn duplicate_number_busts_and_zeroes_score() {
        let (mut turn, mut deck, mut discard) =
            engine_with(vec![Card::addition(0, 8), n(1, 5), n(2, 5)]);
        for _ in 0..3 {
            turn.request_draw(&mut deck, &mut discard).unwrap();
        }
        assert_eq!(turn.status(), TurnStatus::Busted);
        assert_eq!(turn.round_score(), 0);
        assert_eq!(turn.hand().len(), 3, "bust card stays in hand");
        assert_eq!(
            turn.request_draw(&mut deck, &mut discard),
            Err(GameError::TurnNotActive)
        );
    }

    #[test]
    fn freeze_ends_turn_and_keeps_score() {
        let (mut turn, mut deck, mut discard) =
            engine_with(vec![n(0, 6), Card::action(1, CardKind::Freeze)]);
        turn.request_draw(&mut deck, &mut discard).unwrap();
        let events = turn.request_draw(&mut deck, &mut discard).unwrap();
        assert!(matches!(events.last(), Some(TurnEvent::Frozen { .. })));
        assert_eq!(turn.status(), TurnStatus::Frozen);
        assert_eq!(turn.round_score(), 6);
    }

    #[test]
    fn flip_three_schedules_three_draws() {
        let (mut turn, mut deck, mut discard) = engine_with(vec![
            Card::action(0, CardKind::FlipThree),
            n(1, 1),
            n(2, 2),
            n(3, 3),
            n(4, 4),
        ]);
        turn.request_draw(&mut deck, &mut discard).unwrap();
        assert_eq!(turn.pending_auto_flips(), 3);
        assert_eq!(
            turn.request_draw(&mut deck, &mut discard),
            Err(GameError::AutoFlipInProgress { pending: 3 })
        );
        assert_eq!(
            turn.end_turn(),
            Err(GameError::AutoFlipInProgress { pending: 3 })
        );

        let first = turn.advance_auto_flip(&mut deck, &mut discard).unwrap();
        assert_eq!(first, vec![TurnEvent::CardDrawn { card: n(1, 1), auto: true }]);
        assert_eq!(turn.pending_auto_flips(), 2);

        let rest = turn.run_auto_flips(&mut deck, &mut discard);
        assert_eq!(rest.len(), 2);
        assert_eq!(turn.pending_auto_flips(), 0);
        assert_eq!(turn.round_score(), 6);
        assert_eq!(deck.remaining(), 1);
        assert!(turn.is_active());
    }

    #[test]
    fn end_turn_requires_a_card() {
        let mut turn = TurnEngine::new();
        assert_eq!(turn.end_turn(), Err(GameError::EmptyHand));
    }

    #[test]
    fn finalize_requires_terminal_state() {
        let (mut turn, mut deck, mut discard) = engine_with(vec![n(0, 4)]);
        turn.request_draw(&mut deck, &mut discard).unwrap();
        assert_eq!(turn.finalize(&mut discard), Err(GameError::TurnNotFinished));

        turn.end_turn().unwrap();
        let summary = turn.finalize(&mut discard).unwrap();
        assert_eq!(summary.status, TurnStatus::ManuallyEnded);
        assert_eq!(summary.awarded, 4);
        assert_eq!(discard.len(), 1);
        assert!(turn.hand().is_empty());
        assert!(turn.is_active());
    }
}
