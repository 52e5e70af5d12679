use serde::{Deserialize, Serialize};

use crate::cards::{ordered_deck, Card, DECK_SIZE};
use crate::deck::{Deck, DiscardPile};
use crate::errors::GameError;
use crate::player::{Player, MAX_PLAYERS, MIN_PLAYERS};
use crate::turn::{TurnEngine, TurnEvent, TurnStatus, TurnSummary};

/// Total score that ends the match.
pub const DEFAULT_TARGET_SCORE: u32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSettings {
    pub target_score: u32,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            target_score: DEFAULT_TARGET_SCORE,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    /// Roster may be edited; no turn is running.
    Setup,
    InProgress,
    /// A winner has been declared; only `return_to_start` moves on.
    Finished,
}

/// Which transient notification the host should show for a transition.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    Bust,
    Freeze,
    /// Seven number cards collected
    Bonus,
    /// Discard pile reshuffled into an empty draw pile
    DeckEmpty,
    SecondChance,
    FlipThree,
}

impl Notice {
    pub fn from_event(event: &TurnEvent) -> Option<Notice> {
        match event {
            TurnEvent::Busted { .. } => Some(Notice::Bust),
            TurnEvent::Frozen { .. } => Some(Notice::Freeze),
            TurnEvent::HandLimitReached { .. } => Some(Notice::Bonus),
            TurnEvent::Reshuffled { .. } => Some(Notice::DeckEmpty),
            TurnEvent::SecondChanceUsed { .. } => Some(Notice::SecondChance),
            TurnEvent::FlipThree { .. } => Some(Notice::FlipThree),
            TurnEvent::CardDrawn { .. } | TurnEvent::PilesExhausted => None,
        }
    }
}

/// What happened when a turn was closed out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub player_index: usize,
    pub turn: TurnSummary,
    pub total_after: u32,
    pub next_player: usize,
    pub winner: Option<usize>,
}

/// Read-only view of everything the host renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSnapshot {
    pub phase: MatchPhase,
    pub roster: Vec<Player>,
    pub active_player: usize,
    pub hand: Vec<Card>,
    pub round_score: u32,
    pub turn_status: TurnStatus,
    pub pending_auto_flips: u32,
    pub draw_pile_count: usize,
    pub discard_pile: Vec<Card>,
    pub last_notice: Option<Notice>,
    pub winner: Option<usize>,
}

/// Match coordinator: owns the roster, the piles and the active turn, and
/// rotates play until someone reaches the target score.
///
/// # Examples
///
/// ```
/// use flip7_engine::game::{Match, MatchPhase};
///
/// let mut game = Match::new(Some(7));
/// game.start_match().unwrap();
/// assert_eq!(game.phase(), MatchPhase::InProgress);
///
/// game.request_draw().unwrap();
/// if game.turn().status().is_terminal() || game.request_end_turn().is_ok() {
///     let outcome = game.finalize_active_turn().unwrap();
///     assert_eq!(outcome.next_player, 1);
/// }
/// ```
#[derive(Debug)]
pub struct Match {
    settings: MatchSettings,
    seed: u64,
    roster: Vec<Player>,
    active_player: usize,
    deck: Deck,
    discard: DiscardPile,
    turn: TurnEngine,
    phase: MatchPhase,
    winner: Option<usize>,
    last_notice: Option<Notice>,
}

impl Match {
    /// Three default-named players, default settings.
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_settings(seed, MatchSettings::default())
    }

    pub fn with_settings(seed: Option<u64>, settings: MatchSettings) -> Self {
        let seed = seed.unwrap_or(0xF1_1907);
        let roster = (0..MIN_PLAYERS)
            .map(|i| Player::new(Player::default_name(i)))
            .collect();
        Self {
            settings,
            seed,
            roster,
            active_player: 0,
            deck: Deck::new_with_seed(seed),
            discard: DiscardPile::new(),
            turn: TurnEngine::new(),
            phase: MatchPhase::Setup,
            winner: None,
            last_notice: None,
        }
    }

    /// Builds a match from explicit names. Fails if the count is out of bounds.
    pub fn with_players<I, S>(
        names: I,
        seed: Option<u64>,
        settings: MatchSettings,
    ) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roster: Vec<Player> = names.into_iter().map(Player::new).collect();
        check_roster_size(roster.len())?;
        let mut game = Self::with_settings(seed, settings);
        game.roster = roster;
        Ok(game)
    }

    /// Lays out both piles in a known order, for scripted scenarios and
    /// replays. Only allowed while no cards are in hand. Between them the
    /// two piles must hold every card of a fresh deck exactly once,
    /// otherwise nothing changes and [`GameError::InvalidPiles`] is returned.
    pub fn arrange_piles(
        &mut self,
        draw_pile: Vec<Card>,
        discard_pile: Vec<Card>,
    ) -> Result<(), GameError> {
        if !self.turn.hand().is_empty() {
            return Err(GameError::TurnNotFinished);
        }
        check_full_deck(&draw_pile, &discard_pile)?;
        self.deck = Deck::stacked(draw_pile, self.seed);
        self.discard.clear();
        self.discard.extend(discard_pile);
        self.assert_conservation();
        Ok(())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn settings(&self) -> MatchSettings {
        self.settings
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn roster(&self) -> &[Player] {
        &self.roster
    }

    pub fn active_player(&self) -> usize {
        self.active_player
    }

    pub fn turn(&self) -> &TurnEngine {
        &self.turn
    }

    pub fn draw_pile_count(&self) -> usize {
        self.deck.remaining()
    }

    pub fn discard_pile(&self) -> &[Card] {
        self.discard.cards()
    }

    pub fn winner(&self) -> Option<&Player> {
        self.winner.map(|i| &self.roster[i])
    }

    pub fn winner_index(&self) -> Option<usize> {
        self.winner
    }

    pub fn last_notice(&self) -> Option<Notice> {
        self.last_notice
    }

    /// Cards currently in the draw pile, discard pile and hand.
    pub fn cards_in_play(&self) -> usize {
        self.deck.remaining() + self.discard.len() + self.turn.hand().len()
    }

    /// Adds a player. A blank name becomes `Player N`.
    pub fn add_player(&mut self, name: &str) -> Result<usize, GameError> {
        self.check_roster_unlocked()?;
        if self.roster.len() >= MAX_PLAYERS {
            return Err(GameError::RosterFull { max: MAX_PLAYERS });
        }
        let index = self.roster.len();
        let name = match name.trim() {
            "" => Player::default_name(index),
            trimmed => trimmed.to_string(),
        };
        self.roster.push(Player::new(name));
        Ok(index)
    }

    pub fn remove_player(&mut self, index: usize) -> Result<Player, GameError> {
        self.check_roster_unlocked()?;
        self.check_index(index)?;
        if self.roster.len() <= MIN_PLAYERS {
            return Err(GameError::RosterTooSmall { min: MIN_PLAYERS });
        }
        Ok(self.roster.remove(index))
    }

    /// Renames a player. Allowed at any time; a blank name becomes `Player N`.
    pub fn update_player_name(&mut self, index: usize, name: &str) -> Result<(), GameError> {
        self.check_index(index)?;
        let name = match name.trim() {
            "" => Player::default_name(index),
            trimmed => trimmed.to_string(),
        };
        self.roster[index].set_name(name);
        Ok(())
    }

    /// Zeroes scores, deals a fresh shuffled deck, empties the discard
    /// pile and gives the first turn to seat 0.
    pub fn start_match(&mut self) -> Result<(), GameError> {
        check_roster_size(self.roster.len())?;
        self.reset_table();
        self.phase = MatchPhase::InProgress;
        tracing::info!(
            players = self.roster.len(),
            target = self.settings.target_score,
            seed = self.seed,
            "match started"
        );
        self.assert_conservation();
        Ok(())
    }

    /// Player draw. Any Flip Three draws it triggers are resolved before
    /// returning; events come back in the order they happened.
    pub fn request_draw(&mut self) -> Result<Vec<TurnEvent>, GameError> {
        self.check_in_progress()?;
        let mut events = self.turn.request_draw(&mut self.deck, &mut self.discard)?;
        events.extend(self.turn.run_auto_flips(&mut self.deck, &mut self.discard));
        self.note(&events);
        self.assert_conservation();
        Ok(events)
    }

    /// Player draw that leaves any Flip Three draws pending, for hosts that
    /// reveal them one by one through [`Match::advance_auto_flip`]. Until
    /// `turn().pending_auto_flips()` is back to zero, further draws and
    /// end-turn requests are refused.
    pub fn request_draw_paced(&mut self) -> Result<Vec<TurnEvent>, GameError> {
        self.check_in_progress()?;
        let events = self.turn.request_draw(&mut self.deck, &mut self.discard)?;
        self.note(&events);
        self.assert_conservation();
        Ok(events)
    }

    /// One scheduled Flip Three draw. Returns no events when nothing is
    /// pending.
    pub fn advance_auto_flip(&mut self) -> Result<Vec<TurnEvent>, GameError> {
        self.check_in_progress()?;
        let events = self
            .turn
            .advance_auto_flip(&mut self.deck, &mut self.discard)?;
        self.note(&events);
        self.assert_conservation();
        Ok(events)
    }

    pub fn request_end_turn(&mut self) -> Result<(), GameError> {
        self.check_in_progress()?;
        self.turn.end_turn()
    }

    /// Credits the finished turn, passes play to the next seat and checks
    /// for a winner.
    pub fn finalize_active_turn(&mut self) -> Result<TurnOutcome, GameError> {
        self.check_in_progress()?;
        let summary = self.turn.finalize(&mut self.discard)?;
        let player_index = self.active_player;
        let player = &mut self.roster[player_index];
        player.add_score(summary.awarded);
        let total_after = player.total_score();
        tracing::info!(
            player = player_index,
            status = ?summary.status,
            awarded = summary.awarded,
            total = total_after,
            "turn finalized"
        );

        self.active_player = (self.active_player + 1) % self.roster.len();
        self.last_notice = None;
        self.winner = self.detect_winner();
        if let Some(w) = self.winner {
            self.phase = MatchPhase::Finished;
            tracing::info!(
                winner = w,
                score = self.roster[w].total_score(),
                "match over"
            );
        }
        self.assert_conservation();
        Ok(TurnOutcome {
            player_index,
            turn: summary,
            total_after,
            next_player: self.active_player,
            winner: self.winner,
        })
    }

    /// Back to the setup screen: same roster, scores zeroed, fresh deck.
    pub fn return_to_start(&mut self) {
        self.reset_table();
        self.phase = MatchPhase::Setup;
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            phase: self.phase,
            roster: self.roster.clone(),
            active_player: self.active_player,
            hand: self.turn.hand().to_vec(),
            round_score: self.turn.round_score(),
            turn_status: self.turn.status(),
            pending_auto_flips: self.turn.pending_auto_flips(),
            draw_pile_count: self.deck.remaining(),
            discard_pile: self.discard.cards().to_vec(),
            last_notice: self.last_notice,
            winner: self.winner,
        }
    }

    /// Highest total among players at or above the target. Equal top
    /// scores go to the earliest seat.
    fn detect_winner(&self) -> Option<usize> {
        let target = self.settings.target_score;
        if !self.roster.iter().any(|p| p.total_score() >= target) {
            return None;
        }
        let mut best: Option<usize> = None;
        for (i, p) in self.roster.iter().enumerate() {
            match best {
                Some(b) if self.roster[b].total_score() >= p.total_score() => {}
                _ => best = Some(i),
            }
        }
        best
    }

    fn reset_table(&mut self) {
        for p in &mut self.roster {
            p.reset_score();
        }
        self.deck.reset();
        self.discard.clear();
        self.turn.reset();
        self.active_player = 0;
        self.winner = None;
        self.last_notice = None;
    }

    fn note(&mut self, events: &[TurnEvent]) {
        if let Some(notice) = events.iter().rev().find_map(Notice::from_event) {
            self.last_notice = Some(notice);
        }
    }

    fn check_in_progress(&self) -> Result<(), GameError> {
        match self.phase {
            MatchPhase::InProgress => Ok(()),
            MatchPhase::Finished => Err(GameError::MatchOver),
            MatchPhase::Setup => Err(GameError::MatchNotInProgress),
        }
    }

    fn check_roster_unlocked(&self) -> Result<(), GameError> {
        if self.phase == MatchPhase::InProgress {
            return Err(GameError::RosterLocked);
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), GameError> {
        if index >= self.roster.len() {
            return Err(GameError::InvalidPlayerIndex {
                index,
                len: self.roster.len(),
            });
        }
        Ok(())
    }

    fn assert_conservation(&self) {
        debug_assert_eq!(
            self.cards_in_play(),
            DECK_SIZE,
            "cards created or lost: draw={} discard={} hand={}",
            self.deck.remaining(),
            self.discard.len(),
            self.turn.hand().len()
        );
    }
}

fn check_roster_size(size: usize) -> Result<(), GameError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&size) {
        return Err(GameError::InvalidRosterSize {
            size,
            min: MIN_PLAYERS,
            max: MAX_PLAYERS,
        });
    }
    Ok(())
}

fn check_full_deck(draw_pile: &[Card], discard_pile: &[Card]) -> Result<(), GameError> {
    let mut cards: Vec<Card> = draw_pile.iter().chain(discard_pile).copied().collect();
    let got = cards.len();
    cards.sort_by_key(|c| c.id);
    if cards != ordered_deck() {
        return Err(GameError::InvalidPiles {
            expected: DECK_SIZE,
            got,
        });
    }
    Ok(())
}
