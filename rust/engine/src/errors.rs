use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Turn is over; no more draws")]
    TurnNotActive,
    #[error("Hand already holds {limit} number cards")]
    HandFull { limit: usize },
    #[error("Flip Three still has {pending} draw(s) to resolve")]
    AutoFlipInProgress { pending: u32 },
    #[error("Cannot end the turn before drawing a card")]
    EmptyHand,
    #[error("Turn has not ended yet")]
    TurnNotFinished,
    #[error("No match in progress")]
    MatchNotInProgress,
    #[error("Match is over")]
    MatchOver,
    #[error("Roster already has the maximum of {max} players")]
    RosterFull { max: usize },
    #[error("Roster needs at least {min} players")]
    RosterTooSmall { min: usize },
    #[error("Roster size {size} outside {min}..={max}")]
    InvalidRosterSize { size: usize, min: usize, max: usize },
    #[error("No player at index {index} (roster has {len})")]
    InvalidPlayerIndex { index: usize, len: usize },
    #[error("Roster cannot change while a match is in progress")]
    RosterLocked,
    #[error("Piles must hold each of the {expected} deck cards exactly once (got {got})")]
    InvalidPiles { expected: usize, got: usize },
}
