use serde::{Deserialize, Serialize};

/// Fewest players a match can start with.
pub const MIN_PLAYERS: usize = 3;

/// Most players a roster can hold.
pub const MAX_PLAYERS: usize = 18;

/// A seat at the table: a display name and the running match total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    total_score: u32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total_score: 0,
        }
    }

    /// `Player N`, with `N` counted from 1.
    pub fn default_name(seat: usize) -> String {
        format!("Player {}", seat + 1)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn add_score(&mut self, points: u32) {
        self.total_score = self.total_score.saturating_add(points);
    }

    pub fn reset_score(&mut self) {
        self.total_score = 0;
    }
}
