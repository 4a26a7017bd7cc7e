//! Registered player model.

use serde::{Deserialize, Serialize};

use super::PlayerId;

/// A player registered in the tournament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Store-assigned identifier
    pub id: PlayerId,

    /// Display name (need not be unique)
    pub name: String,

    /// Matches won, derived from the match log
    pub wins: u32,
}

impl Player {
    /// A freshly registered player with no wins.
    pub fn new(id: PlayerId, name: String) -> Self {
        Self { id, name, wins: 0 }
    }

    /// Builder method to set the win count.
    pub fn with_wins(mut self, wins: u32) -> Self {
        self.wins = wins;
        self
    }
}
