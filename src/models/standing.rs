//! Standing model: one row of the ranked tournament table.

use serde::{Deserialize, Serialize};

use super::PlayerId;

/// A player's current record. Derived on every read, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player_id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub matches_played: u32,
}

impl Standing {
    /// Matches lost. Every match has a winner, so this is played minus won.
    pub fn losses(&self) -> u32 {
        self.matches_played.saturating_sub(self.wins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_losses() {
        let standing = Standing {
            player_id: PlayerId::new(1),
            name: "Alice".to_string(),
            wins: 2,
            matches_played: 5,
        };
        assert_eq!(standing.losses(), 3);
    }
}
