//! Match model: the outcome of a single game between two players.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{MatchId, PlayerId};

/// A reported match. Immutable once stored; the match log is append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Store-assigned identifier
    pub id: MatchId,

    /// Player who won
    pub winner: PlayerId,

    /// Player who lost
    pub loser: PlayerId,

    /// When the result was reported
    pub recorded_at: DateTime<Utc>,
}

impl Match {
    /// Returns true if `player` took part in this match.
    pub fn involves(&self, player: PlayerId) -> bool {
        self.winner == player || self.loser == player
    }
}
