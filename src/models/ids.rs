//! Store-assigned integer identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a registered player, assigned by the record store.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(i64);

impl PlayerId {
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the raw integer value.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlayerId({})", self.0)
    }
}

impl From<i64> for PlayerId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

/// Identifier of a reported match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(i64);

impl MatchId {
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_ordering() {
        let mut ids = vec![PlayerId::new(3), PlayerId::new(1), PlayerId::new(2)];
        ids.sort();
        assert_eq!(ids, vec![PlayerId::new(1), PlayerId::new(2), PlayerId::new(3)]);
    }

    #[test]
    fn test_player_id_serializes_as_integer() {
        let json = serde_json::to_string(&PlayerId::new(42)).unwrap();
        assert_eq!(json, "42");

        let parsed: PlayerId = serde_json::from_str("7").unwrap();
        assert_eq!(parsed, PlayerId::from(7));
    }

    #[test]
    fn test_player_id_display_and_debug() {
        let id = PlayerId::new(12);
        assert_eq!(format!("{}", id), "12");
        assert_eq!(format!("{:?}", id), "PlayerId(12)");
        assert_eq!(format!("{:>4}", id), "  12");
    }

    #[test]
    fn test_match_id_display() {
        assert_eq!(MatchId::new(5).to_string(), "5");
        assert_eq!(MatchId::new(5).get(), 5);
    }
}
