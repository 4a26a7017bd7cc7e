//! Pairing model: two players drawn to meet in the next round.

use serde::{Deserialize, Serialize};

use super::{PlayerId, Standing};

/// A single next-round pairing. Derived from standings, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    /// Higher-ranked player id
    pub player_a_id: PlayerId,

    /// Higher-ranked player name
    pub player_a_name: String,

    /// Lower-ranked player id
    pub player_b_id: PlayerId,

    /// Lower-ranked player name
    pub player_b_name: String,
}

impl Pairing {
    /// Pair two standings rows; `a` is expected to rank above `b`.
    pub fn new(a: &Standing, b: &Standing) -> Self {
        Self {
            player_a_id: a.player_id,
            player_a_name: a.name.clone(),
            player_b_id: b.player_id,
            player_b_name: b.name.clone(),
        }
    }

    /// Both player ids, in rank order.
    pub fn ids(&self) -> (PlayerId, PlayerId) {
        (self.player_a_id, self.player_b_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standing(id: i64, name: &str) -> Standing {
        Standing {
            player_id: PlayerId::new(id),
            name: name.to_string(),
            wins: 0,
            matches_played: 0,
        }
    }

    #[test]
    fn test_pairing_creation() {
        let pairing = Pairing::new(&standing(1, "Alice"), &standing(2, "Bob"));

        assert_eq!(pairing.player_a_name, "Alice");
        assert_eq!(pairing.player_b_name, "Bob");
        assert_eq!(pairing.ids(), (PlayerId::new(1), PlayerId::new(2)));
    }

    #[test]
    fn test_pairing_serialization() {
        let pairing = Pairing::new(&standing(1, "Alice"), &standing(2, "Bob"));

        let json = serde_json::to_string(&pairing).unwrap();
        let deserialized: Pairing = serde_json::from_str(&json).unwrap();
        assert_eq!(pairing, deserialized);
        assert!(json.contains("\"player_b_id\":2"));
    }
}
