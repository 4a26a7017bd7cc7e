//! In-process record store.
//!
//! A transaction works on a snapshot of the state and swaps it in on
//! commit, so an abandoned transaction leaves nothing behind.

use std::collections::BTreeMap;

use chrono::Utc;

use super::{PlayerWins, RecordStore, StoreError, StoreTx};
use crate::models::{Match, MatchId, Player, PlayerId};

#[derive(Debug, Clone, Default)]
struct State {
    players: BTreeMap<PlayerId, String>,
    matches: Vec<Match>,
    last_player_id: i64,
    last_match_id: i64,
}

impl State {
    fn wins_of(&self, id: PlayerId) -> u32 {
        self.matches.iter().filter(|m| m.winner == id).count() as u32
    }
}

/// Record store that keeps everything in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: State,
    offline: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate an outage: every new transaction fails with [`StoreError::Offline`].
    pub fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
    }
}

impl RecordStore for MemoryStore {
    type Tx<'a> = MemoryTx<'a>;

    fn transaction(&mut self) -> Result<MemoryTx<'_>, StoreError> {
        if self.offline {
            return Err(StoreError::Offline);
        }
        let working = self.state.clone();
        Ok(MemoryTx {
            live: &mut self.state,
            working,
        })
    }
}

/// Snapshot transaction over a [`MemoryStore`].
pub struct MemoryTx<'a> {
    live: &'a mut State,
    working: State,
}

impl StoreTx for MemoryTx<'_> {
    fn create_player(&mut self, name: &str) -> Result<PlayerId, StoreError> {
        self.working.last_player_id += 1;
        let id = PlayerId::new(self.working.last_player_id);
        self.working.players.insert(id, name.to_string());
        Ok(id)
    }

    fn find_player(&mut self, id: PlayerId) -> Result<Option<Player>, StoreError> {
        Ok(self
            .working
            .players
            .get(&id)
            .map(|name| Player::new(id, name.clone()).with_wins(self.working.wins_of(id))))
    }

    fn delete_all_players(&mut self) -> Result<usize, StoreError> {
        let deleted = self.working.players.len();
        self.working.players.clear();
        self.working.matches.clear();
        Ok(deleted)
    }

    fn delete_all_matches(&mut self) -> Result<usize, StoreError> {
        let deleted = self.working.matches.len();
        self.working.matches.clear();
        Ok(deleted)
    }

    fn count_players(&mut self) -> Result<usize, StoreError> {
        Ok(self.working.players.len())
    }

    fn insert_match(&mut self, winner: PlayerId, loser: PlayerId) -> Result<MatchId, StoreError> {
        self.working.last_match_id += 1;
        let id = MatchId::new(self.working.last_match_id);
        self.working.matches.push(Match {
            id,
            winner,
            loser,
            recorded_at: Utc::now(),
        });
        Ok(id)
    }

    fn fetch_player_win_counts(&mut self) -> Result<Vec<PlayerWins>, StoreError> {
        Ok(self
            .working
            .players
            .iter()
            .map(|(&id, name)| PlayerWins {
                id,
                name: name.clone(),
                wins: self.working.wins_of(id),
            })
            .collect())
    }

    fn count_matches_for_player(&mut self, id: PlayerId) -> Result<u32, StoreError> {
        Ok(self.working.matches.iter().filter(|m| m.involves(id)).count() as u32)
    }

    fn fetch_matches(&mut self) -> Result<Vec<Match>, StoreError> {
        Ok(self.working.matches.clone())
    }

    fn commit(self) -> Result<(), StoreError> {
        *self.live = self.working;
        Ok(())
    }
}
