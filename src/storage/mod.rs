//! Record store for players and match results.
//!
//! The tournament engine never talks to a database directly. It opens a
//! transaction on a [`RecordStore`] and runs every read and write of one
//! operation through the returned [`StoreTx`], so each operation is applied
//! all-or-nothing:
//! - Player records (name, store-assigned id)
//! - The append-only match log
//! - Aggregates the standings calculator reads (win counts, matches played)
//!
//! Dropping a transaction without calling [`StoreTx::commit`] rolls it back.

mod memory;
mod sqlite;

pub use memory::{MemoryStore, MemoryTx};
pub use sqlite::{SqliteStore, SqliteTx};

use thiserror::Error;

use crate::models::{Match, MatchId, Player, PlayerId};

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Record store is offline")]
    Offline,
}

/// Aggregate row used to build standings: a player and their win count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerWins {
    pub id: PlayerId,
    pub name: String,
    pub wins: u32,
}

impl From<PlayerWins> for Player {
    fn from(row: PlayerWins) -> Self {
        Player::new(row.id, row.name).with_wins(row.wins)
    }
}

/// Durable storage for players and matches.
pub trait RecordStore {
    type Tx<'a>: StoreTx
    where
        Self: 'a;

    /// Begin an atomic unit of work.
    fn transaction(&mut self) -> Result<Self::Tx<'_>, StoreError>;
}

/// Operations available inside one store transaction.
pub trait StoreTx {
    /// Insert a player and return the freshly assigned id.
    fn create_player(&mut self, name: &str) -> Result<PlayerId, StoreError>;

    /// Look up a single player with their current win count.
    fn find_player(&mut self, id: PlayerId) -> Result<Option<Player>, StoreError>;

    /// Remove every player. Matches referencing them go too.
    fn delete_all_players(&mut self) -> Result<usize, StoreError>;

    /// Remove every match.
    fn delete_all_matches(&mut self) -> Result<usize, StoreError>;

    fn count_players(&mut self) -> Result<usize, StoreError>;

    /// Append a match to the log.
    fn insert_match(&mut self, winner: PlayerId, loser: PlayerId) -> Result<MatchId, StoreError>;

    /// Every registered player with their win count, in no particular order.
    fn fetch_player_win_counts(&mut self) -> Result<Vec<PlayerWins>, StoreError>;

    /// Number of matches the player appears in as winner or loser.
    fn count_matches_for_player(&mut self, id: PlayerId) -> Result<u32, StoreError>;

    /// The full match log in report order.
    fn fetch_matches(&mut self) -> Result<Vec<Match>, StoreError>;

    /// Make every change in this transaction durable.
    fn commit(self) -> Result<(), StoreError>;
}
