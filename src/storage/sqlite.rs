//! SQLite record store.
//!
//! Win counts are not stored on the player row. The `player_wins` view
//! derives them from the match log, so a reported match and the winner's
//! count can never drift apart.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Transaction, TransactionBehavior};
use tracing::{debug, info};

use super::{PlayerWins, RecordStore, StoreError, StoreTx};
use crate::models::{Match, MatchId, Player, PlayerId};

const SCHEMA: &str = "
    PRAGMA foreign_keys = ON;

    CREATE TABLE IF NOT EXISTS players (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        created_at TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS matches (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        winner INTEGER NOT NULL REFERENCES players(id) ON DELETE CASCADE,
        loser INTEGER NOT NULL REFERENCES players(id) ON DELETE CASCADE,
        recorded_at TEXT NOT NULL,
        CHECK (winner <> loser)
    );

    CREATE INDEX IF NOT EXISTS idx_matches_winner ON matches(winner);
    CREATE INDEX IF NOT EXISTS idx_matches_loser ON matches(loser);

    CREATE VIEW IF NOT EXISTS player_wins AS
        SELECT p.id, p.name,
               (SELECT COUNT(*) FROM matches m WHERE m.winner = p.id) AS wins
        FROM players p;
";

/// SQLite-backed record store.
///
/// # Example
///
/// ```ignore
/// let mut store = SqliteStore::open("data/tournament.db")?;
/// let mut tx = store.transaction()?;
/// let id = tx.create_player("Alice")?;
/// tx.commit()?;
/// ```
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens or creates a database at the given path and initializes the schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        info!("Opened tournament database at {:?}", path);
        Self::with_connection(conn)
    }

    /// A private database that lives as long as the store.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }
}

impl RecordStore for SqliteStore {
    type Tx<'a> = SqliteTx<'a>;

    fn transaction(&mut self) -> Result<SqliteTx<'_>, StoreError> {
        // IMMEDIATE takes the write lock up front so concurrent writers queue
        // instead of failing mid-operation.
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        Ok(SqliteTx { tx })
    }
}

/// An open SQLite transaction. Rolls back on drop unless committed.
pub struct SqliteTx<'a> {
    tx: Transaction<'a>,
}

impl StoreTx for SqliteTx<'_> {
    fn create_player(&mut self, name: &str) -> Result<PlayerId, StoreError> {
        self.tx.execute(
            "INSERT INTO players (name, created_at) VALUES (?1, ?2)",
            params![name, Utc::now()],
        )?;
        let id = PlayerId::new(self.tx.last_insert_rowid());
        debug!("Inserted player {} ({})", id, name);
        Ok(id)
    }

    fn find_player(&mut self, id: PlayerId) -> Result<Option<Player>, StoreError> {
        let player = self
            .tx
            .query_row(
                "SELECT id, name, wins FROM player_wins WHERE id = ?1",
                params![id.get()],
                |row| {
                    Ok(PlayerWins {
                        id: PlayerId::new(row.get(0)?),
                        name: row.get(1)?,
                        wins: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(player.map(Player::from))
    }

    fn delete_all_players(&mut self) -> Result<usize, StoreError> {
        let deleted = self.tx.execute("DELETE FROM players", [])?;
        Ok(deleted)
    }

    fn delete_all_matches(&mut self) -> Result<usize, StoreError> {
        let deleted = self.tx.execute("DELETE FROM matches", [])?;
        Ok(deleted)
    }

    fn count_players(&mut self) -> Result<usize, StoreError> {
        let count: i64 = self
            .tx
            .query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn insert_match(&mut self, winner: PlayerId, loser: PlayerId) -> Result<MatchId, StoreError> {
        self.tx.execute(
            "INSERT INTO matches (winner, loser, recorded_at) VALUES (?1, ?2, ?3)",
            params![winner.get(), loser.get(), Utc::now()],
        )?;
        Ok(MatchId::new(self.tx.last_insert_rowid()))
    }

    fn fetch_player_win_counts(&mut self) -> Result<Vec<PlayerWins>, StoreError> {
        let mut stmt = self.tx.prepare("SELECT id, name, wins FROM player_wins")?;
        let rows = stmt
            .query_map([], |row| {
                Ok(PlayerWins {
                    id: PlayerId::new(row.get(0)?),
                    name: row.get(1)?,
                    wins: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    fn count_matches_for_player(&mut self, id: PlayerId) -> Result<u32, StoreError> {
        let count: u32 = self.tx.query_row(
            "SELECT COUNT(*) FROM matches WHERE winner = ?1 OR loser = ?1",
            params![id.get()],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    fn fetch_matches(&mut self) -> Result<Vec<Match>, StoreError> {
        let mut stmt = self
            .tx
            .prepare("SELECT id, winner, loser, recorded_at FROM matches ORDER BY id")?;
        let rows = stmt
            .query_map([], |row| {
                Ok(Match {
                    id: MatchId::new(row.get(0)?),
                    winner: PlayerId::new(row.get(1)?),
                    loser: PlayerId::new(row.get(2)?),
                    recorded_at: row.get::<_, DateTime<Utc>>(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    fn commit(self) -> Result<(), StoreError> {
        self.tx.commit()?;
        Ok(())
    }
}
