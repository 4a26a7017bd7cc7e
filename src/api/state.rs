use std::sync::Arc;

use tokio::sync::Mutex;

use crate::storage::SqliteStore;
use crate::tournament::Tournament;

/// One engine shared by every request; the lock serializes operations.
pub type SharedTournament = Arc<Mutex<Tournament<SqliteStore>>>;

#[derive(Clone)]
pub struct AppState {
    pub tournament: SharedTournament,
}

impl AppState {
    pub fn new(tournament: Tournament<SqliteStore>) -> Self {
        Self {
            tournament: Arc::new(Mutex::new(tournament)),
        }
    }
}
