//! Errors surfaced by tournament operations.

use thiserror::Error;

use crate::models::PlayerId;
use crate::storage::StoreError;

/// Errors that can occur while running a tournament operation.
///
/// Validation errors are raised before anything is written, and store
/// failures are passed through untouched. Nothing is retried here.
#[derive(Debug, Error)]
pub enum TournamentError {
    #[error("Record store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),

    #[error("Unknown player: {0}")]
    UnknownPlayer(PlayerId),

    #[error("Invalid match: player {0} cannot play against themself")]
    InvalidMatch(PlayerId),

    #[error("Cannot pair an odd number of players ({0})")]
    OddPlayerCount(usize),

    #[error("Player name must not be empty")]
    InvalidName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            TournamentError::UnknownPlayer(PlayerId::new(99)).to_string(),
            "Unknown player: 99"
        );
        assert_eq!(
            TournamentError::OddPlayerCount(5).to_string(),
            "Cannot pair an odd number of players (5)"
        );
    }

    #[test]
    fn test_store_error_converts() {
        let err: TournamentError = StoreError::Offline.into();
        assert!(matches!(err, TournamentError::StoreUnavailable(_)));
    }
}
