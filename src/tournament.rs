//! Tournament engine.
//!
//! Public entry point for registering players, reporting results and
//! drawing the next round. The record store is injected at construction and
//! every operation runs inside a single store transaction.

use tracing::{debug, info};

use crate::calculate::{compute_standings, generate_pairings, PairingPolicy};
use crate::error::TournamentError;
use crate::models::{Match, MatchId, Pairing, Player, PlayerId, Standing};
use crate::storage::{RecordStore, StoreTx};

/// A Swiss-system tournament backed by a record store.
///
/// Rounds are implicit: call [`Tournament::pairings`] after the previous
/// round's results have been reported.
pub struct Tournament<S> {
    store: S,
    policy: PairingPolicy,
}

impl<S: RecordStore> Tournament<S> {
    /// Create a tournament over `store` using adjacent-rank pairing.
    pub fn new(store: S) -> Self {
        Self {
            store,
            policy: PairingPolicy::default(),
        }
    }

    /// Builder method to set the pairing policy.
    pub fn with_policy(mut self, policy: PairingPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> PairingPolicy {
        self.policy
    }

    /// Register a new player with zero wins. The name is kept exactly as given;
    /// it is only rejected when nothing but whitespace.
    pub fn register_player(&mut self, name: &str) -> Result<Player, TournamentError> {
        if name.trim().is_empty() {
            return Err(TournamentError::InvalidName);
        }

        let mut tx = self.store.transaction()?;
        let id = tx.create_player(name)?;
        tx.commit()?;

        info!("Registered player {} ({})", id, name);
        Ok(Player::new(id, name.to_string()))
    }

    /// Record that `winner` beat `loser`.
    pub fn report_match(
        &mut self,
        winner: PlayerId,
        loser: PlayerId,
    ) -> Result<MatchId, TournamentError> {
        if winner == loser {
            return Err(TournamentError::InvalidMatch(winner));
        }

        let mut tx = self.store.transaction()?;
        for id in [winner, loser] {
            if tx.find_player(id)?.is_none() {
                return Err(TournamentError::UnknownPlayer(id));
            }
        }
        let match_id = tx.insert_match(winner, loser)?;
        tx.commit()?;

        info!("Match {}: player {} beat player {}", match_id, winner, loser);
        Ok(match_id)
    }

    /// Number of registered players.
    pub fn count_players(&mut self) -> Result<usize, TournamentError> {
        let mut tx = self.store.transaction()?;
        let count = tx.count_players()?;
        tx.commit()?;
        Ok(count)
    }

    /// Look up a player and their current win count.
    pub fn player(&mut self, id: PlayerId) -> Result<Player, TournamentError> {
        let mut tx = self.store.transaction()?;
        let player = tx
            .find_player(id)?
            .ok_or(TournamentError::UnknownPlayer(id))?;
        tx.commit()?;
        Ok(player)
    }

    /// Clear the match log. Players stay registered.
    pub fn reset_matches(&mut self) -> Result<(), TournamentError> {
        let mut tx = self.store.transaction()?;
        let deleted = tx.delete_all_matches()?;
        tx.commit()?;

        info!("Deleted {} matches", deleted);
        Ok(())
    }

    /// Clear every player along with the matches they played.
    pub fn reset_players(&mut self) -> Result<(), TournamentError> {
        let mut tx = self.store.transaction()?;
        let matches = tx.delete_all_matches()?;
        let players = tx.delete_all_players()?;
        tx.commit()?;

        info!("Deleted {} players and {} matches", players, matches);
        Ok(())
    }

    /// Current standings, best record first.
    pub fn standings(&mut self) -> Result<Vec<Standing>, TournamentError> {
        let mut tx = self.store.transaction()?;
        let standings = compute_standings(&mut tx)?;
        tx.commit()?;
        Ok(standings)
    }

    /// Draw the next round from fresh standings.
    pub fn pairings(&mut self) -> Result<Vec<Pairing>, TournamentError> {
        let mut tx = self.store.transaction()?;
        let standings = compute_standings(&mut tx)?;
        let history = match self.policy {
            PairingPolicy::Adjacent => Vec::new(),
            PairingPolicy::AvoidRematches => tx.fetch_matches()?,
        };
        tx.commit()?;

        let pairings = generate_pairings(&standings, &history, self.policy)?;
        debug!(
            "Generated {} pairings for {} players ({:?})",
            pairings.len(),
            standings.len(),
            self.policy
        );
        Ok(pairings)
    }

    /// The full match log in report order.
    pub fn matches(&mut self) -> Result<Vec<Match>, TournamentError> {
        let mut tx = self.store.transaction()?;
        let matches = tx.fetch_matches()?;
        tx.commit()?;
        Ok(matches)
    }

    /// Mutable access to the underlying store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}
