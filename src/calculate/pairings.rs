//! Next-round pairing generation.
//!
//! Players are matched with neighbours in the standings, which puts equal or
//! nearly-equal records against each other. Odd player counts are rejected
//! rather than handing out byes.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TournamentError;
use crate::models::{Match, Pairing, PlayerId, Standing};

/// How the next round is drawn from the standings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairingPolicy {
    /// Rank 1 v 2, 3 v 4, ... regardless of who has already met.
    #[default]
    Adjacent,
    /// Like `Adjacent`, but skip down the table so that no two players meet
    /// again whenever a round without repeats is possible.
    AvoidRematches,
}

/// Pair standings under `policy`. `history` is only read for `AvoidRematches`.
pub fn generate_pairings(
    standings: &[Standing],
    history: &[Match],
    policy: PairingPolicy,
) -> Result<Vec<Pairing>, TournamentError> {
    match policy {
        PairingPolicy::Adjacent => pair_adjacent(standings),
        PairingPolicy::AvoidRematches => pair_avoiding_rematches(standings, history),
    }
}

/// Pair index `2k` with `2k + 1`.
pub fn pair_adjacent(standings: &[Standing]) -> Result<Vec<Pairing>, TournamentError> {
    ensure_even(standings)?;

    Ok(standings
        .chunks_exact(2)
        .map(|pair| Pairing::new(&pair[0], &pair[1]))
        .collect())
}

/// Pairing that avoids repeat matchups whenever the field allows it.
///
/// Players are taken in rank order and each is offered the nearest unpaired
/// opponent they have not met, backtracking when a choice higher up leaves
/// the rest of the table without a rematch-free pairing. Only when no
/// rematch-free round exists at all does this fall back to [`pair_greedy`].
pub fn pair_avoiding_rematches(
    standings: &[Standing],
    history: &[Match],
) -> Result<Vec<Pairing>, TournamentError> {
    ensure_even(standings)?;

    let met: HashSet<(PlayerId, PlayerId)> = history
        .iter()
        .map(|m| matchup_key(m.winner, m.loser))
        .collect();

    let mut paired = vec![false; standings.len()];
    let mut picks = Vec::with_capacity(standings.len() / 2);

    if search_unplayed(standings, &met, &mut paired, &mut picks) {
        return Ok(picks
            .into_iter()
            .map(|(i, j)| Pairing::new(&standings[i], &standings[j]))
            .collect());
    }

    debug!("No rematch-free round exists; falling back to greedy pairing");
    Ok(pair_greedy(standings, &met))
}

/// Depth-first search for a perfect pairing with no repeat matchups.
fn search_unplayed(
    standings: &[Standing],
    met: &HashSet<(PlayerId, PlayerId)>,
    paired: &mut [bool],
    picks: &mut Vec<(usize, usize)>,
) -> bool {
    let Some(i) = paired.iter().position(|&p| !p) else {
        return true;
    };

    paired[i] = true;
    for j in (i + 1)..standings.len() {
        if paired[j]
            || met.contains(&matchup_key(standings[i].player_id, standings[j].player_id))
        {
            continue;
        }

        paired[j] = true;
        picks.push((i, j));
        if search_unplayed(standings, met, paired, picks) {
            return true;
        }
        picks.pop();
        paired[j] = false;
    }
    paired[i] = false;

    false
}

/// Single top-down pass: each unpaired player takes the nearest unplayed
/// opponent, or the nearest opponent at all when everyone left is a rematch.
fn pair_greedy(standings: &[Standing], met: &HashSet<(PlayerId, PlayerId)>) -> Vec<Pairing> {
    let mut paired = vec![false; standings.len()];
    let mut pairings = Vec::with_capacity(standings.len() / 2);

    for i in 0..standings.len() {
        if paired[i] {
            continue;
        }

        let a = &standings[i];
        let mut nearest = None;
        let mut unplayed = None;

        for (j, b) in standings.iter().enumerate().skip(i + 1) {
            if paired[j] {
                continue;
            }
            if nearest.is_none() {
                nearest = Some(j);
            }
            if !met.contains(&matchup_key(a.player_id, b.player_id)) {
                unplayed = Some(j);
                break;
            }
        }

        if let Some(j) = unplayed.or(nearest) {
            if unplayed.is_none() {
                debug!(
                    "No unplayed opponent left for player {}; repeating pairing with {}",
                    a.player_id, standings[j].player_id
                );
            }
            paired[i] = true;
            paired[j] = true;
            pairings.push(Pairing::new(a, &standings[j]));
        }
    }

    pairings
}

fn ensure_even(standings: &[Standing]) -> Result<(), TournamentError> {
    if standings.len() % 2 != 0 {
        return Err(TournamentError::OddPlayerCount(standings.len()));
    }
    Ok(())
}

fn matchup_key(a: PlayerId, b: PlayerId) -> (PlayerId, PlayerId) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}
