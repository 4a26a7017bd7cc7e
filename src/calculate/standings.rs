//! Standings calculation.

use std::cmp::Reverse;

use crate::models::Standing;
use crate::storage::{StoreError, StoreTx};

/// Build the standings table from current store state.
///
/// One row per registered player, ranked by [`rank`]. An empty store gives
/// an empty table.
pub fn compute_standings<T: StoreTx>(tx: &mut T) -> Result<Vec<Standing>, StoreError> {
    let rows = tx.fetch_player_win_counts()?;

    let mut standings = Vec::with_capacity(rows.len());
    for row in rows {
        let matches_played = tx.count_matches_for_player(row.id)?;
        standings.push(Standing {
            player_id: row.id,
            name: row.name,
            wins: row.wins,
            matches_played,
        });
    }

    rank(&mut standings);
    Ok(standings)
}

/// Order by wins descending, then player id ascending.
pub fn rank(standings: &mut [Standing]) {
    standings.sort_by_key(|s| (Reverse(s.wins), s.player_id));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlayerId;
    use crate::storage::{MemoryStore, RecordStore};
    use pretty_assertions::assert_eq;

    fn standing(id: i64, wins: u32) -> Standing {
        Standing {
            player_id: PlayerId::new(id),
            name: format!("P{}", id),
            wins,
            matches_played: wins,
        }
    }

    fn order(standings: &[Standing]) -> Vec<i64> {
        standings.iter().map(|s| s.player_id.get()).collect()
    }

    #[test]
    fn test_rank_by_wins_descending() {
        let mut table = vec![standing(1, 0), standing(2, 3), standing(3, 1)];
        rank(&mut table);
        assert_eq!(order(&table), vec![2, 3, 1]);
    }

    #[test]
    fn test_rank_ties_broken_by_id() {
        let mut table = vec![
            standing(4, 1),
            standing(2, 1),
            standing(3, 0),
            standing(1, 0),
        ];
        rank(&mut table);
        assert_eq!(order(&table), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_compute_standings_empty_store() {
        let mut store = MemoryStore::new();
        let mut tx = store.transaction().unwrap();
        assert!(compute_standings(&mut tx).unwrap().is_empty());
    }

    #[test]
    fn test_compute_standings_counts_matches() {
        let mut store = MemoryStore::new();
        let mut tx = store.transaction().unwrap();
        let a = tx.create_player("Alice").unwrap();
        let b = tx.create_player("Bob").unwrap();
        let c = tx.create_player("Carol").unwrap();
        tx.insert_match(b, a).unwrap();
        tx.insert_match(b, c).unwrap();

        let table = compute_standings(&mut tx).unwrap();

        assert_eq!(order(&table), vec![b.get(), a.get(), c.get()]);
        assert_eq!(table[0].wins, 2);
        assert_eq!(table[0].matches_played, 2);
        assert_eq!(table[1].matches_played, 1);
        assert!(table.iter().all(|s| s.wins <= s.matches_played));
    }
}
