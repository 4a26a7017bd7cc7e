//! Standings and pairing computation.
//!
//! Everything here is derived on demand from the record store:
//! - Standings: players ranked by wins, ties broken by id
//! - Pairings: next-round matchups drawn from the standings

pub mod pairings;
pub mod standings;

pub use pairings::{generate_pairings, pair_adjacent, pair_avoiding_rematches, PairingPolicy};
pub use standings::{compute_standings, rank};
