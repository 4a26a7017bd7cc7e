//! # Swiss Tournament
//!
//! Tracks players and match results for a Swiss-system tournament and draws
//! each next round by pairing players with equal or nearly-equal records.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (players, matches, standings, pairings)
//! - **storage**: Record store trait with SQLite and in-memory backends
//! - **calculate**: Standings ranking and pairing generation
//! - **tournament**: Engine that runs each operation as one store transaction
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod calculate;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;
pub mod tournament;

pub use error::TournamentError;
pub use models::*;
pub use tournament::Tournament;
