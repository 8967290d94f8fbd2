//! Lookback Arena - Iterated Prisoner's Dilemma Tournament
//!
//! Runs a round-robin tournament between players whose moves come from
//! history-indexed strategy tables, then ranks them by total payoff.

pub mod config;
pub mod player;
pub mod report;
pub mod tournament;

pub use config::{classics, Entrant, TournamentConfig};
pub use player::Player;
pub use report::{write_report, write_tables, ReportFormat};
pub use tournament::{MatchRecord, Standing, Tournament, TournamentOutcome};
