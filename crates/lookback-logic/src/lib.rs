//! Match Logic for Lookback Arena
//!
//! Core logic for the Iterated Prisoner's Dilemma with history-indexed
//! strategy tables. A player's strategy is a table holding one move for
//! every window of up to L past rounds; the window is numbered densely by
//! [`HistoryCodec`].

mod error;
mod random;
mod history;
mod strategy;
mod table;
mod game;
mod pairing;

pub use error::LogicError;
pub use random::SeededRng;
pub use history::{HistoryCodec, Round, MAX_LOOKBACK};
pub use strategy::{FoldState, Move, Policy, StrategySource};
pub use table::{MoveCounts, StrategyTable};
pub use game::Game;
pub use pairing::{match_count, ordered_pairings, pairing_for_match};

/// Payoff matrix for the Prisoner's Dilemma, as years lost
/// Returns (score_a, score_b)
pub fn payoff(a: Move, b: Move) -> (i32, i32) {
    match (a, b) {
        (Move::Cooperate, Move::Cooperate) => (-1, -1),
        (Move::Cooperate, Move::Defect) => (-3, 0),
        (Move::Defect, Move::Cooperate) => (0, -3),
        (Move::Defect, Move::Defect) => (-2, -2),
    }
}
