//! Strategy definitions and execution
//!
//! A policy decides a move from a history window. Tables are built by
//! folding a policy over every window in index order, so the only state a
//! policy may keep is the [`FoldState`] threaded through that fold.

use serde::{Deserialize, Serialize};
use crate::error::LogicError;
use crate::history::Round;
use crate::random::SeededRng;

/// A move in the Prisoner's Dilemma
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Cooperate,
    Defect,
}

impl Move {
    pub fn opposite(self) -> Self {
        match self {
            Move::Cooperate => Move::Defect,
            Move::Defect => Move::Cooperate,
        }
    }
}

impl core::fmt::Display for Move {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Move::Cooperate => write!(f, "C"),
            Move::Defect => write!(f, "D"),
        }
    }
}

/// Rule a table is derived from
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Policy {
    /// Always cooperate, never defect.
    AlwaysCooperate,
    /// Always defect, never cooperate.
    AlwaysDefect,
    /// Copy opponent's last move. Start with cooperate.
    TitForTat,
    /// Defect once the defect streak seen during construction reaches N.
    TitForNTats(u32),
    /// Play the opposite of the opponent's last move. Start with cooperate.
    Opposite,
    /// Cooperate with the given probability, independent of history.
    Bias(f64),
}

/// How an entrant's table is produced
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum StrategySource {
    /// Fair coin flip for every entry.
    Random,
    /// Fold a policy over every history window.
    Rule(Policy),
}

/// Accumulator carried from one table entry to the next during construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FoldState {
    /// Consecutive windows (in index order) whose last opponent move was a defect.
    pub tat_streak: u32,
}

impl Policy {
    /// Reject parameters outside their domain
    pub fn validate(&self) -> Result<(), LogicError> {
        match *self {
            Policy::TitForNTats(0) => Err(LogicError::InvalidParameter {
                parameter: "tats",
                reason: "must be at least 1".to_string(),
            }),
            Policy::Bias(p) if !(0.0..=1.0).contains(&p) => Err(LogicError::InvalidParameter {
                parameter: "bias",
                reason: format!("{} is outside [0, 1]", p),
            }),
            _ => Ok(()),
        }
    }

    /// Decide the move for one window and return the state for the next window
    ///
    /// # Arguments
    /// * `window` - History window, oldest round first, from the deciding player's side
    /// * `state` - Accumulator produced by the previous window in index order
    /// * `rng` - Random source for probabilistic policies
    pub fn decide(
        &self,
        window: &[Round],
        state: FoldState,
        rng: &mut SeededRng,
    ) -> (Move, FoldState) {
        let opponent_last = window.last().map(|round| round.theirs);

        match *self {
            Policy::AlwaysCooperate => (Move::Cooperate, state),
            Policy::AlwaysDefect => (Move::Defect, state),
            Policy::TitForTat => (execute_tit_for_tat(opponent_last), state),
            Policy::TitForNTats(n) => execute_tit_for_n_tats(opponent_last, n, state),
            Policy::Opposite => (execute_opposite(opponent_last), state),
            Policy::Bias(p) => (execute_bias(p, rng), state),
        }
    }

    /// Get a human-readable description of the policy
    pub fn describe(&self) -> String {
        match *self {
            Policy::AlwaysCooperate => "Never defects. Always cooperates.".to_string(),
            Policy::AlwaysDefect => "Never cooperates. Always defects.".to_string(),
            Policy::TitForTat => "Copies opponent's last move. Starts by cooperating.".to_string(),
            Policy::TitForNTats(n) => format!("Retaliates after {} consecutive defections.", n),
            Policy::Opposite => {
                "Plays the opposite of opponent's last move. Starts by cooperating.".to_string()
            }
            Policy::Bias(p) => {
                format!("Cooperates {:.0}% of the time regardless of history.", p * 100.0)
            }
        }
    }
}

impl core::fmt::Display for Policy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Policy::AlwaysCooperate => write!(f, "Cooperate"),
            Policy::AlwaysDefect => write!(f, "Defect"),
            Policy::TitForTat => write!(f, "Tit for tat"),
            Policy::TitForNTats(n) => write!(f, "Tit for {} tat", n),
            Policy::Opposite => write!(f, "Opposite strategy"),
            Policy::Bias(p) => write!(f, "{:.0}% bias", p * 100.0),
        }
    }
}

impl core::fmt::Display for StrategySource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StrategySource::Random => write!(f, "Random"),
            StrategySource::Rule(policy) => write!(f, "{}", policy),
        }
    }
}

/// Tit-for-Tat: Copy opponent's last move, start with cooperate
fn execute_tit_for_tat(opponent_last: Option<Move>) -> Move {
    match opponent_last {
        None | Some(Move::Cooperate) => Move::Cooperate,
        Some(Move::Defect) => Move::Defect,
    }
}

/// Tit-for-N-Tats: count trailing opponent defects across the fold
fn execute_tit_for_n_tats(
    opponent_last: Option<Move>,
    n: u32,
    state: FoldState,
) -> (Move, FoldState) {
    let tat_streak = match opponent_last {
        None => return (Move::Cooperate, FoldState { tat_streak: 0 }),
        Some(Move::Defect) => state.tat_streak.saturating_add(1),
        Some(Move::Cooperate) => 0,
    };

    let m = if tat_streak >= n {
        Move::Defect
    } else {
        Move::Cooperate
    };
    (m, FoldState { tat_streak })
}

/// Opposite: invert opponent's last move, start with cooperate
fn execute_opposite(opponent_last: Option<Move>) -> Move {
    match opponent_last {
        None => Move::Cooperate,
        Some(m) => m.opposite(),
    }
}

/// Bias: cooperate with probability `p`
fn execute_bias(p: f64, rng: &mut SeededRng) -> Move {
    if rng.next_f64() < p {
        Move::Cooperate
    } else {
        Move::Defect
    }
}
