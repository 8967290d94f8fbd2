//! Dense numbering of bounded round histories
//!
//! Every window of 0..=L rounds maps to a unique table index. Windows are
//! grouped by length: index 0 is the empty window, the next 4 indices are
//! the one-round windows, the next 16 the two-round windows, and so on.
//! Inside a group a window reads as a base-4 numeral whose units digit is
//! the most recent round.

use serde::{Deserialize, Serialize};
use crate::error::LogicError;
use crate::strategy::Move;

/// Largest lookback a table can be built for (Σ 4^i for i ≤ 12 ≈ 22M states).
pub const MAX_LOOKBACK: usize = 12;

/// Moves played by both sides in one round, seen from `mine`'s side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Round {
    pub mine: Move,
    pub theirs: Move,
}

impl Round {
    pub const CC: Round = Round::new(Move::Cooperate, Move::Cooperate);
    pub const CD: Round = Round::new(Move::Cooperate, Move::Defect);
    pub const DC: Round = Round::new(Move::Defect, Move::Cooperate);
    pub const DD: Round = Round::new(Move::Defect, Move::Defect);

    /// All outcomes in digit order.
    pub const ALL: [Round; 4] = [Round::CC, Round::CD, Round::DC, Round::DD];

    pub const fn new(mine: Move, theirs: Move) -> Self {
        Self { mine, theirs }
    }

    /// Base-4 digit of this outcome: CC=0, CD=1, DC=2, DD=3
    pub fn digit(self) -> usize {
        match (self.mine, self.theirs) {
            (Move::Cooperate, Move::Cooperate) => 0,
            (Move::Cooperate, Move::Defect) => 1,
            (Move::Defect, Move::Cooperate) => 2,
            (Move::Defect, Move::Defect) => 3,
        }
    }

    fn from_digit(digit: usize) -> Self {
        Self::ALL[digit % 4]
    }

    /// Same round from the opponent's side.
    pub fn mirrored(self) -> Self {
        Self::new(self.theirs, self.mine)
    }
}

impl core::fmt::Display for Round {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}{}", self.mine, self.theirs)
    }
}

/// Number of windows shorter than `len`: Σ_{i<len} 4^i
pub(crate) fn offset(len: usize) -> usize {
    (4usize.pow(len as u32) - 1) / 3
}

/// Number of windows of length 0..=lookback.
pub(crate) fn state_count(lookback: usize) -> usize {
    offset(lookback + 1)
}

/// Encode/decode between history windows and table indices for a fixed lookback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryCodec {
    lookback: usize,
}

impl HistoryCodec {
    pub fn new(lookback: usize) -> Result<Self, LogicError> {
        if lookback > MAX_LOOKBACK {
            return Err(LogicError::LookbackTooLong {
                lookback,
                max: MAX_LOOKBACK,
            });
        }
        Ok(Self { lookback })
    }

    pub fn lookback(&self) -> usize {
        self.lookback
    }

    pub fn state_count(&self) -> usize {
        state_count(self.lookback)
    }

    /// Table index of `window` (oldest round first).
    ///
    /// Fails with `InvalidWindowLength` when the window is longer than the
    /// lookback; use [`HistoryCodec::index_for_history`] for unbounded histories.
    pub fn index_of(&self, window: &[Round]) -> Result<usize, LogicError> {
        if window.len() > self.lookback {
            return Err(LogicError::InvalidWindowLength {
                len: window.len(),
                lookback: self.lookback,
            });
        }
        Ok(encode(window))
    }

    /// Window for a table index, oldest round first.
    pub fn sequence_of(&self, index: usize) -> Result<Vec<Round>, LogicError> {
        let state_count = self.state_count();
        if index >= state_count {
            return Err(LogicError::IndexOutOfRange { index, state_count });
        }

        let mut len = 0;
        while offset(len + 1) <= index {
            len += 1;
        }

        let mut numeral = index - offset(len);
        let mut window = vec![Round::CC; len];
        for slot in window.iter_mut().rev() {
            *slot = Round::from_digit(numeral % 4);
            numeral /= 4;
        }
        Ok(window)
    }

    /// Last `lookback` rounds of a history (all of it if shorter).
    pub fn trailing<'a>(&self, history: &'a [Round]) -> &'a [Round] {
        &history[history.len().saturating_sub(self.lookback)..]
    }

    /// Table index of the trailing window of an arbitrarily long history.
    pub fn index_for_history(&self, history: &[Round]) -> usize {
        encode(self.trailing(history))
    }
}

fn encode(window: &[Round]) -> usize {
    let numeral = window
        .iter()
        .fold(0usize, |acc, round| acc * 4 + round.digit());
    offset(window.len()) + numeral
}
