//! Single pairing between two players

use serde::{Deserialize, Serialize};
use crate::history::Round;
use crate::payoff;
use crate::strategy::Move;

/// Append-only record of one pairing, from the first player's side
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    history: Vec<Round>,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds played so far, oldest first, as the first player sees them
    pub fn history(&self) -> &[Round] {
        &self.history
    }

    /// Rounds played so far as the second player sees them
    pub fn mirrored_history(&self) -> Vec<Round> {
        self.history.iter().map(|round| round.mirrored()).collect()
    }

    /// Last `len` rounds (fewer if the game is shorter) as the second player sees them
    pub fn mirrored_trailing(&self, len: usize) -> Vec<Round> {
        let start = self.history.len().saturating_sub(len);
        self.history[start..].iter().map(|round| round.mirrored()).collect()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Record a round and return its payoff `(first, second)`
    pub fn play_round(&mut self, first: Move, second: Move) -> (i32, i32) {
        self.history.push(Round::new(first, second));
        payoff(first, second)
    }

    /// Summed payoff of every round so far
    pub fn totals(&self) -> (i64, i64) {
        self.history.iter().fold((0, 0), |(a, b), round| {
            let (pa, pb) = payoff(round.mine, round.theirs);
            (a + pa as i64, b + pb as i64)
        })
    }
}
