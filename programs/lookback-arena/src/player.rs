//! Tournament entrant

use lookback_logic::{Move, Round, StrategyTable};

/// A named strategy table with an accumulating score
#[derive(Clone, Debug)]
pub struct Player {
    name: String,
    table: StrategyTable,
    score: i64,
}

impl Player {
    pub fn new(name: impl Into<String>, table: StrategyTable) -> Self {
        Self {
            name: name.into(),
            table,
            score: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table(&self) -> &StrategyTable {
        &self.table
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    /// Move for the given history, oriented from this player's side
    pub fn move_for_history(&self, history: &[Round]) -> Move {
        self.table.move_for_history(history)
    }

    pub fn add_score(&mut self, delta: i64) {
        self.score += delta;
    }
}
