//! Round-robin tournament execution

use lookback_logic::{match_count, ordered_pairings, Game};
use serde::Serialize;

use crate::player::Player;

/// One finished pairing
#[derive(Clone, Debug)]
pub struct MatchRecord {
    pub first: usize,
    pub second: usize,
    pub game: Game,
}

/// A player's final line in the rankings
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Standing {
    pub position: usize,
    pub score: i64,
    pub cooperation_rate: f64,
    pub name: String,
}

/// Players plus the fixed number of rounds every pairing runs for
#[derive(Clone, Debug)]
pub struct Tournament {
    players: Vec<Player>,
    rounds: usize,
}

/// Final players and every game played
#[derive(Clone, Debug)]
pub struct TournamentOutcome {
    players: Vec<Player>,
    matches: Vec<MatchRecord>,
}

impl Tournament {
    pub fn new(players: Vec<Player>, rounds: usize) -> Self {
        Self { players, rounds }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Play every ordered pair of distinct players for `rounds` rounds
    ///
    /// The second player of a pairing sees the history mirrored, so both
    /// tables are always indexed from their owner's side.
    pub fn run(mut self) -> TournamentOutcome {
        let n = self.players.len();
        log::info!(
            "tournament starting: {} players, {} matches, {} rounds each",
            n,
            match_count(n),
            self.rounds
        );

        let mut matches = Vec::with_capacity(match_count(n));
        for (first, second) in ordered_pairings(n) {
            let game = self.play_match(first, second);
            log::trace!(
                "{} vs {}: {:?}",
                self.players[first].name(),
                self.players[second].name(),
                game.totals()
            );
            matches.push(MatchRecord { first, second, game });
        }

        log::info!("tournament finished: {} matches played", matches.len());
        TournamentOutcome {
            players: self.players,
            matches,
        }
    }

    fn play_match(&mut self, first: usize, second: usize) -> Game {
        let mut game = Game::new();
        let second_lookback = self.players[second].table().lookback();
        for _ in 0..self.rounds {
            let move_a = self.players[first].move_for_history(game.history());
            let seen_by_second = game.mirrored_trailing(second_lookback);
            let move_b = self.players[second].move_for_history(&seen_by_second);

            let (score_a, score_b) = game.play_round(move_a, move_b);
            self.players[first].add_score(score_a as i64);
            self.players[second].add_score(score_b as i64);
        }
        game
    }
}

impl TournamentOutcome {
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    /// Game where `first` moved first against `second`
    pub fn game(&self, first: usize, second: usize) -> Option<&Game> {
        self.matches
            .iter()
            .find(|m| m.first == first && m.second == second)
            .map(|m| &m.game)
    }

    /// Players sorted by final score, lowest first; ties keep roster order
    pub fn standings(&self) -> Vec<Standing> {
        let mut ranked: Vec<&Player> = self.players.iter().collect();
        ranked.sort_by_key(|p| p.score());
        ranked
            .into_iter()
            .enumerate()
            .map(|(position, p)| Standing {
                position,
                score: p.score(),
                cooperation_rate: p.table().cooperation_rate(),
                name: p.name().to_string(),
            })
            .collect()
    }
}
