//! Tournament configuration and roster construction

use std::path::Path;

use anyhow::Context as _;
use lookback_logic::{Policy, SeededRng, StrategySource, StrategyTable};
use serde::{Deserialize, Serialize};

use crate::player::Player;

/// One explicitly configured entrant
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entrant {
    pub name: String,
    pub strategy: StrategySource,
}

/// Tournament parameters
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    /// Number of generated bias players (ignored when `entrants` is set)
    pub players: usize,
    /// Rounds each table conditions on
    pub lookback: usize,
    /// Rounds per pairing
    pub rounds: usize,
    /// Seed for random and bias tables
    pub seed: u64,
    /// Append the fixed set of classic strategies
    pub include_classics: bool,
    /// Explicit roster replacing the generated bias players
    pub entrants: Option<Vec<Entrant>>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            players: 100,
            lookback: 4,
            rounds: 50,
            seed: 0,
            include_classics: true,
            entrants: None,
        }
    }
}

impl TournamentConfig {
    /// Load a JSON config file; absent fields keep their defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Named strategies for every entrant, in roster order
    pub fn roster(&self) -> Vec<Entrant> {
        let mut roster = match &self.entrants {
            Some(entrants) => entrants.clone(),
            None => (0..self.players)
                .map(|i| {
                    let bias = i as f64 / self.players as f64;
                    Entrant {
                        name: format!("{:?} bias", bias),
                        strategy: StrategySource::Rule(Policy::Bias(bias)),
                    }
                })
                .collect(),
        };
        if self.include_classics {
            roster.extend(classics());
        }
        roster
    }

    /// Build every entrant's table; entrant `i` draws from RNG stream `i`
    pub fn build_players(&self) -> anyhow::Result<Vec<Player>> {
        let base = SeededRng::new(self.seed);
        self.roster()
            .into_iter()
            .enumerate()
            .map(|(i, entrant)| {
                let mut rng = base.for_stream(i as u64);
                let table = StrategyTable::from_source(self.lookback, &entrant.strategy, &mut rng)
                    .with_context(|| format!("building table for {:?}", entrant.name))?;
                Ok(Player::new(entrant.name, table))
            })
            .collect()
    }
}

/// The fixed line-up of well-known strategies
pub fn classics() -> Vec<Entrant> {
    [
        Policy::AlwaysCooperate,
        Policy::AlwaysDefect,
        Policy::TitForTat,
        Policy::TitForNTats(1),
        Policy::TitForNTats(2),
        Policy::TitForNTats(3),
        Policy::Opposite,
        Policy::Bias(0.2),
        Policy::Bias(0.4),
        Policy::Bias(0.6),
        Policy::Bias(0.8),
    ]
    .into_iter()
    .map(|policy| Entrant {
        name: policy.to_string(),
        strategy: StrategySource::Rule(policy),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roster() {
        let config = TournamentConfig {
            players: 10,
            ..Default::default()
        };
        let roster = config.roster();
        assert_eq!(roster.len(), 10 + classics().len());
        assert_eq!(roster[0].name, "0.0 bias");
        assert_eq!(roster[3].name, "0.3 bias");
        assert_eq!(roster[5].name, "0.5 bias");
        assert_eq!(roster[5].strategy, StrategySource::Rule(Policy::Bias(0.5)));
        assert_eq!(roster[10].name, "Cooperate");
        assert_eq!(roster.last().unwrap().name, "80% bias");
    }

    #[test]
    fn test_classic_names() {
        let names: Vec<_> = classics().into_iter().map(|e| e.name).collect();
        assert_eq!(
            names,
            vec![
                "Cooperate",
                "Defect",
                "Tit for tat",
                "Tit for 1 tat",
                "Tit for 2 tat",
                "Tit for 3 tat",
                "Opposite strategy",
                "20% bias",
                "40% bias",
                "60% bias",
                "80% bias",
            ]
        );
    }

    #[test]
    fn test_without_classics() {
        let config = TournamentConfig {
            players: 3,
            include_classics: false,
            ..Default::default()
        };
        assert_eq!(config.roster().len(), 3);
    }

    #[test]
    fn test_explicit_entrants() {
        let config = TournamentConfig {
            include_classics: false,
            entrants: Some(vec![Entrant {
                name: "coin".to_string(),
                strategy: StrategySource::Random,
            }]),
            ..Default::default()
        };
        let players = config.build_players().unwrap();
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].name(), "coin");
        assert_eq!(players[0].table().state_count(), 341);
    }

    #[test]
    fn test_build_players_sizes() {
        let config = TournamentConfig {
            players: 4,
            lookback: 3,
            ..Default::default()
        };
        let players = config.build_players().unwrap();
        assert_eq!(players.len(), 4 + classics().len());
        for p in &players {
            assert_eq!(p.table().state_count(), 85);
            assert_eq!(p.score(), 0);
        }
    }

    #[test]
    fn test_build_players_is_reproducible() {
        let config = TournamentConfig {
            players: 5,
            lookback: 3,
            seed: 99,
            ..Default::default()
        };
        let a = config.build_players().unwrap();
        let b = config.build_players().unwrap();
        for (pa, pb) in a.iter().zip(&b) {
            assert_eq!(pa.table(), pb.table());
        }
    }

    #[test]
    fn test_invalid_entrant_fails() {
        let config = TournamentConfig {
            include_classics: false,
            entrants: Some(vec![Entrant {
                name: "broken".to_string(),
                strategy: StrategySource::Rule(Policy::Bias(2.0)),
            }]),
            ..Default::default()
        };
        let err = config.build_players().unwrap_err();
        assert!(format!("{:#}", err).contains("broken"));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{"rounds": 7, "seed": 3}"#;
        let config: TournamentConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.rounds, 7);
        assert_eq!(config.seed, 3);
        assert_eq!(config.lookback, 4);
        assert_eq!(config.players, 100);
        assert!(config.include_classics);
    }

    #[test]
    fn test_json_entrants() {
        let json = r#"{
            "include_classics": false,
            "entrants": [
                {"name": "tft", "strategy": {"Rule": "TitForTat"}},
                {"name": "coin", "strategy": "Random"}
            ]
        }"#;
        let config: TournamentConfig = serde_json::from_str(json).unwrap();
        let roster = config.roster();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].strategy, StrategySource::Rule(Policy::TitForTat));
        assert_eq!(roster[1].strategy, StrategySource::Random);
    }
}
