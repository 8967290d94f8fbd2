//! Precomputed strategy tables
//!
//! One move per history index. A table is built once, either by coin flips
//! or by folding a policy over the windows in index order, and is read-only
//! afterwards.

use crate::error::LogicError;
use crate::history::{HistoryCodec, Round};
use crate::random::SeededRng;
use crate::strategy::{FoldState, Move, Policy, StrategySource};

/// Cooperate/defect tally over a table's entries
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveCounts {
    pub cooperate: usize,
    pub defect: usize,
}

/// A move for every history window up to the lookback length
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StrategyTable {
    codec: HistoryCodec,
    moves: Vec<Move>,
}

impl StrategyTable {
    /// Independent fair coin flip for every entry
    pub fn random(lookback: usize, rng: &mut SeededRng) -> Result<Self, LogicError> {
        let codec = HistoryCodec::new(lookback)?;
        let moves = (0..codec.state_count())
            .map(|_| if rng.next_bool() { Move::Cooperate } else { Move::Defect })
            .collect();

        log::debug!("built random table: lookback {}, {} states", lookback, codec.state_count());
        Ok(Self { codec, moves })
    }

    /// Derive every entry from `policy`, visiting indices 0, 1, 2, ...
    ///
    /// Stateful policies see windows in this enumeration order, not in the
    /// order a real game would produce them.
    pub fn from_policy(
        lookback: usize,
        policy: &Policy,
        rng: &mut SeededRng,
    ) -> Result<Self, LogicError> {
        policy.validate()?;
        let codec = HistoryCodec::new(lookback)?;
        let moves = fold_policy(&codec, policy, rng)?;

        log::debug!(
            "built table for {}: lookback {}, {} states",
            policy,
            lookback,
            codec.state_count()
        );
        Ok(Self { codec, moves })
    }

    pub fn from_source(
        lookback: usize,
        source: &StrategySource,
        rng: &mut SeededRng,
    ) -> Result<Self, LogicError> {
        match source {
            StrategySource::Random => Self::random(lookback, rng),
            StrategySource::Rule(policy) => Self::from_policy(lookback, policy, rng),
        }
    }

    /// Wrap an explicit move list; it must hold exactly one move per state
    pub fn from_moves(lookback: usize, moves: Vec<Move>) -> Result<Self, LogicError> {
        let codec = HistoryCodec::new(lookback)?;
        if moves.len() != codec.state_count() {
            return Err(LogicError::TableSizeMismatch {
                expected: codec.state_count(),
                actual: moves.len(),
            });
        }
        Ok(Self { codec, moves })
    }

    pub fn lookback(&self) -> usize {
        self.codec.lookback()
    }

    pub fn state_count(&self) -> usize {
        self.moves.len()
    }

    pub fn codec(&self) -> &HistoryCodec {
        &self.codec
    }

    /// Move to play given the full game history so far (oldest first)
    pub fn move_for_history(&self, history: &[Round]) -> Move {
        self.moves[self.codec.index_for_history(history)]
    }

    pub fn move_at(&self, index: usize) -> Result<Move, LogicError> {
        self.moves
            .get(index)
            .copied()
            .ok_or(LogicError::IndexOutOfRange {
                index,
                state_count: self.moves.len(),
            })
    }

    /// Every entry, in index order
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn move_counts(&self) -> MoveCounts {
        self.moves.iter().fold(MoveCounts::default(), |mut counts, m| {
            match m {
                Move::Cooperate => counts.cooperate += 1,
                Move::Defect => counts.defect += 1,
            }
            counts
        })
    }

    /// Fraction of entries that cooperate
    pub fn cooperation_rate(&self) -> f64 {
        let counts = self.move_counts();
        counts.cooperate as f64 / self.moves.len() as f64
    }
}

impl core::fmt::Display for StrategyTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, m) in self.moves.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", m)?;
        }
        Ok(())
    }
}

/// Fold `policy` over the windows of every index, threading [`FoldState`]
fn fold_policy(
    codec: &HistoryCodec,
    policy: &Policy,
    rng: &mut SeededRng,
) -> Result<Vec<Move>, LogicError> {
    let state_count = codec.state_count();
    let (moves, _) = (0..state_count).try_fold(
        (Vec::with_capacity(state_count), FoldState::default()),
        |(mut moves, state), index| {
            let window = codec.sequence_of(index)?;
            let (m, next) = policy.decide(&window, state, rng);
            moves.push(m);
            Ok::<_, LogicError>((moves, next))
        },
    )?;
    Ok(moves)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_rng() -> SeededRng {
        SeededRng::new(10)
    }

    #[test]
    fn test_random_table_size() {
        let table = StrategyTable::random(3, &mut make_rng()).unwrap();
        assert_eq!(table.state_count(), 85);
        assert_eq!(table.moves().len(), table.state_count());
        let counts = table.move_counts();
        assert_eq!(counts.cooperate + counts.defect, 85);
    }

    #[test]
    fn test_random_table_determinism() {
        let a = StrategyTable::random(4, &mut make_rng()).unwrap();
        let b = StrategyTable::random(4, &mut make_rng()).unwrap();
        let c = StrategyTable::random(4, &mut SeededRng::new(11)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_constant_tables() {
        for lookback in 0..=4 {
            let coop =
                StrategyTable::from_policy(lookback, &Policy::AlwaysCooperate, &mut make_rng())
                    .unwrap();
            let defect =
                StrategyTable::from_policy(lookback, &Policy::AlwaysDefect, &mut make_rng())
                    .unwrap();
            assert!(coop.moves().iter().all(|m| *m == Move::Cooperate));
            assert!(defect.moves().iter().all(|m| *m == Move::Defect));
            assert_eq!(coop.cooperation_rate(), 1.0);
            assert_eq!(defect.cooperation_rate(), 0.0);
        }
    }

    #[test]
    fn test_tit_for_tat_table_follows_last_round() {
        let table = StrategyTable::from_policy(3, &Policy::TitForTat, &mut make_rng()).unwrap();
        let codec = table.codec();

        assert_eq!(table.move_at(0).unwrap(), Move::Cooperate);
        for index in 1..table.state_count() {
            let window = codec.sequence_of(index).unwrap();
            let expected = window.last().unwrap().theirs;
            assert_eq!(table.move_at(index).unwrap(), expected, "index {}", index);
        }
    }

    #[test]
    fn test_tit_for_one_tat_matches_tit_for_tat() {
        let tft = StrategyTable::from_policy(3, &Policy::TitForTat, &mut make_rng()).unwrap();
        let tf1t = StrategyTable::from_policy(3, &Policy::TitForNTats(1), &mut make_rng()).unwrap();
        assert_eq!(tft.moves(), tf1t.moves());
    }

    #[test]
    fn test_tit_for_two_tats_follows_enumeration_order() {
        // Last rounds cycle CC, CD, DC, DD in index order, so the opponent's
        // last move alternates and a streak never reaches two.
        let table =
            StrategyTable::from_policy(3, &Policy::TitForNTats(2), &mut make_rng()).unwrap();
        assert!(table.moves().iter().all(|m| *m == Move::Cooperate));
    }

    #[test]
    fn test_opposite_table() {
        let table = StrategyTable::from_policy(2, &Policy::Opposite, &mut make_rng()).unwrap();
        assert_eq!(table.move_for_history(&[]), Move::Cooperate);
        assert_eq!(table.move_for_history(&[Round::CC]), Move::Defect);
        assert_eq!(table.move_for_history(&[Round::DD, Round::CD]), Move::Cooperate);
    }

    #[test]
    fn test_bias_table() {
        let table = StrategyTable::from_policy(5, &Policy::Bias(0.25), &mut make_rng()).unwrap();
        let rate = table.cooperation_rate();
        assert!(rate > 0.2 && rate < 0.3, "rate {}", rate);

        let never = StrategyTable::from_policy(2, &Policy::Bias(0.0), &mut make_rng()).unwrap();
        assert!(never.moves().iter().all(|m| *m == Move::Defect));
    }

    #[test]
    fn test_invalid_bias_rejected() {
        let err = StrategyTable::from_policy(2, &Policy::Bias(1.2), &mut make_rng()).unwrap_err();
        assert!(matches!(err, LogicError::InvalidParameter { .. }));
    }

    #[test]
    fn test_lookup_uses_trailing_window() {
        let lookback = 3;
        let target = 26;
        let mut moves = vec![Move::Cooperate; crate::history::state_count(lookback)];
        moves[target] = Move::Defect;
        let table = StrategyTable::from_moves(lookback, moves).unwrap();
        let codec = table.codec();

        let mut history = Vec::new();
        history.extend(codec.sequence_of(10).unwrap());
        history.extend(codec.sequence_of(15).unwrap());
        history.extend(codec.sequence_of(target).unwrap());

        assert_eq!(table.move_for_history(&history), Move::Defect);
        assert_eq!(table.move_for_history(&history[..history.len() - 1]), Move::Cooperate);
    }

    #[test]
    fn test_short_history_uses_own_range() {
        let mut moves = vec![Move::Defect; crate::history::state_count(3)];
        moves[11] = Move::Cooperate;
        let table = StrategyTable::from_moves(3, moves).unwrap();

        assert_eq!(table.move_for_history(&[Round::CD, Round::DC]), Move::Cooperate);
        assert_eq!(table.move_for_history(&[]), Move::Defect);
    }

    #[test]
    fn test_from_moves_size_mismatch() {
        let err = StrategyTable::from_moves(2, vec![Move::Cooperate; 20]).unwrap_err();
        assert_eq!(err, LogicError::TableSizeMismatch { expected: 21, actual: 20 });
    }

    #[test]
    fn test_move_at_out_of_range() {
        let table = StrategyTable::from_policy(1, &Policy::TitForTat, &mut make_rng()).unwrap();
        assert_eq!(
            table.move_at(5),
            Err(LogicError::IndexOutOfRange { index: 5, state_count: 5 })
        );
    }

    #[test]
    fn test_display() {
        let table = StrategyTable::from_policy(1, &Policy::TitForTat, &mut make_rng()).unwrap();
        assert_eq!(table.to_string(), "C C D C D");
    }

    #[test]
    fn test_from_source() {
        let mut rng = make_rng();
        let defect = StrategySource::Rule(Policy::AlwaysDefect);
        let table = StrategyTable::from_source(2, &defect, &mut rng).unwrap();
        assert_eq!(table.move_counts(), MoveCounts { cooperate: 0, defect: 21 });

        let random = StrategyTable::from_source(2, &StrategySource::Random, &mut rng).unwrap();
        assert_eq!(random.state_count(), 21);
    }
}
