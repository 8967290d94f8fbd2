//! Deterministic pairing generation for tournament matches
//!
//! Every ordered pair of distinct players meets once, so `(a, b)` and
//! `(b, a)` are separate matches. Matches are numbered row-major:
//! all of player 0's matches as first player, then player 1's, and so on.

/// Total number of matches: n·(n−1)
pub fn match_count(participant_count: usize) -> usize {
    participant_count * participant_count.saturating_sub(1)
}

/// Get the pairing for a specific match index, O(1) with no allocation
pub fn pairing_for_match(participant_count: usize, match_index: usize) -> Option<(usize, usize)> {
    if match_index >= match_count(participant_count) {
        return None;
    }

    let row = participant_count - 1;
    let first = match_index / row;
    let slot = match_index % row;
    // skip the diagonal
    let second = if slot >= first { slot + 1 } else { slot };
    Some((first, second))
}

/// All ordered pairings in match-index order
pub fn ordered_pairings(participant_count: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..match_count(participant_count)).filter_map(move |i| pairing_for_match(participant_count, i))
}
