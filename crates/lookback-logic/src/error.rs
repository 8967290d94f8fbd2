//! Error type shared by the codec, tables and policies

/// Errors raised while encoding histories or building strategy tables.
#[derive(Clone, Debug, PartialEq, derive_more::Display, derive_more::Error)]
pub enum LogicError {
    /// A table index outside `[0, state_count)`.
    #[display("history index {index} out of range (state count {state_count})")]
    IndexOutOfRange { index: usize, state_count: usize },
    /// A window longer than the lookback length was passed to the codec.
    #[display("history window of length {len} exceeds lookback {lookback}")]
    InvalidWindowLength { len: usize, lookback: usize },
    /// A policy parameter outside its valid domain.
    #[display("invalid {parameter}: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },
    /// Lookback length too large to tabulate.
    #[display("lookback {lookback} exceeds maximum {max}")]
    LookbackTooLong { lookback: usize, max: usize },
    /// An explicit move list does not cover every history state.
    #[display("table has {actual} entries, expected {expected}")]
    TableSizeMismatch { expected: usize, actual: usize },
}
