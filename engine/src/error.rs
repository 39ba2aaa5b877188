use thiserror::Error;

/// Failures surfaced by the simulation core. Both are caller errors caught
/// before any computation starts; nothing here is retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// A `RollSpec` field is outside its allowed range.
    #[error("invalid {field}: {value} (expected >= 1)")]
    InvalidParameter { field: &'static str, value: i64 },

    /// `summarize` was handed a zero-length sample.
    #[error("cannot summarize an empty sample")]
    EmptySample,
}
