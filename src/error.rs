//! Error type shared across the library.
//!
//! Every fallible operation in this crate returns `Result<_, SignalError>`.
//! Degenerate *numeric* outcomes (logarithm of a non-positive value,
//! statistics of an empty source) are not errors; they follow IEEE 754
//! semantics and are documented where they occur.

/// Errors raised by signal sources and numeric utilities.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SignalError {
    /// A sample rate was supplied that is zero, negative, or NaN.
    #[error("invalid sample rate: {rate} (must be positive)")]
    InvalidSampleRate {
        /// The rejected rate.
        rate: f64,
    },

    /// A positional sample access reached past the end of the source.
    #[error("sample index {index} out of range for source of length {len}")]
    SampleOutOfRange {
        /// The requested index.
        index: usize,
        /// The source length at the time of access.
        len: usize,
    },

    /// `random` was called with bounds that describe an empty range.
    #[error("empty random range [{from}, {to})")]
    EmptyRandomRange {
        /// Inclusive lower bound.
        from: i32,
        /// Exclusive upper bound.
        to: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = SignalError::InvalidSampleRate { rate: -1.0 };
        assert_eq!(err.to_string(), "invalid sample rate: -1 (must be positive)");

        let err = SignalError::SampleOutOfRange { index: 8, len: 4 };
        assert_eq!(
            err.to_string(),
            "sample index 8 out of range for source of length 4"
        );

        let err = SignalError::EmptyRandomRange { from: 5, to: 5 };
        assert_eq!(err.to_string(), "empty random range [5, 5)");
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<SignalError>();
    }
}
