//! Error types for generator construction and sampling.

use thiserror::Error;

/// Errors raised by [`Lcg`](crate::Lcg) operations.
///
/// Both variants are raised synchronously at the start of the offending call,
/// before any generator state is touched, so callers may correct the input
/// and retry without losing their position in the sequence.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GeneratorError {
    /// Construction was requested with a negative seed.
    #[error("Invalid seed {seed}: must be non-negative")]
    InvalidSeed {
        /// The rejected seed.
        seed: i64,
    },

    /// Normal sampling was requested with a non-positive (or NaN)
    /// standard deviation.
    #[error("Invalid standard deviation {stddev}: must be strictly positive")]
    InvalidStdDev {
        /// The rejected standard deviation.
        stddev: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_error_display() {
        let err = GeneratorError::InvalidSeed { seed: -1 };
        assert_eq!(err.to_string(), "Invalid seed -1: must be non-negative");

        let err = GeneratorError::InvalidStdDev { stddev: -2.5 };
        assert!(err.to_string().contains("-2.5"));
        assert!(err.to_string().contains("strictly positive"));
    }
}
