// src/core/error.rs

//! Error handling logic

use thiserror::Error;

/// Error types raised by the detector and the game built on top of it.
///
/// Every failure is returned as a value. A scan never retries internally, so
/// whichever variant surfaces here is final for that call.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum RadarError {
    /// A line contained something other than 0 or 1, or was too long to be
    /// addressed by a state vector.
    #[error("Invalid Input: {message}")]
    InvalidInput {
        /// InvalidInput failure message
        message: String,
    },

    /// The probability distribution could not be brought back to a total of 1.
    /// Signals a programming error in the transforms, not a bad input.
    #[error("Numeric Instability: probability mass sums to {total} (tolerance {tolerance:e})")]
    NumericInstability {
        /// Sum of the distribution after the renormalization attempt.
        total: f64,
        /// Allowed deviation from 1.
        tolerance: f64,
    },

    /// Caller supplied parameters no scan or game can run with
    /// (zero shots, empty board, ships that cannot fit).
    #[error("Invalid Configuration: {message}")]
    InvalidConfiguration {
        /// InvalidConfiguration failure message
        message: String,
    },

    /// A phase vector and an amplitude vector of different lengths were combined.
    #[error("Dimension Mismatch: expected {expected} entries, found {found}")]
    DimensionMismatch {
        /// Length of the state being transformed.
        expected: usize,
        /// Length of the operand that was supplied.
        found: usize,
    },
}

impl RadarError {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        RadarError::InvalidInput { message: message.into() }
    }

    pub(crate) fn invalid_configuration(message: impl Into<String>) -> Self {
        RadarError::InvalidConfiguration { message: message.into() }
    }
}

/// Result type for detector and game operations.
pub type RadarResult<T> = Result<T, RadarError>;
