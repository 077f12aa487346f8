//! Error handling for the field representation layer

#[cfg(feature = "std")]
use std::fmt;

#[cfg(not(feature = "std"))]
use core::fmt;

use alloc::string::{String, ToString};

use bls12_tower_api::{Error as CoreError, Result as CoreResult, ResultExt};

/// The error type for field element encoding and sampling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input is not a valid encoding (e.g. malformed hex)
    Decoding {
        /// Operation that rejected the input
        context: &'static str,
        /// Why the decoder rejected it
        details: String,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Decoded integer is not strictly below the modulus
    NonCanonical {
        /// Operation that performed the check
        context: &'static str,
    },

    /// The random byte source reported a failure
    RandomSource {
        /// Message reported by the source
        details: String,
    },
}

/// Result type for field representation operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Decoding { context, details } => {
                write!(f, "Decoding error in {}: {}", context, details)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::NonCanonical { context } => {
                write!(
                    f,
                    "Non-canonical field element in {}: must be less than modulus",
                    context
                )
            }
            Error::RandomSource { details } => {
                write!(f, "Random source failure: {}", details)
            }
        }
    }
}

// Implement std::error::Error when std is available
#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Self {
        Error::Decoding {
            context: "hex",
            details: err.to_string(),
        }
    }
}

impl From<rand::Error> for Error {
    fn from(err: rand::Error) -> Self {
        Error::RandomSource {
            details: err.to_string(),
        }
    }
}

// Implement conversion to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Decoding { context, details } => CoreError::SerializationError {
                context,
                message: details,
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::NonCanonical { context } => CoreError::InvalidParameter {
                context,
                message: "must be less than modulus".to_string(),
            },
            Error::RandomSource { details } => CoreError::RandomGenerationError {
                context: "random source",
                message: details,
            },
        }
    }
}

/// Convert a field-layer result to a core result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.with_context(ctx)
}

#[cfg(test)]
mod tests;
