//! Error type definitions for field element operations

use alloc::string::String;

/// Primary error type for field tower operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input could not be decoded (malformed hex, bad encoding)
    SerializationError {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Input decoded but is not an acceptable value (e.g. not below the modulus)
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// The random byte source failed
    RandomGenerationError {
        context: &'static str,
        message: String,
    },
}

/// Result type for field tower operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::SerializationError { message, .. } => Self::SerializationError { context, message },
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::RandomGenerationError { message, .. } => {
                Self::RandomGenerationError { context, message }
            }
        }
    }

    /// The context the error was raised (or re-tagged) in
    pub fn context(&self) -> &'static str {
        match self {
            Self::SerializationError { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::InvalidParameter { context, .. }
            | Self::RandomGenerationError { context, .. } => context,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::SerializationError { context, message } => {
                write!(f, "Serialization error: {}: {}", context, message)
            }
            Self::InvalidLength { context, expected, actual } => {
                write!(f, "{}: invalid length (expected {}, got {})", context, expected, actual)
            }
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            }
            Self::RandomGenerationError { context, message } => {
                write!(f, "Random generation error: {}: {}", context, message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_with_context_keeps_message() {
        let err = Error::SerializationError {
            context: "inner",
            message: "odd number of digits".to_string(),
        };
        let err = err.with_context("outer");
        assert_eq!(err.context(), "outer");
        assert_eq!(err.to_string(), "Serialization error: outer: odd number of digits");
    }

    #[test]
    fn test_with_context_keeps_lengths() {
        let err = Error::InvalidLength {
            context: "inner",
            expected: 48,
            actual: 47,
        };
        let err = err.with_context("fe");
        assert_eq!(err.context(), "fe");
        assert_eq!(err.to_string(), "fe: invalid length (expected 48, got 47)");
    }
}
