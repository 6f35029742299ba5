// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for bit-string arithmetic and cube operations.
//!
//! Every failure is recoverable: operations validate their arguments before
//! touching any state, so a caller can report the error and carry on with the
//! cube it had.

use thiserror::Error;

/// Errors raised by the bit utilities, vertex/edge sets, and the cube facade.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    /// A bit string or wildcard pattern is badly formed.
    #[error("Malformed input {input:?}: {reason}")]
    MalformedInput { input: String, reason: String },

    /// A numeric value lies outside its permitted range `[0, limit)`.
    #[error("{what} {value} is out of range (must be less than {limit})")]
    OutOfRange {
        what: &'static str,
        value: usize,
        limit: usize,
    },

    /// An argument is well-formed but does not describe a valid request:
    /// a non-permutation index list, a mis-sized bit string, a location map
    /// that is not a bijection, or a vertex pair that is not an edge.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A mutating operation targeted a vertex id or location that does not exist.
    #[error("Vertex {0} not found")]
    NotFound(usize),
}

impl CubeError {
    /// Create a MalformedInput error.
    #[inline]
    pub fn malformed(input: &str, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// Create an OutOfRange error.
    #[inline]
    pub fn out_of_range(what: &'static str, value: usize, limit: usize) -> Self {
        Self::OutOfRange { what, value, limit }
    }

    /// Create an InvalidArgument error.
    #[inline]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CubeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = CubeError::malformed("01a", "expected only 0 and 1");
        assert_eq!(
            err.to_string(),
            "Malformed input \"01a\": expected only 0 and 1"
        );

        let err = CubeError::out_of_range("value", 8, 8);
        assert_eq!(err.to_string(), "value 8 is out of range (must be less than 8)");

        let err = CubeError::invalid("(0, 3) is not an edge");
        assert_eq!(err.to_string(), "Invalid argument: (0, 3) is not an edge");

        assert_eq!(CubeError::NotFound(5).to_string(), "Vertex 5 not found");
    }
}
