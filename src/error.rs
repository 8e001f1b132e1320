//! # Error Types Module
//!
//! This module defines every error a ring buffer operation can report.
//!
//! ## Plain English Explanation
//!
//! A ring buffer only has a handful of ways to say "no":
//!
//! - "InvalidArgument: You asked for a buffer with room for nothing"
//! - "BufferFull: There's no space and you didn't allow overwriting"
//! - "Empty: There's nothing to read"
//!
//! Every operation checks these BEFORE touching anything, so a failed call
//! leaves the buffer exactly as it was.

use thiserror::Error;

use crate::config::ConfigError;

// ============================================
// MAIN ERROR
// ============================================

/// The error type for all ring buffer operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RingError {
    /// Zero capacity or zero element size at construction
    ///
    /// ## Examples
    /// - `RingBuffer::<u32>::new(0)`
    /// - `ByteRing::new(0, 16)`
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The backing store could not be reserved
    #[error("could not allocate {bytes} bytes of ring storage")]
    AllocationError {
        /// Requested size of the backing store
        bytes: usize,
    },

    /// Push rejected: buffer is full and overwrite was not permitted
    #[error("buffer is full")]
    BufferFull,

    /// Pop/shift rejected: buffer holds no elements
    #[error("buffer is empty")]
    Empty,

    /// A byte slice handed to a byte ring doesn't match its element size
    #[error("element is {actual} bytes, ring stores {expected}-byte elements")]
    ElementSize {
        /// Element size the ring was created with
        expected: usize,
        /// Length of the slice the caller passed
        actual: usize,
    },

    /// The configuration used to build a ring was rejected
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

// ============================================
// RESULT TYPE ALIAS
// ============================================

/// A Result type that uses RingError
///
/// ## Plain English
///
/// This is a shorthand. Instead of writing:
/// ```text
/// fn do_something() -> Result<Value, RingError>
/// ```
/// We can write:
/// ```text
/// fn do_something() -> RingResult<Value>
/// ```
pub type RingResult<T> = Result<T, RingError>;

// ============================================
// TESTS
// ============================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RingError::ElementSize {
            expected: 4,
            actual: 3,
        };
        let message = format!("{}", err);
        assert!(message.contains("3 bytes"));
        assert!(message.contains("4-byte"));

        assert_eq!(RingError::BufferFull.to_string(), "buffer is full");
    }

    #[test]
    fn test_config_error_conversion() {
        let err: RingError = ConfigError::ZeroCapacity.into();

        match err {
            RingError::Config(ConfigError::ZeroCapacity) => {} // Expected
            other => panic!("Expected Config variant, got {:?}", other),
        }
    }
}
