//! # Configuration Module
//!
//! Construction-time settings for ring buffers.
//!
//! ## Plain English Explanation
//!
//! A ring buffer is decided up front: how many slots it has, how big each
//! slot is, and what happens when someone pushes into a full buffer.
//! Nothing here can change after the buffer exists.
//!
//! Two presets cover the usual cases:
//! - `queue`: a producer/consumer queue that refuses pushes when full
//! - `history`: a sliding window that forgets the oldest element instead

use std::mem;

use thiserror::Error;

use crate::buffer::WriteMode;

// ============================================
// MAIN CONFIGURATION
// ============================================

/// Settings used by `RingBuffer::with_config` and `ByteRing::with_config`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RingConfig {
    /// Maximum number of elements held at once
    pub capacity: usize,

    /// Size of one element in bytes
    ///
    /// ## Plain English
    /// For a typed `RingBuffer<T>` this must equal `size_of::<T>()`.
    /// For a `ByteRing` it's whatever block size you want to store.
    pub element_size: usize,

    /// What `push_default` does when the buffer is full
    pub write_mode: WriteMode,
}

impl RingConfig {
    /// A queue of `capacity` elements that rejects pushes when full
    pub fn queue(element_size: usize, capacity: usize) -> Self {
        Self {
            capacity,
            element_size,
            write_mode: WriteMode::Reject,
        }
    }

    /// A sliding window of `capacity` elements that drops the oldest when full
    pub fn history(element_size: usize, capacity: usize) -> Self {
        Self {
            write_mode: WriteMode::Overwrite,
            ..Self::queue(element_size, capacity)
        }
    }

    /// A queue sized for elements of type `T`
    pub fn of<T>(capacity: usize) -> Self {
        Self::queue(mem::size_of::<T>(), capacity)
    }

    /// Switches the default write policy
    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }

    /// Validates the configuration and returns errors if invalid
    ///
    /// ## Plain English
    /// Returns a list of problems, or empty if all is well.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.capacity == 0 {
            errors.push(ConfigError::ZeroCapacity);
        }
        if self.element_size == 0 {
            errors.push(ConfigError::ZeroElementSize);
        }
        if self.capacity.checked_mul(self.element_size).is_none() {
            errors.push(ConfigError::TooLarge {
                capacity: self.capacity,
                element_size: self.element_size,
            });
        }

        errors
    }

    /// Size of the backing store in bytes, saturating on overflow
    pub fn estimated_bytes(&self) -> usize {
        self.capacity.saturating_mul(self.element_size)
    }

    /// First validation error, if any
    pub(crate) fn check(&self) -> Result<(), ConfigError> {
        match self.validate().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Default for RingConfig {
    fn default() -> Self {
        Self::queue(1, 64)
    }
}

// ============================================
// CONFIGURATION ERRORS
// ============================================

/// Errors that can occur with configuration values
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A ring needs at least one slot
    #[error("capacity must be at least 1")]
    ZeroCapacity,

    /// Elements must occupy at least one byte
    #[error("element size must be at least 1 byte")]
    ZeroElementSize,

    /// `capacity * element_size` doesn't fit in memory's address space
    #[error("{capacity} elements of {element_size} bytes overflows usize")]
    TooLarge { capacity: usize, element_size: usize },
}

// ============================================
// TESTS
// ============================================
