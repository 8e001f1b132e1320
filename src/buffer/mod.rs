//! # Buffer Module
//!
//! This module provides the circular (ring) buffers.
//!
//! ## Plain English Explanation
//!
//! Imagine a circular conveyor belt with a fixed number of spots.
//! Every time a new item arrives:
//! 1. It goes on the belt right after the newest item
//! 2. If the belt is full, it's either refused or the oldest item falls off
//! 3. Items can be taken from either end: newest (`pop`) or oldest (`shift`)
//!
//! Two belts are available:
//! - `RingBuffer<T>`: typed elements
//! - `ByteRing`: raw byte blocks whose size is picked at runtime
//!
//! Neither one locks anything. If several threads share a buffer, wrap it in
//! `SharedRing` (or your own mutex) so one caller works on it at a time.

mod byte_ring;
mod cursor;
mod mode;
mod ring_buffer;

pub use byte_ring::ByteRing;
pub use mode::{BufferState, ReadMode, WriteMode};
pub use ring_buffer::RingBuffer;

use parking_lot::{Mutex, MutexGuard};

use crate::config::RingConfig;
use crate::error::RingResult;

// ============================================
// SHARED RING
// A mutex around the whole ring buffer
// ============================================

/// A ring buffer that can be shared across threads
///
/// ## Plain English Explanation
///
/// The ring itself assumes exactly one user at a time. This wrapper is the
/// "bathroom door lock": every call takes the lock, does its O(1) work and
/// releases it. Use `lock` when several operations must happen together.
pub struct SharedRing<T> {
    inner: Mutex<RingBuffer<T>>,
}

impl<T: Clone + Default> SharedRing<T> {
    /// Creates a shared ring with `capacity` slots
    pub fn new(capacity: usize) -> RingResult<Self> {
        RingBuffer::new(capacity).map(Self::from_ring)
    }

    /// Creates a shared ring from a configuration
    pub fn with_config(config: &RingConfig) -> RingResult<Self> {
        RingBuffer::with_config(config).map(Self::from_ring)
    }

    /// Wraps an existing ring
    pub fn from_ring(ring: RingBuffer<T>) -> Self {
        Self {
            inner: Mutex::new(ring),
        }
    }

    pub fn push(&self, value: T, mode: WriteMode) -> RingResult<()> {
        self.inner.lock().push(value, mode)
    }

    pub fn push_overwrite(&self, value: T) {
        self.inner.lock().push_overwrite(value);
    }

    pub fn push_default(&self, value: T) -> RingResult<()> {
        self.inner.lock().push_default(value)
    }

    pub fn pop(&self, mode: ReadMode) -> RingResult<T> {
        self.inner.lock().pop(mode)
    }

    pub fn shift(&self, mode: ReadMode) -> RingResult<T> {
        self.inner.lock().shift(mode)
    }

    pub fn peek(&self) -> RingResult<T> {
        self.inner.lock().peek()
    }

    pub fn spy(&self) -> RingResult<T> {
        self.inner.lock().spy()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl<T> SharedRing<T> {
    /// Holds the lock for a run of operations
    ///
    /// ## Example
    /// ```
    /// # use fixed_ring::buffer::{SharedRing, WriteMode};
    /// let shared = SharedRing::new(4).unwrap();
    /// {
    ///     let mut ring = shared.lock();
    ///     ring.push(1u32, WriteMode::Reject).unwrap();
    ///     ring.push(2u32, WriteMode::Reject).unwrap();
    /// }
    /// assert_eq!(shared.len(), 2);
    /// ```
    pub fn lock(&self) -> MutexGuard<'_, RingBuffer<T>> {
        self.inner.lock()
    }

    /// Returns the number of elements currently stored
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Returns the maximum number of elements
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Returns how full the ring is (0.0 = empty, 1.0 = full)
    pub fn fill_percentage(&self) -> f32 {
        let ring = self.inner.lock();
        ring.len() as f32 / ring.capacity() as f32
    }

    /// Unwraps the ring
    pub fn into_inner(self) -> RingBuffer<T> {
        self.inner.into_inner()
    }
}

// ============================================
// TESTS
// ============================================
