//! # Ring Buffer Implementation
//!
//! A fixed-capacity circular buffer of typed elements.
//!
//! ## Plain English
//!
//! Picture a circular track with numbered parking spots.
//! New cars park right after the newest one. When every spot is taken you
//! either turn the new car away (`WriteMode::Reject`) or tow the oldest car
//! to make room (`WriteMode::Overwrite`).
//!
//! Cars leave from either end: `pop` takes the newest, `shift` the oldest.
//! `peek` and `spy` just look.

use std::mem;

use crate::buffer::cursor::Cursor;
use crate::buffer::{BufferState, ReadMode, WriteMode};
use crate::config::RingConfig;
use crate::error::{RingError, RingResult};

/// A fixed-capacity ring buffer.
///
/// ## Properties
/// - Fixed capacity (doesn't grow)
/// - O(1) push, pop and shift
/// - Reads hand back clones, never references into storage
/// - Failed calls leave the buffer untouched
#[derive(Debug)]
pub struct RingBuffer<T> {
    /// The actual storage, `capacity` slots
    slots: Box<[T]>,

    /// Head/tail/count bookkeeping
    cursor: Cursor,

    /// Policy used by `push_default`
    write_mode: WriteMode,
}

impl<T: Clone + Default> RingBuffer<T> {
    /// Creates a new ring buffer with the given capacity.
    ///
    /// ## Example
    /// ```
    /// # use fixed_ring::buffer::RingBuffer;
    /// let buffer: RingBuffer<i32> = RingBuffer::new(100).unwrap();
    /// assert_eq!(buffer.capacity(), 100);
    /// assert!(buffer.is_empty());
    /// ```
    ///
    /// ## Errors
    /// - `InvalidArgument` for zero capacity or a zero-sized `T`
    /// - `AllocationError` if the slots can't be reserved
    pub fn new(capacity: usize) -> RingResult<Self> {
        if capacity == 0 {
            return Err(RingError::InvalidArgument("capacity must be at least 1"));
        }
        if mem::size_of::<T>() == 0 {
            return Err(RingError::InvalidArgument(
                "element type must not be zero-sized",
            ));
        }

        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| RingError::AllocationError {
                bytes: capacity.saturating_mul(mem::size_of::<T>()),
            })?;
        slots.resize_with(capacity, T::default);

        log::debug!(
            "Creating ring buffer: {} slots of {} bytes",
            capacity,
            mem::size_of::<T>()
        );

        Ok(Self {
            slots: slots.into_boxed_slice(),
            cursor: Cursor::new(capacity),
            write_mode: WriteMode::Reject,
        })
    }

    /// Creates a ring buffer from a validated configuration.
    ///
    /// `config.element_size` must equal `size_of::<T>()`.
    pub fn with_config(config: &RingConfig) -> RingResult<Self> {
        config.check()?;

        let expected = mem::size_of::<T>();
        if config.element_size != expected {
            return Err(RingError::ElementSize {
                expected,
                actual: config.element_size,
            });
        }

        let mut buffer = Self::new(config.capacity)?;
        buffer.write_mode = config.write_mode;
        Ok(buffer)
    }

    /// Adds `value` as the newest element.
    ///
    /// If the buffer is full, `mode` decides between failing with
    /// `BufferFull` and dropping the oldest element.
    pub fn push(&mut self, value: T, mode: WriteMode) -> RingResult<()> {
        let slot = self.cursor.plan_write(mode)?;
        self.slots[slot.index] = value;
        self.cursor.commit_write(slot);
        Ok(())
    }

    /// Adds `value`, dropping the oldest element if the buffer is full.
    pub fn push_overwrite(&mut self, value: T) {
        // Overwrite never reports BufferFull
        let _ = self.push(value, WriteMode::Overwrite);
    }

    /// Adds `value` using the write mode the buffer was configured with.
    pub fn push_default(&mut self, value: T) -> RingResult<()> {
        self.push(value, self.write_mode)
    }

    /// Reads the newest element, then applies `mode`.
    pub fn pop(&mut self, mode: ReadMode) -> RingResult<T> {
        let index = self.cursor.newest()?;
        let value = self.slots[index].clone();

        match mode {
            ReadMode::Keep => {}
            ReadMode::ClearValue => self.cursor.drop_newest(),
            ReadMode::ClearBuffer => self.clear(),
        }

        Ok(value)
    }

    /// Reads the oldest element, then applies `mode`.
    pub fn shift(&mut self, mode: ReadMode) -> RingResult<T> {
        let index = self.cursor.oldest()?;
        let value = self.slots[index].clone();

        match mode {
            ReadMode::Keep => {}
            ReadMode::ClearValue => self.cursor.drop_oldest(),
            ReadMode::ClearBuffer => self.clear(),
        }

        Ok(value)
    }

    /// Returns the newest element without removing it.
    pub fn peek(&self) -> RingResult<T> {
        let index = self.cursor.newest()?;
        Ok(self.slots[index].clone())
    }

    /// Returns the oldest element without removing it.
    pub fn spy(&self) -> RingResult<T> {
        let index = self.cursor.oldest()?;
        Ok(self.slots[index].clone())
    }

    /// Removes and returns the newest element.
    pub fn pop_consume(&mut self) -> RingResult<T> {
        self.pop(ReadMode::ClearValue)
    }

    /// Removes and returns the oldest element.
    pub fn shift_consume(&mut self) -> RingResult<T> {
        self.shift(ReadMode::ClearValue)
    }

    /// Returns the newest element and empties the buffer.
    pub fn drain_newest(&mut self) -> RingResult<T> {
        self.pop(ReadMode::ClearBuffer)
    }

    /// Returns the oldest element and empties the buffer.
    pub fn drain_oldest(&mut self) -> RingResult<T> {
        self.shift(ReadMode::ClearBuffer)
    }

    /// Resets every slot to `T::default()` and empties the buffer.
    pub fn clear(&mut self) {
        self.slots.fill(T::default());
        self.cursor.reset();
        log::trace!("Cleared ring buffer of {} slots", self.slots.len());
    }
}

impl<T> RingBuffer<T> {
    /// Returns the number of items currently stored.
    pub fn len(&self) -> usize {
        self.cursor.len()
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.cursor.len() == 0
    }

    /// Returns true if the buffer is at capacity.
    pub fn is_full(&self) -> bool {
        self.cursor.state() == BufferState::Full
    }

    /// Returns the maximum capacity.
    pub fn capacity(&self) -> usize {
        self.cursor.capacity()
    }

    /// Returns the size of one element in bytes.
    pub fn element_size(&self) -> usize {
        mem::size_of::<T>()
    }

    /// Returns whether the buffer is empty, partially filled or full.
    pub fn state(&self) -> BufferState {
        self.cursor.state()
    }

    /// Returns the write mode `push_default` uses.
    pub fn write_mode(&self) -> WriteMode {
        self.write_mode
    }
}

// ============================================
// TESTS
// ============================================

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(capacity: usize, values: &[i32]) -> RingBuffer<i32> {
        let mut buffer = RingBuffer::new(capacity).unwrap();
        for &v in values {
            buffer.push(v, WriteMode::Reject).unwrap();
        }
        buffer
    }

    #[test]
    fn test_new_buffer() {
        let buffer: RingBuffer<i32> = RingBuffer::new(5).unwrap();
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.capacity(), 5);
        assert_eq!(buffer.element_size(), 4);
        assert_eq!(buffer.state(), BufferState::Empty);
    }

    #[test]
    fn test_invalid_construction() {
        assert!(matches!(
            RingBuffer::<i32>::new(0),
            Err(RingError::InvalidArgument(_))
        ));
        assert!(matches!(
            RingBuffer::<()>::new(4),
            Err(RingError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_with_config() {
        let buffer: RingBuffer<u16> =
            RingBuffer::with_config(&RingConfig::history(2, 8)).unwrap();
        assert_eq!(buffer.capacity(), 8);
        assert_eq!(buffer.write_mode(), WriteMode::Overwrite);

        let wrong_size = RingBuffer::<u16>::with_config(&RingConfig::queue(4, 8));
        assert_eq!(
            wrong_size.unwrap_err(),
            RingError::ElementSize {
                expected: 2,
                actual: 4
            }
        );

        let zero = RingBuffer::<u16>::with_config(&RingConfig::queue(2, 0));
        assert!(matches!(zero, Err(RingError::Config(_))));
    }

    #[test]
    fn test_push_single() {
        let mut buffer = RingBuffer::new(5).unwrap();
        buffer.push(42, WriteMode::Reject).unwrap();

        assert!(!buffer.is_empty());
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.peek(), Ok(42));
        assert_eq!(buffer.spy(), Ok(42));
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn test_reject_when_full() {
        let mut buffer = filled(3, &[1, 2, 3]);
        assert_eq!(buffer.state(), BufferState::Full);

        assert_eq!(buffer.push(4, WriteMode::Reject), Err(RingError::BufferFull));
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.spy(), Ok(1));
        assert_eq!(buffer.peek(), Ok(3));
    }

    #[test]
    fn test_overwrite_drops_oldest() {
        let mut buffer = filled(3, &[1, 2, 3]);

        buffer.push(4, WriteMode::Overwrite).unwrap();
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.spy(), Ok(2));
        assert_eq!(buffer.peek(), Ok(4));
    }

    #[test]
    fn test_fifo_and_lifo_ends() {
        let mut buffer = filled(5, &[1, 2, 3, 4]);
        assert_eq!(buffer.peek(), Ok(4));

        let drained: Vec<_> = std::iter::from_fn(|| buffer.shift_consume().ok()).collect();
        assert_eq!(drained, vec![1, 2, 3, 4]);
        assert!(buffer.is_empty());

        let mut buffer = filled(5, &[1, 2, 3, 4]);
        let drained: Vec<_> = std::iter::from_fn(|| buffer.pop_consume().ok()).collect();
        assert_eq!(drained, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_pop_across_wrap() {
        let mut buffer = RingBuffer::new(3).unwrap();
        for i in 1..=4 {
            buffer.push_overwrite(i);
        }
        // head sits on slot 0, so consuming pops must wrap backwards
        assert_eq!(buffer.pop_consume(), Ok(4));
        assert_eq!(buffer.pop_consume(), Ok(3));
        assert_eq!(buffer.peek(), Ok(2));
        assert_eq!(buffer.spy(), Ok(2));
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn test_mixed_ends() {
        let mut buffer = filled(4, &[1, 2, 3]);
        assert_eq!(buffer.shift_consume(), Ok(1));
        assert_eq!(buffer.pop_consume(), Ok(3));
        buffer.push(5, WriteMode::Reject).unwrap();
        buffer.push(6, WriteMode::Reject).unwrap();
        buffer.push(7, WriteMode::Reject).unwrap();
        assert!(buffer.is_full());
        assert_eq!(buffer.spy(), Ok(2));
        assert_eq!(buffer.peek(), Ok(7));
    }

    #[test]
    fn test_clear_buffer_takes_precedence() {
        let mut buffer = filled(4, &[1, 2, 3]);
        let mode = ReadMode::from_flags(true, true);

        assert_eq!(buffer.pop(mode), Ok(3));
        assert!(buffer.is_empty());
        assert_eq!(buffer.peek(), Err(RingError::Empty));

        let mut buffer = filled(4, &[1, 2, 3]);
        assert_eq!(buffer.drain_oldest(), Ok(1));
        assert_eq!(buffer.state(), BufferState::Empty);
    }

    #[test]
    fn test_keep_mode_does_not_mutate() {
        let mut buffer = filled(4, &[7, 8]);
        assert_eq!(buffer.pop(ReadMode::Keep), Ok(8));
        assert_eq!(buffer.shift(ReadMode::Keep), Ok(7));
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn test_empty_reads_fail() {
        let mut buffer: RingBuffer<i32> = RingBuffer::new(2).unwrap();
        assert_eq!(buffer.peek(), Err(RingError::Empty));
        assert_eq!(buffer.spy(), Err(RingError::Empty));
        assert_eq!(buffer.pop(ReadMode::ClearValue), Err(RingError::Empty));
        assert_eq!(buffer.shift(ReadMode::ClearBuffer), Err(RingError::Empty));
        assert_eq!(buffer.len(), 0);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut buffer = filled(3, &[1, 2, 3]);

        buffer.clear();
        assert!(buffer.is_empty());
        assert!(buffer.slots.iter().all(|&v| v == 0));

        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.cursor.indices(), (0, 0));
        assert_eq!(buffer.spy(), Err(RingError::Empty));
    }

    #[test]
    fn test_single_slot_buffer() {
        let mut buffer = RingBuffer::new(1).unwrap();
        buffer.push(10, WriteMode::Reject).unwrap();
        assert_eq!(buffer.peek(), Ok(10));
        assert_eq!(buffer.spy(), Ok(10));
        assert_eq!(buffer.push(11, WriteMode::Reject), Err(RingError::BufferFull));

        assert_eq!(buffer.shift(ReadMode::ClearValue), Ok(10));
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.peek(), Err(RingError::Empty));

        buffer.push(12, WriteMode::Reject).unwrap();
        buffer.push(13, WriteMode::Overwrite).unwrap();
        assert_eq!(buffer.pop_consume(), Ok(13));
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_push_default_uses_configured_mode() {
        let mut queue: RingBuffer<u8> = RingBuffer::with_config(&RingConfig::queue(1, 2)).unwrap();
        queue.push_default(1).unwrap();
        queue.push_default(2).unwrap();
        assert_eq!(queue.push_default(3), Err(RingError::BufferFull));

        let mut history: RingBuffer<u8> =
            RingBuffer::with_config(&RingConfig::history(1, 2)).unwrap();
        for i in 1..=3 {
            history.push_default(i).unwrap();
        }
        assert_eq!(history.spy(), Ok(2));
    }

    #[test]
    fn test_wraparound_keeps_last_n() {
        let capacity = 4;
        let mut buffer = RingBuffer::new(capacity).unwrap();
        for i in 0..(2 * capacity as i32) {
            buffer.push_overwrite(i);
        }

        let kept: Vec<_> = std::iter::from_fn(|| buffer.shift_consume().ok()).collect();
        assert_eq!(kept, vec![4, 5, 6, 7]);
    }

    #[test]
    fn test_owned_elements() {
        let mut buffer: RingBuffer<String> = RingBuffer::new(2).unwrap();
        buffer.push("a".to_string(), WriteMode::Reject).unwrap();
        buffer.push("b".to_string(), WriteMode::Reject).unwrap();
        buffer.push_overwrite("c".to_string());

        assert_eq!(buffer.spy().as_deref(), Ok("b"));
        assert_eq!(buffer.pop_consume().as_deref(), Ok("c"));
    }
}
