//! # Byte Ring
//!
//! A ring of opaque fixed-size byte blocks.
//!
//! ## Plain English
//!
//! Same parking track as `RingBuffer`, but every car is just `element_size`
//! raw bytes. Useful when the element type isn't known at compile time,
//! e.g. sample frames whose width is read from a device at startup.
//!
//! Every slice you hand in or out must be exactly `element_size` long.
//! A wrong-sized slice is rejected before anything changes.

use crate::buffer::cursor::Cursor;
use crate::buffer::{BufferState, ReadMode, WriteMode};
use crate::config::RingConfig;
use crate::error::{RingError, RingResult};

/// A fixed-capacity ring of `element_size`-byte blocks
#[derive(Debug)]
pub struct ByteRing {
    /// `capacity * element_size` bytes, slot `i` at `i * element_size`
    data: Box<[u8]>,

    element_size: usize,

    cursor: Cursor,

    /// Policy used by `push_default`
    write_mode: WriteMode,
}

impl ByteRing {
    /// Creates a zero-filled ring of `capacity` blocks of `element_size` bytes.
    ///
    /// ## Errors
    /// - `InvalidArgument` for zero capacity or zero element size
    /// - `AllocationError` if the storage can't be reserved (including a
    ///   byte count that overflows `usize`)
    pub fn new(element_size: usize, capacity: usize) -> RingResult<Self> {
        if capacity == 0 {
            return Err(RingError::InvalidArgument("capacity must be at least 1"));
        }
        if element_size == 0 {
            return Err(RingError::InvalidArgument(
                "element size must be at least 1 byte",
            ));
        }

        let bytes = element_size
            .checked_mul(capacity)
            .ok_or(RingError::AllocationError { bytes: usize::MAX })?;

        let mut data = Vec::new();
        data.try_reserve_exact(bytes)
            .map_err(|_| RingError::AllocationError { bytes })?;
        data.resize(bytes, 0u8);

        log::debug!(
            "Creating byte ring: {} slots of {} bytes ({} bytes total)",
            capacity,
            element_size,
            bytes
        );

        Ok(Self {
            data: data.into_boxed_slice(),
            element_size,
            cursor: Cursor::new(capacity),
            write_mode: WriteMode::Reject,
        })
    }

    /// Creates a byte ring from a validated configuration.
    pub fn with_config(config: &RingConfig) -> RingResult<Self> {
        config.check()?;

        let mut ring = Self::new(config.element_size, config.capacity)?;
        ring.write_mode = config.write_mode;
        Ok(ring)
    }

    /// Copies `value` in as the newest element.
    pub fn push(&mut self, value: &[u8], mode: WriteMode) -> RingResult<()> {
        self.check_len(value.len())?;

        let slot = self.cursor.plan_write(mode)?;
        self.slot_mut(slot.index).copy_from_slice(value);
        self.cursor.commit_write(slot);
        Ok(())
    }

    /// Copies `value` in, dropping the oldest element if the ring is full.
    pub fn push_overwrite(&mut self, value: &[u8]) -> RingResult<()> {
        self.push(value, WriteMode::Overwrite)
    }

    /// Copies `value` in using the configured write mode.
    pub fn push_default(&mut self, value: &[u8]) -> RingResult<()> {
        self.push(value, self.write_mode)
    }

    /// Copies the newest element into `out`, then applies `mode`.
    pub fn pop_into(&mut self, out: &mut [u8], mode: ReadMode) -> RingResult<()> {
        self.check_len(out.len())?;

        let index = self.cursor.newest()?;
        out.copy_from_slice(self.slot(index));

        match mode {
            ReadMode::Keep => {}
            ReadMode::ClearValue => self.cursor.drop_newest(),
            ReadMode::ClearBuffer => self.clear(),
        }
        Ok(())
    }

    /// Copies the oldest element into `out`, then applies `mode`.
    pub fn shift_into(&mut self, out: &mut [u8], mode: ReadMode) -> RingResult<()> {
        self.check_len(out.len())?;

        let index = self.cursor.oldest()?;
        out.copy_from_slice(self.slot(index));

        match mode {
            ReadMode::Keep => {}
            ReadMode::ClearValue => self.cursor.drop_oldest(),
            ReadMode::ClearBuffer => self.clear(),
        }
        Ok(())
    }

    /// Returns a copy of the newest element, then applies `mode`.
    pub fn pop(&mut self, mode: ReadMode) -> RingResult<Vec<u8>> {
        let mut out = vec![0u8; self.element_size];
        self.pop_into(&mut out, mode)?;
        Ok(out)
    }

    /// Returns a copy of the oldest element, then applies `mode`.
    pub fn shift(&mut self, mode: ReadMode) -> RingResult<Vec<u8>> {
        let mut out = vec![0u8; self.element_size];
        self.shift_into(&mut out, mode)?;
        Ok(out)
    }

    /// Copies the newest element into `out` without removing it.
    pub fn peek_into(&self, out: &mut [u8]) -> RingResult<()> {
        self.check_len(out.len())?;
        out.copy_from_slice(self.slot(self.cursor.newest()?));
        Ok(())
    }

    /// Copies the oldest element into `out` without removing it.
    pub fn spy_into(&self, out: &mut [u8]) -> RingResult<()> {
        self.check_len(out.len())?;
        out.copy_from_slice(self.slot(self.cursor.oldest()?));
        Ok(())
    }

    /// Returns a copy of the newest element without removing it.
    pub fn peek(&self) -> RingResult<Vec<u8>> {
        Ok(self.slot(self.cursor.newest()?).to_vec())
    }

    /// Returns a copy of the oldest element without removing it.
    pub fn spy(&self) -> RingResult<Vec<u8>> {
        Ok(self.slot(self.cursor.oldest()?).to_vec())
    }

    /// Zero-fills the storage and empties the ring.
    pub fn clear(&mut self) {
        self.data.fill(0);
        self.cursor.reset();
        log::trace!("Cleared byte ring of {} bytes", self.data.len());
    }

    pub fn len(&self) -> usize {
        self.cursor.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cursor.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.cursor.state() == BufferState::Full
    }

    pub fn capacity(&self) -> usize {
        self.cursor.capacity()
    }

    pub fn element_size(&self) -> usize {
        self.element_size
    }

    pub fn state(&self) -> BufferState {
        self.cursor.state()
    }

    pub fn write_mode(&self) -> WriteMode {
        self.write_mode
    }

    fn check_len(&self, actual: usize) -> RingResult<()> {
        if actual != self.element_size {
            return Err(RingError::ElementSize {
                expected: self.element_size,
                actual,
            });
        }
        Ok(())
    }

    fn slot(&self, index: usize) -> &[u8] {
        let start = index * self.element_size;
        &self.data[start..start + self.element_size]
    }

    fn slot_mut(&mut self, index: usize) -> &mut [u8] {
        let start = index * self.element_size;
        &mut self.data[start..start + self.element_size]
    }
}

// ============================================
// TESTS
// ============================================
