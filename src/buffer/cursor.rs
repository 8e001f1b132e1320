//! # Ring Cursor
//!
//! The head/tail/count bookkeeping shared by every ring flavour.
//!
//! ## Plain English
//!
//! Picture a circular track with numbered parking spots. The cursor doesn't
//! know what's parked anywhere; it only remembers which spot holds the newest
//! car (`head`), which holds the oldest (`tail`), and how many are parked.
//! Storage types ask it "where do I write?" and "where do I read?".

use crate::buffer::{BufferState, WriteMode};
use crate::error::{RingError, RingResult};

/// Where the next push lands, decided before any storage is touched
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct WriteSlot {
    /// Slot index to write
    pub index: usize,
    /// Writing here drops the oldest element
    pub overwrite: bool,
}

/// Circular index state
///
/// Occupied slots are `[tail, head]` walking forward mod `capacity`.
/// When `count == 0`, `head == tail == 0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Cursor {
    capacity: usize,
    count: usize,
    head: usize,
    tail: usize,
}

impl Cursor {
    /// Empty cursor over `capacity` slots. `capacity` must be non-zero.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0);
        Self {
            capacity,
            count: 0,
            head: 0,
            tail: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn state(&self) -> BufferState {
        match self.count {
            0 => BufferState::Empty,
            n if n == self.capacity => BufferState::Full,
            _ => BufferState::Partial,
        }
    }

    /// Picks the slot for the next push.
    ///
    /// The first element of an empty ring goes to slot 0 so head and tail
    /// coincide. Otherwise the slot after `head`; if that is `tail` the ring
    /// is full and `mode` decides.
    pub fn plan_write(&self, mode: WriteMode) -> RingResult<WriteSlot> {
        if self.count == 0 {
            return Ok(WriteSlot {
                index: 0,
                overwrite: false,
            });
        }

        let index = self.advance(self.head);
        let overwrite = index == self.tail;
        if overwrite && mode == WriteMode::Reject {
            return Err(RingError::BufferFull);
        }

        Ok(WriteSlot { index, overwrite })
    }

    /// Records a push planned by `plan_write` once the slot holds the value
    pub fn commit_write(&mut self, slot: WriteSlot) {
        self.head = slot.index;
        if slot.overwrite {
            log::trace!("Ring full, dropped oldest element at slot {}", self.tail);
            self.tail = self.advance(self.tail);
        } else {
            self.count += 1;
        }
    }

    /// Slot holding the newest element
    pub fn newest(&self) -> RingResult<usize> {
        if self.count == 0 {
            return Err(RingError::Empty);
        }
        Ok(self.head)
    }

    /// Slot holding the oldest element
    pub fn oldest(&self) -> RingResult<usize> {
        if self.count == 0 {
            return Err(RingError::Empty);
        }
        Ok(self.tail)
    }

    /// Forgets the newest element. Caller has checked the ring isn't empty.
    pub fn drop_newest(&mut self) {
        self.head = if self.head == 0 {
            self.capacity - 1
        } else {
            self.head - 1
        };
        self.release_one();
    }

    /// Forgets the oldest element. Caller has checked the ring isn't empty.
    pub fn drop_oldest(&mut self) {
        self.tail = self.advance(self.tail);
        self.release_one();
    }

    /// Back to the canonical empty state
    pub fn reset(&mut self) {
        self.count = 0;
        self.head = 0;
        self.tail = 0;
    }

    fn release_one(&mut self) {
        self.count -= 1;
        if self.count == 0 {
            self.reset();
        }
    }

    fn advance(&self, index: usize) -> usize {
        if index + 1 >= self.capacity {
            0
        } else {
            index + 1
        }
    }

    #[cfg(test)]
    pub fn indices(&self) -> (usize, usize) {
        (self.head, self.tail)
    }
}

// ============================================
// TESTS
// ============================================
