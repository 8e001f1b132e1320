//! # Read & Write Modes
//!
//! Named policies for what a push does to a full buffer and what a read
//! does to the buffer afterwards.

/// What `push` does when the next slot still holds the oldest element
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WriteMode {
    /// Refuse the push with `RingError::BufferFull`
    #[default]
    Reject,

    /// Drop the oldest element to make room
    Overwrite,
}

impl WriteMode {
    /// Maps an "overwrite allowed" flag onto a mode
    pub fn from_overwrite(overwrite: bool) -> Self {
        if overwrite {
            Self::Overwrite
        } else {
            Self::Reject
        }
    }
}

/// What `pop`/`shift` do to the buffer after copying the element out
///
/// ## Plain English
///
/// - `Keep`: just look (this is `peek`/`spy`)
/// - `ClearValue`: take the element out
/// - `ClearBuffer`: take the element, then empty the whole buffer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ReadMode {
    #[default]
    Keep,
    ClearValue,
    ClearBuffer,
}

impl ReadMode {
    /// Maps the two independent clear flags onto a mode.
    ///
    /// `clear_buffer` wins when both are set.
    pub fn from_flags(clear_value: bool, clear_buffer: bool) -> Self {
        match (clear_value, clear_buffer) {
            (_, true) => Self::ClearBuffer,
            (true, false) => Self::ClearValue,
            (false, false) => Self::Keep,
        }
    }

    /// True if reading in this mode changes the buffer
    pub fn mutates(self) -> bool {
        !matches!(self, Self::Keep)
    }
}

/// Fill level of a ring buffer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BufferState {
    /// No elements
    Empty,
    /// Some elements, room for more
    Partial,
    /// Every slot occupied
    Full,
}
