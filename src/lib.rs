//! # fixed-ring
//!
//! A fixed-capacity circular buffer with push/pop at the newest end,
//! shift/spy at the oldest end, optional overwrite-on-full and
//! clear-on-read semantics.
//!
//! ## Architecture Overview
//!
//! - `buffer`: the ring buffers (`RingBuffer<T>`, `ByteRing`) and a
//!   mutex-wrapped `SharedRing`
//! - `config`: construction settings and presets
//! - `error`: error types
//!
//! ## Example
//!
//! ```
//! use fixed_ring::{ReadMode, RingBuffer, RingError, WriteMode};
//!
//! let mut ring = RingBuffer::new(3).unwrap();
//! for v in 1..=3 {
//!     ring.push(v, WriteMode::Reject).unwrap();
//! }
//! assert_eq!(ring.push(4, WriteMode::Reject), Err(RingError::BufferFull));
//!
//! ring.push(4, WriteMode::Overwrite).unwrap();
//! assert_eq!(ring.spy(), Ok(2));
//! assert_eq!(ring.peek(), Ok(4));
//! assert_eq!(ring.shift(ReadMode::ClearValue), Ok(2));
//! ```

// ============================================
// MODULE DECLARATIONS
// ============================================

pub mod buffer;
pub mod config;
pub mod error;

// ============================================
// RE-EXPORTS
// ============================================

pub use buffer::{BufferState, ByteRing, ReadMode, RingBuffer, SharedRing, WriteMode};
pub use config::{ConfigError, RingConfig};
pub use error::{RingError, RingResult};

// ============================================
// LOGGING
// ============================================

/// Initialize logging for the platform.
///
/// Safe to call more than once.
pub fn init_logging() {
    #[cfg(target_os = "android")]
    {
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(log::LevelFilter::Info)
                .with_tag("fixed-ring"),
        );
    }

    #[cfg(not(target_os = "android"))]
    {
        let _ = env_logger::builder()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .try_init();
    }
}

// ============================================
// TESTS
// ============================================
