//! # fixed-ring Demo
//!
//! Walks through the two common uses of a ring buffer:
//! a bounded producer/consumer queue and a sliding window of history.
//!
//! Run with: `cargo run --example demo`

use anyhow::{bail, Context, Result};
use log::info;

use fixed_ring::{ByteRing, ReadMode, RingBuffer, RingConfig, RingError, WriteMode};

fn main() -> Result<()> {
    // Initialize logging so we can see what's happening
    fixed_ring::init_logging();

    queue_demo()?;
    history_demo()?;
    byte_ring_demo()?;

    Ok(())
}

/// A queue refuses work once it's full; the consumer drains oldest first.
fn queue_demo() -> Result<()> {
    let mut queue: RingBuffer<u32> =
        RingBuffer::with_config(&RingConfig::of::<u32>(4)).context("creating job queue")?;

    let mut rejected = 0;
    for job in 1..=6 {
        match queue.push_default(job) {
            Ok(()) => info!("Queued job {}", job),
            Err(RingError::BufferFull) => {
                rejected += 1;
                info!("Queue full, job {} rejected", job);
            }
            Err(e) => return Err(e.into()),
        }
    }

    while let Ok(job) = queue.shift_consume() {
        info!("Processing job {}", job);
    }

    println!("queue: processed 4 jobs, rejected {}", rejected);
    Ok(())
}

/// A history window keeps only the newest readings.
fn history_demo() -> Result<()> {
    let mut window: RingBuffer<f32> =
        RingBuffer::with_config(&RingConfig::history(std::mem::size_of::<f32>(), 5))?;

    for i in 0..12 {
        window.push_default(20.0 + i as f32 * 0.5)?;
    }

    let latest = window.peek()?;
    let oldest = window.spy()?;
    println!(
        "history: {} readings kept, oldest {:.1}, latest {:.1}",
        window.len(),
        oldest,
        latest
    );

    // Take the latest reading and start a fresh window
    let last = window.pop(ReadMode::ClearBuffer)?;
    if !window.is_empty() {
        bail!("window should be empty after ClearBuffer");
    }
    println!("history: reset after reading {:.1}", last);
    Ok(())
}

/// A byte ring stores frames whose size is only known at runtime.
fn byte_ring_demo() -> Result<()> {
    let frame_size = 6;
    let mut frames = ByteRing::new(frame_size, 3)?;

    for id in 0..5u8 {
        frames.push(&[id; 6], WriteMode::Overwrite)?;
    }

    let mut frame = vec![0u8; frame_size];
    frames.spy_into(&mut frame)?;
    println!(
        "bytes: {} frames buffered, oldest frame id {}",
        frames.len(),
        frame[0]
    );
    Ok(())
}
