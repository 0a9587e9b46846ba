//! Throughput-based chunk sizing.
//!
//! A download copies its stream chunk by chunk. Every time more than
//! [`SAMPLE_INTERVAL`] has passed since the last measurement, the chunk size
//! is recomputed from the bytes copied during that window so that roughly
//! `chunks_per_second` chunks are copied per second.

use std::time::{Duration, Instant};

/// Minimum time between two throughput measurements.
pub const SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

/// Lower bound for the chunk size. A zero-sized chunk would never advance.
pub const MIN_CHUNK_SIZE: u64 = 1;

/// Adaptive chunk size state owned by a single download task.
#[derive(Debug, Clone)]
pub struct ChunkPacer {
    chunk_len: u64,
    chunks_per_second: u64,
    copied_since_sample: u64,
    sampled_at: Instant,
}

impl ChunkPacer {
    /// Starts pacing now with the given initial chunk size.
    pub fn new(initial_chunk_size: u64, chunks_per_second: u64) -> Self {
        Self::starting_at(initial_chunk_size, chunks_per_second, Instant::now())
    }

    /// Starts pacing with the first measurement window opened at `now`.
    pub fn starting_at(initial_chunk_size: u64, chunks_per_second: u64, now: Instant) -> Self {
        Self {
            chunk_len: initial_chunk_size.max(MIN_CHUNK_SIZE),
            chunks_per_second: chunks_per_second.max(1),
            copied_since_sample: 0,
            sampled_at: now,
        }
    }

    /// Number of bytes to copy in the next chunk.
    pub fn chunk_len(&self) -> u64 {
        self.chunk_len
    }

    /// Records `copied` bytes and resizes the chunk if the window is over.
    ///
    /// Returns the new chunk size when a measurement was taken.
    pub fn record(&mut self, copied: u64) -> Option<u64> {
        self.record_at(copied, Instant::now())
    }

    /// Same as [`ChunkPacer::record`] with an explicit clock reading.
    pub fn record_at(&mut self, copied: u64, now: Instant) -> Option<u64> {
        self.copied_since_sample += copied;

        let elapsed = now.saturating_duration_since(self.sampled_at);
        if elapsed <= SAMPLE_INTERVAL {
            return None;
        }

        let per_second = (self.copied_since_sample as f64 / elapsed.as_secs_f64()) as u64;
        self.chunk_len = (per_second / self.chunks_per_second).max(MIN_CHUNK_SIZE);
        self.copied_since_sample = 0;
        self.sampled_at = now;
        Some(self.chunk_len)
    }
}
