//! Bounded FIFO buffer of location samples
//!
//! Insertion-ordered, oldest first, with strict capacity enforcement on
//! push. Backed by a `VecDeque` so push and eviction are O(1) amortized.

use crate::core::types::LocationSample;
use std::collections::VecDeque;

/// Bounded, insertion-ordered collection of location samples.
///
/// Capacity is fixed at construction; only a fresh `configure` on the
/// session allocates a new buffer with a different capacity.
#[derive(Debug)]
pub struct SampleBuffer {
    samples: VecDeque<LocationSample>,
    capacity: usize,
}

impl SampleBuffer {
    /// Create an empty buffer holding at most `capacity` samples.
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, evicting from the oldest end first while at or over
    /// capacity. The loop also reconverges a buffer left over capacity by
    /// `replace`. Never blocks, never fails.
    pub fn push(&mut self, sample: LocationSample) {
        while self.samples.len() >= self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    /// Bulk-load persisted samples, oldest first.
    ///
    /// Capacity is not enforced here: a caller that shrank the configured
    /// buffer size between sessions may exceed capacity until the next push
    /// evicts back down.
    pub fn replace(&mut self, samples: Vec<LocationSample>) {
        self.samples = VecDeque::from(samples);
    }

    /// Up to `n` most recent samples, newest first.
    pub fn snapshot(&self, n: usize) -> Vec<LocationSample> {
        self.samples.iter().rev().take(n).cloned().collect()
    }

    /// Full contents, oldest first, for persistence.
    pub fn to_vec(&self) -> Vec<LocationSample> {
        self.samples.iter().cloned().collect()
    }

    /// Most recent sample, if any.
    pub fn newest(&self) -> Option<&LocationSample> {
        self.samples.back()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
