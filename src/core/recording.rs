//! Caller-owned accumulator for samples delivered by a tracker callback.

use crate::models::RawSample;

/// Bounded buffer for tracker callbacks.
///
/// The recording scope owns it and lends a [`SampleBuffer::recorder`] closure
/// to the tracker subscription; once the subscription ends the buffer is
/// drained in one go. Samples beyond `capacity` are counted and dropped.
#[derive(Debug)]
pub struct SampleBuffer {
    capacity: usize,
    samples: Vec<RawSample>,
    dropped: usize,
}

impl SampleBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            samples: Vec::with_capacity(capacity.min(1 << 16)),
            dropped: 0,
        }
    }

    /// Returns false when the buffer is full and the sample was dropped.
    pub fn push(&mut self, sample: RawSample) -> bool {
        if self.samples.len() >= self.capacity {
            self.dropped += 1;
            return false;
        }
        self.samples.push(sample);
        true
    }

    /// Callback handle to register with the tracker.
    pub fn recorder(&mut self) -> impl FnMut(RawSample) + '_ {
        move |sample| {
            self.push(sample);
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Hand over everything collected; the buffer is left empty.
    pub fn drain(&mut self) -> Vec<RawSample> {
        if self.dropped > 0 {
            log::warn!(
                "sample buffer full: {} sample(s) dropped after {}",
                self.dropped,
                self.capacity
            );
        }
        self.dropped = 0;
        std::mem::take(&mut self.samples)
    }
}
