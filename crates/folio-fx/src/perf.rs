//! Rolling frame timing.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Rolling window of frame durations.
///
/// Durations come either from wall-clock [`begin_frame`](Self::begin_frame)
/// calls or are pushed directly with [`record`](Self::record) when a driver
/// steps simulated time.
#[derive(Debug, Clone)]
pub struct FrameTimer {
    samples: VecDeque<Duration>,
    last_frame: Option<Instant>,
    capacity: usize,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::with_capacity(120)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            last_frame: None,
            capacity,
        }
    }

    /// Mark a frame boundary. The first call only starts the clock.
    pub fn begin_frame(&mut self) {
        let now = Instant::now();
        if let Some(last) = self.last_frame.replace(now) {
            self.record(now - last);
        }
    }

    pub fn record(&mut self, frame: Duration) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(frame);
    }

    fn total_secs(&self) -> f64 {
        self.samples.iter().map(Duration::as_secs_f64).sum()
    }

    /// Average frames per second over the window.
    pub fn fps(&self) -> f64 {
        let total = self.total_secs();
        if total <= 0.0 {
            return 0.0;
        }
        self.samples.len() as f64 / total
    }

    /// Average frame time in milliseconds.
    pub fn frame_time_ms(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.total_secs() / self.samples.len() as f64 * 1000.0
    }

    /// Slowest frame in the window, in milliseconds.
    pub fn worst_frame_ms(&self) -> f64 {
        self.samples
            .iter()
            .max()
            .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}
