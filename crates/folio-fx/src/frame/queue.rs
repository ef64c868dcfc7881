use std::collections::VecDeque;

use super::{FrameScheduler, LoopId};

/// In-process scheduler: collects frame requests until the driver drains them.
///
/// A loop that requests twice before the next drain is queued once, matching
/// one callback per display frame.
#[derive(Debug, Default)]
pub struct FrameQueue {
    pending: VecDeque<LoopId>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the loops due on the next frame, in request order.
    pub fn take_due(&mut self) -> Vec<LoopId> {
        self.pending.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self, id: LoopId) {
        if !self.pending.contains(&id) {
            self.pending.push_back(id);
        }
    }
}
