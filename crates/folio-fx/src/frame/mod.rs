//! Self-rescheduling per-frame loops.
//!
//! An [`AnimationLoop`] runs one tick of its [`Animation`] and then asks the
//! host's [`FrameScheduler`] for the next frame, the same way a browser
//! `requestAnimationFrame` callback re-registers itself. Loops are cancelled
//! through a shared [`StopToken`].

mod queue;

pub use queue::FrameQueue;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, trace};

use crate::pointer::PointerState;

/// Identifies one of the scene's independent loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopId {
    Particles,
    Orbs,
    Tweens,
}

impl LoopId {
    pub const ALL: [LoopId; 3] = [LoopId::Particles, LoopId::Orbs, LoopId::Tweens];

    pub fn as_str(self) -> &'static str {
        match self {
            LoopId::Particles => "particles",
            LoopId::Orbs => "orbs",
            LoopId::Tweens => "tweens",
        }
    }
}

/// Cancellation flag shared between a loop and whoever may stop it.
#[derive(Debug, Clone, Default)]
pub struct StopToken(Arc<AtomicBool>);

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Host hook that invokes a loop again on the next display frame.
pub trait FrameScheduler {
    fn request_frame(&mut self, id: LoopId);
}

/// Per-tick input shared by every loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Seconds since the previous frame.
    pub dt: f32,
    pub pointer: PointerState,
}

/// Work done once per frame.
pub trait Animation {
    fn tick(&mut self, input: &FrameInput);
}

/// Outcome of one [`AnimationLoop::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopStatus {
    /// The tick ran and the next frame was requested.
    Scheduled,
    /// The loop was cancelled; nothing ran and nothing was requested.
    Stopped,
}

pub struct AnimationLoop<A> {
    id: LoopId,
    animation: A,
    stop: StopToken,
    frames: u64,
}

impl<A: Animation> AnimationLoop<A> {
    pub fn new(id: LoopId, animation: A, stop: StopToken) -> Self {
        Self {
            id,
            animation,
            stop,
            frames: 0,
        }
    }

    /// Request the first frame.
    pub fn start(&self, scheduler: &mut dyn FrameScheduler) -> LoopStatus {
        if self.stop.is_stopped() {
            return LoopStatus::Stopped;
        }
        debug!(target: "folio::frame", id = self.id.as_str(), "loop started");
        scheduler.request_frame(self.id);
        LoopStatus::Scheduled
    }

    /// Frame callback: tick once, then reschedule.
    pub fn run(&mut self, input: &FrameInput, scheduler: &mut dyn FrameScheduler) -> LoopStatus {
        if self.stop.is_stopped() {
            debug!(target: "folio::frame", id = self.id.as_str(), frames = self.frames, "loop stopped");
            return LoopStatus::Stopped;
        }
        self.animation.tick(input);
        self.frames += 1;
        trace!(target: "folio::frame", id = self.id.as_str(), frame = self.frames, "tick");
        scheduler.request_frame(self.id);
        LoopStatus::Scheduled
    }

    pub fn id(&self) -> LoopId {
        self.id
    }

    pub fn animation(&self) -> &A {
        &self.animation
    }

    pub fn animation_mut(&mut self) -> &mut A {
        &mut self.animation
    }

    /// Ticks run so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn stop_token(&self) -> &StopToken {
        &self.stop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        ticks: u32,
        last_dt: f32,
    }

    impl Animation for Counter {
        fn tick(&mut self, input: &FrameInput) {
            self.ticks += 1;
            self.last_dt = input.dt;
        }
    }

    #[test]
    fn run_ticks_then_reschedules() {
        let mut queue = FrameQueue::new();
        let mut lp = AnimationLoop::new(LoopId::Orbs, Counter::default(), StopToken::new());

        assert_eq!(lp.start(&mut queue), LoopStatus::Scheduled);
        assert_eq!(queue.take_due(), vec![LoopId::Orbs]);

        let input = FrameInput {
            dt: 0.016,
            ..Default::default()
        };
        assert_eq!(lp.run(&input, &mut queue), LoopStatus::Scheduled);
        assert_eq!(lp.animation().ticks, 1);
        assert!((lp.animation().last_dt - 0.016).abs() < 1e-6);
        assert_eq!(queue.take_due(), vec![LoopId::Orbs]);
        assert_eq!(lp.frames(), 1);
    }

    #[test]
    fn stopped_loop_neither_ticks_nor_reschedules() {
        let stop = StopToken::new();
        let mut queue = FrameQueue::new();
        let mut lp = AnimationLoop::new(LoopId::Particles, Counter::default(), stop.clone());

        lp.run(&FrameInput::default(), &mut queue);
        queue.take_due();

        stop.stop();
        assert_eq!(lp.run(&FrameInput::default(), &mut queue), LoopStatus::Stopped);
        assert_eq!(lp.animation().ticks, 1);
        assert!(queue.is_empty());
        assert_eq!(lp.start(&mut queue), LoopStatus::Stopped);
    }

    #[test]
    fn stop_token_is_shared_across_clones() {
        let a = StopToken::new();
        let b = a.clone();
        assert!(!b.is_stopped());
        a.stop();
        assert!(b.is_stopped());
    }

    #[test]
    fn loop_id_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&LoopId::Particles).unwrap(), "\"particles\"");
    }
}
