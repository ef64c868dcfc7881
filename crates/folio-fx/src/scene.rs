//! Top-level scene: owns every layer and routes host events to them.

use folio_common::{HostEvent, Point, Viewport};
use folio_config::FolioConfig;
use tracing::{debug, info, trace};

use crate::cursor::{Cursor, MagneticButtons};
use crate::detail::ProjectNavigator;
use crate::frame::{AnimationLoop, FrameInput, FrameScheduler, LoopId, LoopStatus, StopToken};
use crate::layers::{OrbLayer, ParticleLayer, TweenLayer};
use crate::orbs::{OrbFollower, OrbStage};
use crate::particles::ParticleField;
use crate::pointer::PointerState;
use crate::scroll::ScrollEffects;
use crate::surface::Surface;

/// The portfolio page's visual layer.
///
/// Host events go through [`handle`](Self::handle) between frames; frame
/// callbacks go through [`run_frame`](Self::run_frame).
pub struct Scene<S, T> {
    viewport: Viewport,
    pointer: PointerState,
    particles: AnimationLoop<ParticleLayer<S>>,
    orbs: AnimationLoop<OrbLayer<T>>,
    tweens: AnimationLoop<TweenLayer>,
    particles_enabled: bool,
    orbs_enabled: bool,
    navigator: ProjectNavigator,
    stop: StopToken,
}

impl<S: Surface, T: OrbStage> Scene<S, T> {
    pub fn new(config: &FolioConfig, viewport: Viewport, surface: Option<S>, stage: Option<T>) -> Self {
        let stop = StopToken::new();

        let field = ParticleField::from_config(&config.particles, viewport);
        let particles = AnimationLoop::new(
            LoopId::Particles,
            ParticleLayer::new(field, surface),
            stop.clone(),
        );

        let follower = OrbFollower::from_config(&config.orbs);
        let orbs = AnimationLoop::new(LoopId::Orbs, OrbLayer::new(follower, stage), stop.clone());

        let tween_layer = TweenLayer {
            cursor: config.cursor.enabled.then(|| Cursor::from_config(&config.cursor)),
            magnetic: MagneticButtons::new(config.cursor.magnetic_strength as f32),
            scroll: ScrollEffects::new(&config.scroll),
        };
        let tweens = AnimationLoop::new(LoopId::Tweens, tween_layer, stop.clone());

        info!(
            width = viewport.width,
            height = viewport.height,
            particles = config.particles.count,
            orbs = config.orbs.orbs.len(),
            projects = config.projects.len(),
            "scene created"
        );

        Self {
            viewport,
            pointer: PointerState::new(),
            particles,
            orbs,
            tweens,
            particles_enabled: config.particles.enabled,
            orbs_enabled: config.orbs.enabled,
            navigator: ProjectNavigator::from_config(&config.projects),
            stop,
        }
    }

    /// Size the surface to the viewport and request the first frame of each
    /// enabled loop.
    pub fn start(&mut self, scheduler: &mut dyn FrameScheduler) {
        self.particles.animation_mut().resize(self.viewport);
        if self.particles_enabled {
            self.particles.start(scheduler);
        }
        if self.orbs_enabled {
            self.orbs.start(scheduler);
        }
        self.tweens.start(scheduler);
    }

    /// Apply one host event.
    pub fn handle(&mut self, event: &HostEvent) {
        match *event {
            HostEvent::PointerMove { x, y } => {
                self.pointer.moved_to(x, y);
                let pointer = Point::new(x, y);
                self.orbs.animation_mut().follower_mut().set_target(pointer);
                if let Some(cursor) = self.tweens.animation_mut().cursor.as_mut() {
                    cursor.pointer_moved(pointer);
                }
                trace!(x, y, "pointer moved");
            }
            HostEvent::Resize { width, height } => self.resize(width, height),
            HostEvent::Scroll {
                scroll_y,
                document_height,
            } => {
                let viewport_height = self.viewport.height;
                self.tweens
                    .animation_mut()
                    .scroll
                    .on_scroll(scroll_y, document_height, viewport_height);
            }
            HostEvent::HoverEnter | HostEvent::HoverLeave => {
                let hovered = matches!(event, HostEvent::HoverEnter);
                if let Some(cursor) = self.tweens.animation_mut().cursor.as_mut() {
                    cursor.set_hovered(hovered);
                }
            }
            HostEvent::MagneticMove { button, bounds, x, y } => {
                self.tweens
                    .animation_mut()
                    .magnetic
                    .pointer_move(button, bounds, Point::new(x, y));
            }
            HostEvent::MagneticLeave { button } => {
                self.tweens.animation_mut().magnetic.leave(button);
            }
            HostEvent::Unknown => debug!("ignoring unknown host event"),
        }
    }

    fn resize(&mut self, width: f32, height: f32) {
        let viewport = Viewport::new(width, height);
        if viewport.width != width || viewport.height != height {
            debug!(width, height, "degenerate viewport clamped");
        }
        self.viewport = viewport;
        self.particles.animation_mut().resize(viewport);
    }

    /// Frame callback for loop `id`.
    pub fn run_frame(&mut self, id: LoopId, dt: f32, scheduler: &mut dyn FrameScheduler) -> LoopStatus {
        let input = FrameInput {
            dt,
            pointer: self.pointer,
        };
        match id {
            LoopId::Particles => self.particles.run(&input, scheduler),
            LoopId::Orbs => self.orbs.run(&input, scheduler),
            LoopId::Tweens => self.tweens.run(&input, scheduler),
        }
    }

    /// Cancel every loop. Pending frame callbacks become no-ops.
    pub fn stop(&mut self) {
        if !self.stop.is_stopped() {
            info!(
                particle_frames = self.particles.frames(),
                orb_frames = self.orbs.frames(),
                "scene stopped"
            );
        }
        self.stop.stop();
    }

    pub fn is_stopped(&self) -> bool {
        self.stop.is_stopped()
    }

    pub fn stop_token(&self) -> StopToken {
        self.stop.clone()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn particles(&self) -> &ParticleLayer<S> {
        self.particles.animation()
    }

    pub fn orbs(&self) -> &OrbLayer<T> {
        self.orbs.animation()
    }

    pub fn tweens(&self) -> &TweenLayer {
        self.tweens.animation()
    }

    /// Page layout (sections, skill bars, reveals) is registered through here.
    pub fn scroll_mut(&mut self) -> &mut ScrollEffects {
        &mut self.tweens.animation_mut().scroll
    }

    pub fn frames(&self, id: LoopId) -> u64 {
        match id {
            LoopId::Particles => self.particles.frames(),
            LoopId::Orbs => self.orbs.frames(),
            LoopId::Tweens => self.tweens.frames(),
        }
    }

    pub fn navigator(&self) -> &ProjectNavigator {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut ProjectNavigator {
        &mut self.navigator
    }
}
