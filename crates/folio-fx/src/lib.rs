//! Host-agnostic visual effects for the portfolio page.
//!
//! Everything here runs on the host's frame callbacks: the particle
//! background, the glow orbs, the two-layer cursor and the scroll-driven
//! tweens. Rendering goes through the [`Surface`] and [`OrbStage`] traits so
//! the kinematics run headlessly in tests and in the `folio` driver.

pub mod cursor;
pub mod detail;
pub mod frame;
pub mod layers;
pub mod orbs;
pub mod particles;
pub mod perf;
pub mod pointer;
pub mod scene;
pub mod scroll;
pub mod surface;
pub mod tween;

pub use cursor::{Cursor, MagneticButtons};
pub use detail::{ImagePreview, Project, ProjectNavigator};
pub use frame::{
    Animation, AnimationLoop, FrameInput, FrameQueue, FrameScheduler, LoopId, LoopStatus, StopToken,
};
pub use orbs::{OrbFollower, OrbStage};
pub use particles::{Particle, ParticleField};
pub use perf::FrameTimer;
pub use pointer::PointerState;
pub use scene::Scene;
pub use scroll::ScrollEffects;
pub use surface::{Fill, RecordingSurface, Stroke, Surface};
pub use tween::{Ease, Tween};
