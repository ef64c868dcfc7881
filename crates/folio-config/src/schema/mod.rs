//! Configuration schema types for Folio.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod cursor;
mod orbs;
mod particles;
mod performance;
mod projects;
mod scroll;
mod system;

pub use cursor::*;
pub use orbs::*;
pub use particles::*;
pub use performance::*;
pub use projects::*;
pub use scroll::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Folio.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct FolioConfig {
    pub particles: ParticleConfig,
    pub orbs: OrbsConfig,
    pub cursor: CursorConfig,
    pub scroll: ScrollConfig,
    pub performance: PerformanceConfig,
    pub logging: LoggingConfig,
    pub projects: Vec<ProjectEntry>,
}

// =============================================================================
// Tests
// =============================================================================
