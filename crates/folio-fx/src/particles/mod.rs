//! Particle background: a fixed set of drifting dots with pointer repulsion
//! and proximity links.

mod field;
mod links;
mod particle;


pub use field::ParticleField;
pub use links::{LinkStyle, Repulsion};
pub use particle::{wrap_axis, Particle, SpawnParams};
