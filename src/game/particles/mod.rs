// Particle effects: a pulsing source emitting short-lived circles

pub mod particle;
pub mod source;
pub mod system;

pub use particle::Particle;
pub use source::Source;
pub use system::{EmissionRanges, ParticleSystem};
