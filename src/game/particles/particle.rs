// A single short-lived particle

use glam::Vec2;

/// Velocity multiplier applied every tick
pub const DAMPING: f32 = 0.98;
/// Downward acceleration per tick
pub const GRAVITY: f32 = 0.1;
/// Size multiplier applied every tick
pub const SHRINK: f32 = 0.97;
/// Size never shrinks below this
pub const MIN_SIZE: f32 = 1.0;
/// Particles smaller than this are culled
pub const CULL_SIZE: f32 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Remaining ticks
    pub lifetime: i32,
    /// Circle radius in pixels
    pub size: f32,
    pub color: [u8; 3],
}

impl Particle {
    /// Integrate one tick. Returns false once the particle should be removed.
    pub fn advance(&mut self) -> bool {
        self.position += self.velocity;
        self.velocity *= DAMPING;
        self.velocity.y += GRAVITY;
        self.lifetime -= 1;
        self.size = (self.size * SHRINK).max(MIN_SIZE);

        self.is_alive()
    }

    pub fn is_alive(&self) -> bool {
        self.lifetime > 0 && self.size >= CULL_SIZE
    }
}
