// Actor tuning values
//
// Velocities are in pixels per tick, the simulation runs at a fixed 60 ticks per second.

/// Physics and animation tuning for the actor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActorStats {
    // Movement
    /// Horizontal speed without the run modifier
    pub walk_speed: f32,
    /// Horizontal speed with the run modifier held
    pub run_speed: f32,
    /// Vertical velocity applied when a jump starts (negative is up)
    pub jump_power: f32,

    // Physics
    /// Added to vertical velocity every tick
    pub gravity: f32,

    // Dimensions
    /// Collision box width in pixels
    pub width: f32,
    /// Collision box height in pixels
    pub height: f32,

    // Animation
    /// Ticks each animation frame stays on screen
    pub frame_ticks: u32,
}

/// Stats used by every demo scene
pub const BASE_STATS: ActorStats = ActorStats {
    walk_speed: 2.0,
    run_speed: 4.0,
    jump_power: -10.0,

    gravity: 0.4,

    // Matches the 32px sprite sheet tiles
    width: 32.0,
    height: 32.0,

    frame_ticks: 8,
};

impl Default for ActorStats {
    fn default() -> Self {
        BASE_STATS
    }
}

impl ActorStats {
    /// Horizontal speed for the current run modifier state
    pub fn speed(&self, running: bool) -> f32 {
        if running {
            self.run_speed
        } else {
            self.walk_speed
        }
    }
}
