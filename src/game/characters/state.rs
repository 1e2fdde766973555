// Movement state derived from the actor's velocity

use super::animation::ClipRoles;

/// Represents the current movement state of the actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MovementState {
    /// Standing still on ground
    #[default]
    Idle,
    /// Moving horizontally on ground at any speed other than run speed
    Walking,
    /// Moving horizontally on ground at exactly run speed
    Running,
    /// Any vertical motion (rising or falling)
    Jumping,
}

impl MovementState {
    /// Classify a velocity.
    ///
    /// Vertical motion wins over horizontal: any non-zero `vy` is a jump.
    pub fn from_velocity(vx: f32, vy: f32, run_speed: f32) -> Self {
        if vy != 0.0 {
            Self::Jumping
        } else if vx == 0.0 {
            Self::Idle
        } else if vx.abs() == run_speed {
            Self::Running
        } else {
            Self::Walking
        }
    }

    /// Check if the actor is on the ground
    pub fn is_grounded(&self) -> bool {
        !matches!(self, Self::Jumping)
    }

    /// Get the clip name that plays for this state
    pub fn clip_name(&self, roles: &ClipRoles) -> &'static str {
        match self {
            Self::Idle => roles.idle,
            Self::Walking => roles.walk,
            Self::Running => roles.run,
            Self::Jumping => roles.jump,
        }
    }
}
