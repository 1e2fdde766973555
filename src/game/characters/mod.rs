// Character system
//
// This module contains everything related to the playable actor:
// - Actor movement and axis-separated platform collision
// - Tuning values
// - Movement state classification
// - Clip playback and sprite sheet presets

pub mod animation;
pub mod character;
pub mod state;
pub mod stats;

// Re-export commonly used types
pub use animation::{AnimationPlayer, ClipRoles, SheetPreset, CHARACTERS_SHEET, HERO_SHEET};
pub use character::{Actor, RenderFrame};
pub use state::MovementState;
pub use stats::{ActorStats, BASE_STATS};
