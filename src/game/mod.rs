// Game modules: the actor, particle effects, level geometry and demo scenes

pub mod characters;
pub mod particles;
pub mod scene;
pub mod world;

pub use scene::{Scene, SceneKind, SceneOptions};
