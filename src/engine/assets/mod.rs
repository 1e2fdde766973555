// Asset management system
//
// Loads sprite sheets from disk and slices them into animation clips.
// Every failure here happens before the demo loop starts.

mod atlas;
mod loader;

pub use atlas::{AnimationClip, ClipLayout, FrameTable, SpriteSheet};
pub use loader::AssetLoader;

use std::path::PathBuf;

/// Asset loading errors
///
/// Loading is the only fallible step of the demos; all of these abort startup.
#[derive(Debug, thiserror::Error)]
pub enum AssetLoadError {
    #[error("sprite sheet not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("sprite sheet {sheet} holds {available} tiles, layout needs {required}")]
    SheetTooSmall {
        sheet: String,
        required: usize,
        available: usize,
    },

    #[error("sprite sheet {sheet} has no clip named '{clip}'")]
    MissingClip { sheet: String, clip: String },
}
