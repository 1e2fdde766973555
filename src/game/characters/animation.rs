// Character animation system

use crate::engine::assets::{ClipLayout, FrameTable};

/// Clip names the actor plays for each movement state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipRoles {
    pub idle: &'static str,
    pub walk: &'static str,
    pub run: &'static str,
    pub jump: &'static str,
}

impl ClipRoles {
    /// All role clip names, idle first
    pub fn names(&self) -> [&'static str; 4] {
        [self.idle, self.walk, self.run, self.jump]
    }
}

/// A sprite sheet file together with the clip layout cut from it
#[derive(Debug, Clone, Copy)]
pub struct SheetPreset {
    /// Default file name of the sheet
    pub file: &'static str,
    /// Tile edge length in pixels
    pub tile_size: u32,
    /// Index of the first tile consumed
    pub start_tile: usize,
    /// (clip name, frame count) in sheet order
    pub clips: &'static [(&'static str, usize)],
    /// Which clips play for which movement state
    pub roles: ClipRoles,
}

impl SheetPreset {
    /// Build the slicing layout for this sheet
    pub fn layout(&self) -> ClipLayout {
        self.clips
            .iter()
            .fold(ClipLayout::new(self.start_tile), |layout, (name, count)| {
                layout.with_clip(name, *count)
            })
    }
}

/// Hero sheet: four clips packed from the first tile
pub const HERO_SHEET: SheetPreset = SheetPreset {
    file: "hero_spritesheet.png",
    tile_size: 32,
    start_tile: 0,
    clips: &[("stance", 4), ("run", 8), ("walk", 8), ("jump", 6)],
    roles: ClipRoles {
        idle: "stance",
        walk: "walk",
        run: "run",
        jump: "jump",
    },
};

/// Shared character sheet: the hero's clips start at tile 23 and there is no
/// stance clip, so the single punch frame stands in for idle
pub const CHARACTERS_SHEET: SheetPreset = SheetPreset {
    file: "characters.png",
    tile_size: 32,
    start_tile: 23,
    clips: &[
        ("walk", 4),
        ("jump", 4),
        ("hit", 2),
        ("slash", 3),
        ("punch", 1),
        ("run", 4),
        ("climb", 4),
        ("back", 1),
    ],
    roles: ClipRoles {
        idle: "punch",
        walk: "walk",
        run: "run",
        jump: "jump",
    },
};

/// Tick-driven playback state for one actor
#[derive(Debug, Clone)]
pub struct AnimationPlayer {
    /// Currently playing clip name
    current_animation: String,
    /// Current frame index
    current_frame: usize,
    /// Ticks spent on the current frame
    frame_timer: u32,
    /// Ticks per frame
    frame_ticks: u32,
}

impl AnimationPlayer {
    pub fn new(initial: &str, frame_ticks: u32) -> Self {
        Self {
            current_animation: initial.to_string(),
            current_frame: 0,
            frame_timer: 0,
            frame_ticks,
        }
    }

    /// Switch to another clip.
    ///
    /// Unknown clips and the clip already playing are ignored, so the
    /// current frame and timer survive repeated requests. Returns whether
    /// the clip changed.
    pub fn change_animation(&mut self, name: &str, frames: &FrameTable) -> bool {
        if name == self.current_animation || !frames.contains(name) {
            return false;
        }

        self.current_animation = name.to_string();
        self.current_frame = 0;
        self.frame_timer = 0;
        true
    }

    /// Advance by one tick, wrapping at the end of the clip
    pub fn tick(&mut self, frames: &FrameTable) {
        self.frame_timer += 1;
        if self.frame_timer >= self.frame_ticks {
            let len = frames
                .get(&self.current_animation)
                .map(|clip| clip.len())
                .unwrap_or(1)
                .max(1);
            self.current_frame = (self.current_frame + 1) % len;
            self.frame_timer = 0;
        }
    }

    /// Get the current animation name
    pub fn current_animation(&self) -> &str {
        &self.current_animation
    }

    /// Get the current frame index
    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Ticks spent on the current frame
    pub fn frame_timer(&self) -> u32 {
        self.frame_timer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::SpriteSheet;
    use image::RgbaImage;

    fn table() -> FrameTable {
        let sheet = SpriteSheet::new("test.png", RgbaImage::new(64, 64), 16);
        let layout = ClipLayout::new(0).with_clip("idle", 4).with_clip("walk", 3);
        FrameTable::build(&sheet, &layout).unwrap()
    }

    #[test]
    fn test_hero_layout() {
        let layout = HERO_SHEET.layout();
        assert_eq!(layout.start_tile, 0);
        assert_eq!(layout.tile_count(), 26);
        assert_eq!(layout.clips[1], ("run".to_string(), 8));
    }

    #[test]
    fn test_characters_layout_starts_mid_sheet() {
        let layout = CHARACTERS_SHEET.layout();
        assert_eq!(layout.start_tile, 23);
        assert_eq!(layout.tile_count(), 23);
        let ranges = layout.tile_ranges();
        assert_eq!(ranges[0], ("walk", 23..27));
        assert_eq!(ranges[4], ("punch", 36..37));
    }

    #[test]
    fn test_roles_are_in_layouts() {
        for preset in [HERO_SHEET, CHARACTERS_SHEET] {
            for role in preset.roles.names() {
                assert!(preset.clips.iter().any(|(name, _)| *name == role));
            }
        }
    }

    #[test]
    fn test_player_update() {
        let frames = table();
        let mut player = AnimationPlayer::new("idle", 3);

        player.tick(&frames);
        player.tick(&frames);
        assert_eq!(player.current_frame(), 0);
        assert_eq!(player.frame_timer(), 2);

        player.tick(&frames);
        assert_eq!(player.current_frame(), 1);
        assert_eq!(player.frame_timer(), 0);
    }

    #[test]
    fn test_animation_looping() {
        let frames = table();
        let mut player = AnimationPlayer::new("walk", 1);

        for _ in 0..3 {
            player.tick(&frames);
        }
        assert_eq!(player.current_frame(), 0);

        player.tick(&frames);
        assert_eq!(player.current_frame(), 1);
    }

    #[test]
    fn test_change_animation_resets() {
        let frames = table();
        let mut player = AnimationPlayer::new("idle", 2);
        for _ in 0..5 {
            player.tick(&frames);
        }

        assert!(player.change_animation("walk", &frames));
        assert_eq!(player.current_animation(), "walk");
        assert_eq!(player.current_frame(), 0);
        assert_eq!(player.frame_timer(), 0);
    }

    #[test]
    fn test_change_to_same_clip_keeps_phase() {
        let frames = table();
        let mut player = AnimationPlayer::new("idle", 2);
        for _ in 0..5 {
            player.tick(&frames);
        }
        let (frame, timer) = (player.current_frame(), player.frame_timer());

        assert!(!player.change_animation("idle", &frames));
        assert_eq!(player.current_frame(), frame);
        assert_eq!(player.frame_timer(), timer);
    }

    #[test]
    fn test_unknown_clip_ignored() {
        let frames = table();
        let mut player = AnimationPlayer::new("idle", 2);
        assert!(!player.change_animation("fly", &frames));
        assert_eq!(player.current_animation(), "idle");
    }
}
