// Command-line configuration

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::game::characters::{SheetPreset, CHARACTERS_SHEET, HERO_SHEET};
use crate::game::{SceneKind, SceneOptions};

/// Named clip layouts a sheet can be cut with
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayoutKind {
    /// stance, run, walk, jump from the first tile
    Hero,
    /// walk, jump, hit, slash, punch, run, climb, back from tile 23
    Characters,
}

impl LayoutKind {
    pub fn preset(self) -> SheetPreset {
        match self {
            Self::Hero => HERO_SHEET,
            Self::Characters => CHARACTERS_SHEET,
        }
    }
}

/// Pixel Hero: sprite sheet platformer and particle demos
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Demo to run
    #[arg(long, value_enum, default_value_t = SceneKind::Platformer)]
    pub scene: SceneKind,

    /// Directory sprite sheets are loaded from
    #[arg(long, value_name = "DIR", default_value = "assets")]
    pub assets: PathBuf,

    /// Sprite sheet file, relative to the asset directory
    #[arg(long, value_name = "FILE")]
    pub sheet: Option<String>,

    /// Clip layout used to cut the sprite sheet
    #[arg(long, value_enum)]
    pub layout: Option<LayoutKind>,

    /// Seed for particle emission, random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Particles emitted per tick
    #[arg(long, value_name = "COUNT")]
    pub emit_count: Option<usize>,
}

impl Cli {
    /// Overrides handed to scene loading
    pub fn scene_options(&self) -> SceneOptions {
        SceneOptions {
            layout: self.layout.map(LayoutKind::preset),
            sheet: self.sheet.clone(),
            seed: self.seed,
            emit_count: self.emit_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["pixel-hero"]).unwrap();
        assert_eq!(cli.scene, SceneKind::Platformer);
        assert_eq!(cli.assets, PathBuf::from("assets"));

        let options = cli.scene_options();
        assert!(options.layout.is_none());
        assert!(options.sheet.is_none());
        assert!(options.seed.is_none());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "pixel-hero",
            "--scene",
            "combined",
            "--sheet",
            "other.png",
            "--layout",
            "hero",
            "--seed",
            "42",
            "--emit-count",
            "3",
        ])
        .unwrap();

        assert_eq!(cli.scene, SceneKind::Combined);
        let options = cli.scene_options();
        assert_eq!(options.layout.map(|p| p.file), Some(HERO_SHEET.file));
        assert_eq!(options.sheet.as_deref(), Some("other.png"));
        assert_eq!(options.seed, Some(42));
        assert_eq!(options.emit_count, Some(3));
    }

    #[test]
    fn test_unknown_scene_rejected() {
        assert!(Cli::try_parse_from(["pixel-hero", "--scene", "shooter"]).is_err());
    }

    #[test]
    fn test_layout_presets() {
        assert_eq!(LayoutKind::Characters.preset().start_tile, 23);
        assert_eq!(LayoutKind::Hero.preset().start_tile, 0);
    }
}
