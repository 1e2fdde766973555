// Asset loading functionality

use super::atlas::SpriteSheet;
use super::AssetLoadError;
use log::info;
use std::path::{Path, PathBuf};

/// Asset loader responsible for finding and decoding sprite sheets
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    /// Create a new asset loader with the given base path
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the full path for an asset.
    ///
    /// Absolute names are used as-is; relative names resolve against the base path.
    pub fn resolve_path(&self, name: &str) -> PathBuf {
        let path = Path::new(name);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_path.join(path)
        }
    }

    /// Load asset bytes from disk
    pub fn load_bytes(&self, name: &str) -> Result<Vec<u8>, AssetLoadError> {
        let path = self.resolve_path(name);

        if !path.exists() {
            return Err(AssetLoadError::NotFound(path));
        }

        std::fs::read(&path).map_err(|source| AssetLoadError::Io { path, source })
    }

    /// Load and decode a sprite sheet cut into square tiles of `tile_size` pixels
    pub fn load_sprite_sheet(
        &self,
        name: &str,
        tile_size: u32,
    ) -> Result<SpriteSheet, AssetLoadError> {
        let bytes = self.load_bytes(name)?;
        let path = self.resolve_path(name);

        let image = image::load_from_memory(&bytes)
            .map_err(|source| AssetLoadError::Decode {
                path: path.clone(),
                source,
            })?
            .to_rgba8();

        info!(
            "Loaded sprite sheet {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );

        Ok(SpriteSheet::new(name, image, tile_size))
    }

    /// Get the base path
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};

    fn temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("pixel-hero-{}-{}", tag, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_loader_path_resolution() {
        let loader = AssetLoader::new("/game/assets");
        let path = loader.resolve_path("hero_spritesheet.png");

        assert_eq!(path.to_str().unwrap(), "/game/assets/hero_spritesheet.png");
        assert_eq!(loader.base_path(), Path::new("/game/assets"));
    }

    #[test]
    fn test_absolute_name_bypasses_base() {
        let loader = AssetLoader::new("/game/assets");
        let path = loader.resolve_path("/tmp/other.png");
        assert_eq!(path, PathBuf::from("/tmp/other.png"));
    }

    #[test]
    fn test_missing_sheet_reports_filename() {
        let loader = AssetLoader::new("/nonexistent/assets");
        let err = loader
            .load_sprite_sheet("hero_spritesheet.png", 32)
            .unwrap_err();
        assert!(matches!(err, AssetLoadError::NotFound(_)));
        assert!(err.to_string().contains("hero_spritesheet.png"));
    }

    #[test]
    fn test_undecodable_sheet() {
        let dir = temp_dir("garbage");
        std::fs::write(dir.join("broken.png"), b"not a png").unwrap();

        let loader = AssetLoader::new(&dir);
        let err = loader.load_sprite_sheet("broken.png", 32).unwrap_err();
        assert!(matches!(err, AssetLoadError::Decode { .. }));

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn test_load_png_sheet() {
        let dir = temp_dir("png");
        let sheet = RgbaImage::from_pixel(64, 32, Rgba([1, 2, 3, 255]));
        sheet
            .save_with_format(dir.join("sheet.png"), ImageFormat::Png)
            .unwrap();

        let loader = AssetLoader::new(&dir);
        let sheet = loader.load_sprite_sheet("sheet.png", 32).unwrap();
        assert_eq!(sheet.frames_per_row(), 2);
        assert_eq!(sheet.tile_count(), 2);

        let _ = std::fs::remove_dir_all(dir);
    }
}
