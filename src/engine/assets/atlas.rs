// Sprite sheet slicing into named animation clips

use super::AssetLoadError;
use image::{imageops, RgbaImage};
use log::debug;
use std::collections::HashMap;
use std::ops::Range;

/// A decoded sprite sheet cut into a grid of square tiles
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    /// File name the sheet was loaded from (used in error messages)
    name: String,
    image: RgbaImage,
    tile_size: u32,
}

impl SpriteSheet {
    pub fn new(name: impl Into<String>, image: RgbaImage, tile_size: u32) -> Self {
        Self {
            name: name.into(),
            image,
            tile_size,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Number of whole tiles in one row of the sheet
    pub fn frames_per_row(&self) -> u32 {
        if self.tile_size == 0 {
            0
        } else {
            self.image.width() / self.tile_size
        }
    }

    /// Number of whole tile rows in the sheet
    pub fn rows(&self) -> u32 {
        if self.tile_size == 0 {
            0
        } else {
            self.image.height() / self.tile_size
        }
    }

    /// Total number of whole tiles available
    pub fn tile_count(&self) -> usize {
        self.frames_per_row() as usize * self.rows() as usize
    }

    /// Pixel position of a tile's top-left corner, counting in raster order
    pub fn tile_origin(&self, index: usize) -> (u32, u32) {
        let per_row = self.frames_per_row().max(1) as usize;
        let column = (index % per_row) as u32;
        let row = (index / per_row) as u32;
        (column * self.tile_size, row * self.tile_size)
    }

    /// Copy a single tile out of the sheet
    pub fn tile(&self, index: usize) -> RgbaImage {
        let (x, y) = self.tile_origin(index);
        imageops::crop_imm(&self.image, x, y, self.tile_size, self.tile_size).to_image()
    }
}

/// Ordered list of clips to cut from a sheet, starting at a given tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipLayout {
    /// Index of the first tile consumed
    pub start_tile: usize,
    /// (clip name, frame count) pairs in sheet order
    pub clips: Vec<(String, usize)>,
}

impl ClipLayout {
    pub fn new(start_tile: usize) -> Self {
        Self {
            start_tile,
            clips: Vec::new(),
        }
    }

    /// Append a clip that consumes the next `frame_count` tiles
    pub fn with_clip(mut self, name: &str, frame_count: usize) -> Self {
        self.clips.push((name.to_string(), frame_count));
        self
    }

    /// Total number of tiles the layout consumes
    pub fn tile_count(&self) -> usize {
        self.clips.iter().map(|(_, count)| count).sum()
    }

    /// Tile index ranges for every clip.
    ///
    /// The cursor carries over from one clip to the next, so ranges are
    /// contiguous and never overlap.
    pub fn tile_ranges(&self) -> Vec<(&str, Range<usize>)> {
        let mut cursor = self.start_tile;
        self.clips
            .iter()
            .map(|(name, count)| {
                let range = cursor..cursor + count;
                cursor = range.end;
                (name.as_str(), range)
            })
            .collect()
    }
}

/// A named sequence of frames, with mirrored copies for left-facing draws
#[derive(Debug, Clone)]
pub struct AnimationClip {
    pub name: String,
    frames: Vec<RgbaImage>,
    mirrored: Vec<RgbaImage>,
}

impl AnimationClip {
    pub fn new(name: &str, frames: Vec<RgbaImage>) -> Self {
        let mirrored = frames.iter().map(imageops::flip_horizontal).collect();
        Self {
            name: name.to_string(),
            frames,
            mirrored,
        }
    }

    /// Number of frames in the clip
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Get a frame, optionally mirrored horizontally
    pub fn frame(&self, index: usize, mirrored: bool) -> Option<&RgbaImage> {
        if mirrored {
            self.mirrored.get(index)
        } else {
            self.frames.get(index)
        }
    }
}

/// Mapping from clip name to its frames. Built once, never mutated.
#[derive(Debug, Clone, Default)]
pub struct FrameTable {
    /// Name of the sheet the frames were cut from
    sheet: String,
    clips: HashMap<String, AnimationClip>,
}

impl FrameTable {
    /// Slice a sheet according to a layout.
    ///
    /// Fails if the sheet holds fewer tiles than the layout consumes.
    pub fn build(sheet: &SpriteSheet, layout: &ClipLayout) -> Result<Self, AssetLoadError> {
        let required = layout.start_tile + layout.tile_count();
        let available = sheet.tile_count();
        if required > available {
            return Err(AssetLoadError::SheetTooSmall {
                sheet: sheet.name().to_string(),
                required,
                available,
            });
        }

        let mut clips = HashMap::with_capacity(layout.clips.len());
        for (name, range) in layout.tile_ranges() {
            let frames: Vec<RgbaImage> = range.map(|index| sheet.tile(index)).collect();
            let clip = AnimationClip::new(name, frames);
            debug!("Clip '{}': {} frames", clip.name, clip.len());
            clips.insert(clip.name.clone(), clip);
        }

        Ok(Self {
            sheet: sheet.name().to_string(),
            clips,
        })
    }

    /// Name of the sheet the frames were cut from
    pub fn sheet_name(&self) -> &str {
        &self.sheet
    }

    /// Get a clip by name
    pub fn get(&self, name: &str) -> Option<&AnimationClip> {
        self.clips.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.clips.contains_key(name)
    }

    /// Number of clips in the table
    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    /// Sheet where every tile is filled with its own index in the red channel
    fn numbered_sheet(columns: u32, rows: u32, tile: u32) -> SpriteSheet {
        let image = RgbaImage::from_fn(columns * tile, rows * tile, |x, y| {
            let index = (y / tile) * columns + x / tile;
            Rgba([index as u8, 0, 0, 255])
        });
        SpriteSheet::new("numbered.png", image, tile)
    }

    fn tile_id(frame: &RgbaImage) -> u8 {
        frame.get_pixel(0, 0)[0]
    }

    #[test]
    fn test_frames_per_row_floors() {
        let sheet = SpriteSheet::new("odd.png", RgbaImage::new(100, 64), 32);
        assert_eq!(sheet.frames_per_row(), 3);
        assert_eq!(sheet.rows(), 2);
        assert_eq!(sheet.tile_count(), 6);
    }

    #[test]
    fn test_tile_origin_raster_order() {
        let sheet = numbered_sheet(4, 3, 16);
        assert_eq!(sheet.tile_origin(0), (0, 0));
        assert_eq!(sheet.tile_origin(3), (48, 0));
        assert_eq!(sheet.tile_origin(4), (0, 16));
        assert_eq!(sheet.tile_origin(9), (16, 32));
    }

    #[test]
    fn test_ranges_are_contiguous() {
        let layout = ClipLayout::new(5)
            .with_clip("a", 3)
            .with_clip("b", 0)
            .with_clip("c", 4)
            .with_clip("d", 1);

        let ranges = layout.tile_ranges();
        let mut cursor = layout.start_tile;
        for (_, range) in &ranges {
            assert_eq!(range.start, cursor, "no gap or reuse between clips");
            cursor = range.end;
        }
        let consumed: usize = ranges.iter().map(|(_, r)| r.len()).sum();
        assert_eq!(consumed, layout.tile_count());
        assert_eq!(cursor, 5 + 8);
    }

    #[test]
    fn test_build_consumes_tiles_in_order() {
        let sheet = numbered_sheet(4, 4, 8);
        let layout = ClipLayout::new(2).with_clip("idle", 3).with_clip("run", 5);
        let table = FrameTable::build(&sheet, &layout).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.sheet_name(), "numbered.png");
        assert_eq!(table.get("run").unwrap().name, "run");
        let idle: Vec<u8> = (0..3)
            .map(|i| tile_id(table.get("idle").unwrap().frame(i, false).unwrap()))
            .collect();
        let run: Vec<u8> = (0..5)
            .map(|i| tile_id(table.get("run").unwrap().frame(i, false).unwrap()))
            .collect();

        assert_eq!(idle, vec![2, 3, 4]);
        assert_eq!(run, vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_frames_have_tile_size() {
        let sheet = numbered_sheet(2, 2, 32);
        let layout = ClipLayout::new(0).with_clip("all", 4);
        let table = FrameTable::build(&sheet, &layout).unwrap();
        let frame = table.get("all").unwrap().frame(3, false).unwrap();
        assert_eq!(frame.dimensions(), (32, 32));
        assert_eq!(tile_id(frame), 3);
    }

    #[test]
    fn test_sheet_too_small() {
        let sheet = numbered_sheet(2, 2, 8);
        let layout = ClipLayout::new(1).with_clip("walk", 4);
        let err = FrameTable::build(&sheet, &layout).unwrap_err();
        assert!(matches!(
            err,
            AssetLoadError::SheetTooSmall {
                required: 5,
                available: 4,
                ..
            }
        ));
    }

    #[test]
    fn test_mirrored_frames() {
        let image = RgbaImage::from_fn(4, 4, |x, _| {
            if x == 0 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        });
        let clip = AnimationClip::new("flip", vec![image]);

        assert_eq!(clip.frame(0, false).unwrap().get_pixel(0, 0)[0], 255);
        assert_eq!(clip.frame(0, true).unwrap().get_pixel(3, 0)[0], 255);
        assert_eq!(clip.frame(0, true).unwrap().get_pixel(0, 0)[0], 0);
        assert!(clip.frame(1, false).is_none());
    }
}
