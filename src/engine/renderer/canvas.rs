// Software render target
//
// Scenes issue draw commands against `RenderTarget`; the `FrameBuffer`
// rasterizes them into an RGBA8 image that the GPU presenter uploads.

use crate::core::Rect;
use image::RgbaImage;

/// Draw commands the demo scenes need
pub trait RenderTarget {
    /// Fill the whole target with an opaque color
    fn clear(&mut self, color: [u8; 3]);

    /// Fill an axis-aligned rectangle (edges truncated to whole pixels)
    fn fill_rect(&mut self, rect: Rect, color: [u8; 4]);

    /// Fill a circle; radii below one pixel draw nothing
    fn fill_circle(&mut self, center: (i32, i32), radius: i32, color: [u8; 4]);

    /// Draw an image with its top-left corner at `position`, honoring its alpha
    fn draw_image(&mut self, image: &RgbaImage, position: (i32, i32));
}

/// CPU-side RGBA8 frame
pub struct FrameBuffer {
    image: RgbaImage,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Raw RGBA bytes, row-major
    pub fn pixels(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Read a pixel, or None outside the frame
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        if x < 0 || y < 0 || x >= self.width() as i32 || y >= self.height() as i32 {
            return None;
        }
        Some(self.image.get_pixel(x as u32, y as u32).0)
    }

    /// Source-over blend of one pixel; out-of-bounds writes are dropped
    fn blend(&mut self, x: i32, y: i32, color: [u8; 4]) {
        if x < 0 || y < 0 || x >= self.width() as i32 || y >= self.height() as i32 {
            return;
        }

        let alpha = color[3] as u16;
        if alpha == 0 {
            return;
        }

        let dst = self.image.get_pixel_mut(x as u32, y as u32);
        if alpha == 255 {
            dst.0 = [color[0], color[1], color[2], 255];
            return;
        }

        for channel in 0..3 {
            let src = color[channel] as u16;
            let old = dst.0[channel] as u16;
            dst.0[channel] = ((src * alpha + old * (255 - alpha)) / 255) as u8;
        }
        dst.0[3] = 255;
    }
}

impl RenderTarget for FrameBuffer {
    fn clear(&mut self, color: [u8; 3]) {
        for pixel in self.image.pixels_mut() {
            pixel.0 = [color[0], color[1], color[2], 255];
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: [u8; 4]) {
        let left = (rect.left() as i32).max(0);
        let top = (rect.top() as i32).max(0);
        let right = (rect.right() as i32).min(self.width() as i32);
        let bottom = (rect.bottom() as i32).min(self.height() as i32);

        for y in top..bottom {
            for x in left..right {
                self.blend(x, y, color);
            }
        }
    }

    fn fill_circle(&mut self, center: (i32, i32), radius: i32, color: [u8; 4]) {
        if radius < 1 {
            return;
        }

        let (cx, cy) = center;
        let r2 = radius * radius;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= r2 {
                    self.blend(cx + dx, cy + dy, color);
                }
            }
        }
    }

    fn draw_image(&mut self, image: &RgbaImage, position: (i32, i32)) {
        let (ox, oy) = position;
        for (x, y, pixel) in image.enumerate_pixels() {
            self.blend(ox + x as i32, oy + y as i32, pixel.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_clear() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.clear([30, 30, 60]);
        assert_eq!(fb.pixel(3, 3), Some([30, 30, 60, 255]));
        assert_eq!(fb.pixels().len(), 4 * 4 * 4);
    }

    #[test]
    fn test_fill_rect_clips_to_frame() {
        let mut fb = FrameBuffer::new(8, 8);
        fb.clear([0, 0, 0]);
        fb.fill_rect(Rect::new(-4.0, 6.0, 6.0, 10.0), [100, 100, 100, 255]);

        assert_eq!(fb.pixel(0, 6), Some([100, 100, 100, 255]));
        assert_eq!(fb.pixel(1, 7), Some([100, 100, 100, 255]));
        assert_eq!(fb.pixel(2, 6), Some([0, 0, 0, 255]));
        assert_eq!(fb.pixel(0, 5), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_fill_circle() {
        let mut fb = FrameBuffer::new(20, 20);
        fb.clear([0, 0, 0]);
        fb.fill_circle((10, 10), 3, [255, 255, 0, 255]);

        assert_eq!(fb.pixel(10, 10), Some([255, 255, 0, 255]));
        assert_eq!(fb.pixel(13, 10), Some([255, 255, 0, 255]));
        assert_eq!(fb.pixel(14, 10), Some([0, 0, 0, 255]));
        assert_eq!(fb.pixel(13, 13), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_zero_radius_draws_nothing() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.clear([0, 0, 0]);
        fb.fill_circle((2, 2), 0, [255, 255, 255, 255]);
        assert_eq!(fb.pixel(2, 2), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_translucent_blend() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.clear([0, 0, 0]);
        fb.fill_circle((0, 0), 1, [255, 200, 0, 51]);

        let [r, g, b, a] = fb.pixel(0, 0).unwrap();
        assert_eq!((r, g, b, a), (51, 40, 0, 255));
    }

    #[test]
    fn test_draw_image_skips_transparent() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.clear([9, 9, 9]);

        let mut sprite = RgbaImage::new(2, 2);
        sprite.put_pixel(1, 1, Rgba([200, 0, 0, 255]));
        fb.draw_image(&sprite, (2, 2));

        assert_eq!(fb.pixel(2, 2), Some([9, 9, 9, 255]));
        assert_eq!(fb.pixel(3, 3), Some([200, 0, 0, 255]));
    }

    #[test]
    fn test_out_of_bounds_draws_are_dropped() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.clear([0, 0, 0]);
        fb.draw_image(&RgbaImage::from_pixel(2, 2, Rgba([1, 1, 1, 255])), (-10, 50));
        assert!(fb.pixel(-1, 0).is_none());
        assert_eq!(fb.pixel(0, 0), Some([0, 0, 0, 255]));
    }
}
