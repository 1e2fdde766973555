// Static level geometry

use crate::core::Rect;
use crate::engine::renderer::RenderTarget;

/// Fill color of every platform
pub const PLATFORM_COLOR: [u8; 4] = [100, 100, 100, 255];

/// Static axis-aligned block the actor collides with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    rect: Rect,
}

impl Platform {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn render(&self, target: &mut impl RenderTarget) {
        target.fill_rect(self.rect, PLATFORM_COLOR);
    }
}
