// Vertex structure for the presentation quad

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Vertex for the textured fullscreen quad
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Position in clip space
    pub position: [f32; 2],
    /// Texture coordinates (UV)
    pub tex_coords: [f32; 2],
}

impl Vertex {
    pub fn new(position: Vec2, tex_coords: Vec2) -> Self {
        Self {
            position: position.to_array(),
            tex_coords: tex_coords.to_array(),
        }
    }

    /// Quad spanning `[-extent, extent]` in clip space.
    ///
    /// UV origin is the top-left of the frame, clip space y points up.
    pub fn quad(extent: Vec2) -> [Vertex; 4] {
        [
            Vertex::new(Vec2::new(-extent.x, -extent.y), Vec2::new(0.0, 1.0)),
            Vertex::new(Vec2::new(extent.x, -extent.y), Vec2::new(1.0, 1.0)),
            Vertex::new(Vec2::new(extent.x, extent.y), Vec2::new(1.0, 0.0)),
            Vertex::new(Vec2::new(-extent.x, extent.y), Vec2::new(0.0, 0.0)),
        ]
    }

    /// Get the vertex buffer layout descriptor
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // Position
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                // Tex Coords
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// Clip-space half extents that fit a frame into a window without
/// distorting it. The unused axis is letterboxed.
pub fn letterbox(frame: (u32, u32), window: (u32, u32)) -> Vec2 {
    if frame.0 == 0 || frame.1 == 0 || window.0 == 0 || window.1 == 0 {
        return Vec2::ONE;
    }

    let frame_aspect = frame.0 as f32 / frame.1 as f32;
    let window_aspect = window.0 as f32 / window.1 as f32;

    if window_aspect > frame_aspect {
        Vec2::new(frame_aspect / window_aspect, 1.0)
    } else {
        Vec2::new(1.0, window_aspect / frame_aspect)
    }
}
