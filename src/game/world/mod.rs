// Level layouts

pub mod platform;

pub use platform::Platform;

/// Platforms of the platformer scene on a 512x512 screen, ground first
pub fn platformer_level(width: f32, height: f32) -> Vec<Platform> {
    vec![
        Platform::new(0.0, height - 40.0, width, 40.0),
        Platform::new(0.0, 220.0, 64.0, 32.0),
        Platform::new(0.0, 270.0, 200.0, 25.0),
        Platform::new(250.0, 350.0, 100.0, 40.0),
        Platform::new(412.0, 400.0, 100.0, 30.0),
        Platform::new(100.0, 425.0, 50.0, 50.0),
    ]
}

/// A single ground slab whose top edge sits on the bottom of the screen
pub fn ground_level(width: f32, height: f32) -> Vec<Platform> {
    vec![Platform::new(0.0, height, width, 40.0)]
}
