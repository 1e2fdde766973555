// Pulsing emission point

use glam::Vec2;

use crate::engine::renderer::RenderTarget;

/// Core color of the source
pub const CORE_COLOR: [u8; 4] = [255, 255, 0, 255];
/// Low-opacity halo drawn behind the core
pub const GLOW_COLOR: [u8; 4] = [255, 200, 0, 50];
/// Pulse amplitude relative to the base radius
const PULSE_AMPLITUDE: f32 = 0.2;

/// Fixed point particles are emitted from
#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    pub position: Vec2,
    /// Radius at zero phase
    pub base_radius: f32,
    /// Phase added every tick
    pub phase_step: f32,
    phase: f32,
}

impl Source {
    pub fn new(position: Vec2, base_radius: f32, phase_step: f32) -> Self {
        Self {
            position,
            base_radius,
            phase_step,
            phase: 0.0,
        }
    }

    /// Advance the pulse by one tick
    pub fn tick(&mut self) {
        self.phase += self.phase_step;
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Current core radius, between 0.8x and 1.2x the base radius
    pub fn radius(&self) -> f32 {
        self.base_radius * (1.0 + PULSE_AMPLITUDE * self.phase.sin())
    }

    /// Draw the glow, then the core on top of it
    pub fn render(&self, target: &mut impl RenderTarget) {
        let radius = self.radius() as i32;
        let center = (self.position.x as i32, self.position.y as i32);

        target.fill_circle(center, radius * 2, GLOW_COLOR);
        target.fill_circle(center, radius, CORE_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_radius_starts_at_base() {
        let source = Source::new(Vec2::new(100.0, 100.0), 30.0, 0.15);
        assert_relative_eq!(source.radius(), 30.0);
    }

    #[test]
    fn test_radius_stays_in_pulse_band() {
        let mut source = Source::new(Vec2::ZERO, 30.0, 0.15);
        let mut min = f32::MAX;
        let mut max = f32::MIN;
        for _ in 0..200 {
            source.tick();
            min = min.min(source.radius());
            max = max.max(source.radius());
        }

        assert!(min >= 24.0 - 1e-3);
        assert!(max <= 36.0 + 1e-3);
        assert!(min < 24.5 && max > 35.5, "pulse should sweep the full band");
    }

    #[test]
    fn test_phase_accumulates() {
        let mut source = Source::new(Vec2::ZERO, 30.0, 0.15);
        for _ in 0..4 {
            source.tick();
        }
        assert_relative_eq!(source.phase(), 0.6, epsilon = 1e-6);
    }
}
