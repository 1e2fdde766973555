// Particle system: batch emission from a source, single-pass update and cull

use std::f32::consts::TAU;
use std::ops::RangeInclusive;

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::particle::Particle;
use super::source::Source;
use crate::engine::renderer::RenderTarget;

/// Ranges new particles are drawn from
#[derive(Debug, Clone)]
pub struct EmissionRanges {
    /// Pixels per tick
    pub speed: RangeInclusive<f32>,
    /// Ticks
    pub lifetime: RangeInclusive<i32>,
    /// Initial radius in whole pixels
    pub size: RangeInclusive<u8>,
    pub red: RangeInclusive<u8>,
    pub green: RangeInclusive<u8>,
    pub blue: RangeInclusive<u8>,
}

impl Default for EmissionRanges {
    fn default() -> Self {
        Self {
            speed: 2.0..=6.0,
            lifetime: 40..=100,
            size: 3..=8,
            // Warm yellow-orange
            red: 200..=255,
            green: 100..=200,
            blue: 0..=50,
        }
    }
}

/// Owns the source and every live particle
#[derive(Debug)]
pub struct ParticleSystem {
    source: Source,
    particles: Vec<Particle>,
    ranges: EmissionRanges,
    rng: StdRng,
}

impl ParticleSystem {
    /// Create a system; a fixed seed makes emission reproducible
    pub fn new(source: Source, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            source,
            particles: Vec::new(),
            ranges: EmissionRanges::default(),
            rng,
        }
    }

    /// Append `count` particles at the source position
    pub fn emit(&mut self, count: usize) {
        self.particles.reserve(count);
        for _ in 0..count {
            let angle = self.rng.gen_range(0.0..TAU);
            let speed = self.rng.gen_range(self.ranges.speed.clone());

            let particle = Particle {
                position: self.source.position,
                velocity: Vec2::new(angle.cos(), angle.sin()) * speed,
                lifetime: self.rng.gen_range(self.ranges.lifetime.clone()),
                size: self.rng.gen_range(self.ranges.size.clone()) as f32,
                color: [
                    self.rng.gen_range(self.ranges.red.clone()),
                    self.rng.gen_range(self.ranges.green.clone()),
                    self.rng.gen_range(self.ranges.blue.clone()),
                ],
            };
            self.particles.push(particle);
        }
    }

    /// Update every particle once and drop the dead ones.
    ///
    /// Compaction happens in the same pass; each particle's update only
    /// reads its own state, so removals never affect later particles.
    pub fn advance(&mut self) {
        self.particles.retain_mut(Particle::advance);
    }

    /// Advance the source pulse by one tick
    pub fn tick_source(&mut self) {
        self.source.tick();
    }

    /// Draw every particle as a filled circle at its truncated position and size
    pub fn render(&self, target: &mut impl RenderTarget) {
        for particle in &self.particles {
            let [r, g, b] = particle.color;
            target.fill_circle(
                (particle.position.x as i32, particle.position.y as i32),
                particle.size as i32,
                [r, g, b, 255],
            );
        }
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of live particles
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
