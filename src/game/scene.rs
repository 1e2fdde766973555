// Demo scenes: what gets simulated and drawn each tick

use glam::Vec2;
use log::info;

use super::characters::{Actor, SheetPreset, BASE_STATS, CHARACTERS_SHEET, HERO_SHEET};
use super::particles::{ParticleSystem, Source};
use super::world::{ground_level, platformer_level, Platform};
use crate::engine::assets::{AssetLoadError, AssetLoader, FrameTable};
use crate::engine::input::InputSnapshot;
use crate::engine::renderer::RenderTarget;

/// Which demo to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SceneKind {
    /// Hero on a set of static platforms
    Platformer,
    /// Particle source on its own
    Particles,
    /// Hero walking on the screen floor next to a particle source
    Combined,
}

/// Where the hero starts and which sheet it is cut from
#[derive(Debug, Clone, Copy)]
pub struct ActorPlacement {
    pub sheet: SheetPreset,
    /// Top-left corner of the collision box
    pub spawn: Vec2,
}

/// Particle source tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmitterSettings {
    pub position: Vec2,
    pub base_radius: f32,
    /// Source pulse phase added per tick
    pub phase_step: f32,
    /// Particles emitted every tick
    pub per_tick: usize,
}

/// Screen and content of one scene
#[derive(Debug, Clone, Copy)]
pub struct SceneSettings {
    pub title: &'static str,
    pub width: u32,
    pub height: u32,
    pub background: [u8; 3],
    pub actor: Option<ActorPlacement>,
    pub emitter: Option<EmitterSettings>,
}

pub const PLATFORMER_SCENE: SceneSettings = SceneSettings {
    title: "Platformer",
    width: 512,
    height: 512,
    background: [30, 30, 60],
    actor: Some(ActorPlacement {
        sheet: HERO_SHEET,
        spawn: Vec2::new(240.0, 440.0),
    }),
    emitter: None,
};

pub const PARTICLES_SCENE: SceneSettings = SceneSettings {
    title: "Particles",
    width: 800,
    height: 600,
    background: [10, 10, 30],
    actor: None,
    emitter: Some(EmitterSettings {
        position: Vec2::new(100.0, 100.0),
        base_radius: 30.0,
        phase_step: 0.15,
        per_tick: 5,
    }),
};

pub const COMBINED_SCENE: SceneSettings = SceneSettings {
    title: "Hero and particles",
    width: 512,
    height: 512,
    background: [86, 193, 168],
    actor: Some(ActorPlacement {
        sheet: CHARACTERS_SHEET,
        spawn: Vec2::new(224.0, 480.0),
    }),
    emitter: Some(EmitterSettings {
        position: Vec2::new(384.0, 128.0),
        base_radius: 30.0,
        phase_step: 0.15,
        per_tick: 5,
    }),
};

impl SceneKind {
    pub fn settings(self) -> SceneSettings {
        match self {
            Self::Platformer => PLATFORMER_SCENE,
            Self::Particles => PARTICLES_SCENE,
            Self::Combined => COMBINED_SCENE,
        }
    }

    /// Static geometry of the scene
    pub fn level(self) -> Vec<Platform> {
        let settings = self.settings();
        let (width, height) = (settings.width as f32, settings.height as f32);
        match self {
            Self::Platformer => platformer_level(width, height),
            Self::Particles => Vec::new(),
            Self::Combined => ground_level(width, height),
        }
    }
}

/// Command-line overrides applied on top of a scene's presets
#[derive(Debug, Clone, Default)]
pub struct SceneOptions {
    /// Clip layout to cut the sheet with
    pub layout: Option<SheetPreset>,
    /// Sheet file name, resolved against the asset directory
    pub sheet: Option<String>,
    /// Fixed seed for particle emission
    pub seed: Option<u64>,
    /// Particles emitted per tick
    pub emit_count: Option<usize>,
}

/// A loaded, running demo
pub struct Scene {
    settings: SceneSettings,
    platforms: Vec<Platform>,
    actor: Option<Actor>,
    particles: Option<ParticleSystem>,
    emit_per_tick: usize,
}

impl Scene {
    /// Load everything a scene needs. Fails only on sprite sheet problems.
    pub fn load(
        kind: SceneKind,
        options: &SceneOptions,
        loader: &AssetLoader,
    ) -> Result<Self, AssetLoadError> {
        let settings = kind.settings();

        let actor = match settings.actor {
            Some(placement) => {
                let preset = options.layout.unwrap_or(placement.sheet);
                let file = options.sheet.as_deref().unwrap_or(preset.file);
                let sheet = loader.load_sprite_sheet(file, preset.tile_size)?;
                let frames = FrameTable::build(&sheet, &preset.layout())?;
                info!("Cut {} clips from {}", frames.len(), file);

                Some(Actor::new(
                    frames,
                    preset.roles,
                    BASE_STATS,
                    placement.spawn,
                    settings.width as f32,
                )?)
            }
            None => None,
        };

        let particles = settings.emitter.map(|emitter| {
            ParticleSystem::new(
                Source::new(emitter.position, emitter.base_radius, emitter.phase_step),
                options.seed,
            )
        });

        let mut scene = Self::assemble(settings, kind.level(), actor, particles);
        if let Some(count) = options.emit_count {
            scene.emit_per_tick = count;
        }
        Ok(scene)
    }

    fn assemble(
        settings: SceneSettings,
        platforms: Vec<Platform>,
        actor: Option<Actor>,
        particles: Option<ParticleSystem>,
    ) -> Self {
        Self {
            emit_per_tick: settings.emitter.map_or(0, |emitter| emitter.per_tick),
            settings,
            platforms,
            actor,
            particles,
        }
    }

    /// Run one fixed tick: hero first, then the particle source
    pub fn update(&mut self, input: &InputSnapshot) {
        if let Some(actor) = &mut self.actor {
            let stats = *actor.stats();
            actor.set_intent(
                horizontal_velocity(input, stats.speed(input.run)),
                stats.jump_power,
                input.jump,
            );
            actor.step(&self.platforms);
        }

        if let Some(particles) = &mut self.particles {
            particles.tick_source();
            particles.emit(self.emit_per_tick);
            particles.advance();
        }
    }

    /// Draw back to front: background, platforms, particles, source, hero
    pub fn render(&self, target: &mut impl RenderTarget) {
        target.clear(self.settings.background);

        for platform in &self.platforms {
            platform.render(target);
        }

        if let Some(particles) = &self.particles {
            particles.render(target);
            particles.source().render(target);
        }

        if let Some(actor) = &self.actor {
            actor.render(target);
        }
    }

    pub fn settings(&self) -> &SceneSettings {
        &self.settings
    }

    pub fn actor(&self) -> Option<&Actor> {
        self.actor.as_ref()
    }

    pub fn particles(&self) -> Option<&ParticleSystem> {
        self.particles.as_ref()
    }
}

/// Left sets `-speed`, right overrides it with `+speed`
fn horizontal_velocity(input: &InputSnapshot, speed: f32) -> f32 {
    let mut vx = 0.0;
    if input.left {
        vx = -speed;
    }
    if input.right {
        vx = speed;
    }
    vx
}
