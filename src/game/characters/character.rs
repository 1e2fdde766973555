// Actor entity: movement, platform collision and animation

use glam::Vec2;
use image::RgbaImage;

use crate::core::math::clamp;
use crate::core::Rect;
use crate::engine::assets::{AssetLoadError, FrameTable};
use crate::engine::renderer::RenderTarget;
use crate::game::world::Platform;

use super::animation::{AnimationPlayer, ClipRoles};
use super::state::MovementState;
use super::stats::ActorStats;

/// Image and top-left draw position for the current frame
#[derive(Debug, Clone, Copy)]
pub struct RenderFrame<'a> {
    pub image: &'a RgbaImage,
    pub position: Vec2,
}

/// The player-controlled character
#[derive(Debug)]
pub struct Actor {
    /// Top-left corner of the collision box
    position: Vec2,
    /// Pixels per tick
    velocity: Vec2,
    facing_right: bool,

    stats: ActorStats,
    /// Right edge of the playfield; x is clamped to [0, screen_width - width]
    screen_width: f32,

    frames: FrameTable,
    roles: ClipRoles,
    animation: AnimationPlayer,
}

impl Actor {
    /// Create an actor standing at `spawn`.
    ///
    /// Every role clip must exist in the table and hold at least one frame.
    pub fn new(
        frames: FrameTable,
        roles: ClipRoles,
        stats: ActorStats,
        spawn: Vec2,
        screen_width: f32,
    ) -> Result<Self, AssetLoadError> {
        for name in roles.names() {
            let has_frames = frames.get(name).is_some_and(|clip| !clip.is_empty());
            if !has_frames {
                return Err(AssetLoadError::MissingClip {
                    sheet: frames.sheet_name().to_string(),
                    clip: name.to_string(),
                });
            }
        }

        Ok(Self {
            position: spawn,
            velocity: Vec2::ZERO,
            facing_right: true,
            stats,
            screen_width,
            animation: AnimationPlayer::new(roles.idle, stats.frame_ticks),
            frames,
            roles,
        })
    }

    /// Record this tick's input.
    ///
    /// `vx` replaces the horizontal velocity and turns the actor when non-zero.
    /// A jump request sets the vertical velocity to `vy`, but only while the
    /// actor has no vertical motion.
    pub fn set_intent(&mut self, vx: f32, vy: f32, wants_jump: bool) {
        self.velocity.x = vx;
        if vx < 0.0 {
            self.facing_right = false;
        } else if vx > 0.0 {
            self.facing_right = true;
        }

        if wants_jump && self.movement_state().is_grounded() {
            self.velocity.y = vy;
        }
    }

    /// Advance physics and animation by one fixed tick
    pub fn step(&mut self, platforms: &[Platform]) {
        self.move_horizontally(platforms);
        self.move_vertically(platforms);

        self.position.x = clamp(
            self.position.x,
            0.0,
            (self.screen_width - self.stats.width).max(0.0),
        );

        self.animation.tick(&self.frames);

        let state = self.movement_state();
        self.change_animation(state.clip_name(&self.roles));
    }

    /// Horizontal pass: move, then push out of platforms at the same height.
    ///
    /// `intersects` is strict on both axes, so a platform fully above or
    /// below the box (touching edges included) never blocks sideways motion.
    fn move_horizontally(&mut self, platforms: &[Platform]) {
        self.position.x += self.velocity.x;

        let mut bounds = self.bounds();
        for platform in platforms {
            let rect = platform.rect();
            if !bounds.intersects(&rect) {
                continue;
            }

            if self.velocity.x > 0.0 {
                self.position.x = rect.left() - self.stats.width;
            } else if self.velocity.x < 0.0 {
                self.position.x = rect.right();
            }
            bounds = self.bounds();
        }
    }

    /// Vertical pass: apply gravity, then land on or bump against platforms.
    ///
    /// The direction of travel is taken before resolving, so when several
    /// platforms still overlap the box the last one in list order decides
    /// the final position.
    fn move_vertically(&mut self, platforms: &[Platform]) {
        self.velocity.y += self.stats.gravity;
        self.position.y += self.velocity.y;

        let falling = self.velocity.y > 0.0;
        let rising = self.velocity.y < 0.0;

        let mut bounds = self.bounds();
        for platform in platforms {
            let rect = platform.rect();
            if !bounds.intersects(&rect) {
                continue;
            }

            if falling {
                self.position.y = rect.top() - self.stats.height;
                self.velocity.y = 0.0;
            } else if rising {
                self.position.y = rect.bottom();
                self.velocity.y = 0.0;
            }
            bounds = self.bounds();
        }
    }

    /// Switch clips; a request for the playing clip keeps its frame and timer
    pub fn change_animation(&mut self, name: &str) -> bool {
        self.animation.change_animation(name, &self.frames)
    }

    /// Current frame, mirrored when facing left, and where to draw it
    pub fn render_frame(&self) -> Option<RenderFrame<'_>> {
        let clip = self.frames.get(self.animation.current_animation())?;
        let image = clip.frame(self.animation.current_frame(), !self.facing_right)?;
        Some(RenderFrame {
            image,
            position: self.position,
        })
    }

    /// Draw the current frame at its truncated pixel position
    pub fn render(&self, target: &mut impl RenderTarget) {
        if let Some(frame) = self.render_frame() {
            target.draw_image(
                frame.image,
                (frame.position.x as i32, frame.position.y as i32),
            );
        }
    }

    /// Collision box in screen space
    pub fn bounds(&self) -> Rect {
        Rect::from_position(
            self.position,
            Vec2::new(self.stats.width, self.stats.height),
        )
    }

    pub fn movement_state(&self) -> MovementState {
        MovementState::from_velocity(self.velocity.x, self.velocity.y, self.stats.run_speed)
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn is_facing_right(&self) -> bool {
        self.facing_right
    }

    pub fn stats(&self) -> &ActorStats {
        &self.stats
    }

    pub fn current_animation(&self) -> &str {
        self.animation.current_animation()
    }

    pub fn current_frame(&self) -> usize {
        self.animation.current_frame()
    }

    pub fn animation_timer(&self) -> u32 {
        self.animation.frame_timer()
    }
}
