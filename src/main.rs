use anyhow::Result;
use clap::Parser;
use log::{debug, error, info, warn};
use std::sync::Arc;
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

mod config;
mod core;
mod engine;
mod game;

use config::Cli;
use engine::assets::AssetLoader;
use engine::game_loop::{GameLoop, TICK_RATE};
use engine::input::{Action, InputManager};
use engine::renderer::{FrameBuffer, Renderer};
use game::Scene;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    info!("Starting Pixel Hero ({:?} scene)", cli.scene);

    let loader = AssetLoader::new(&cli.assets);
    let mut scene = match Scene::load(cli.scene, &cli.scene_options(), &loader) {
        Ok(scene) => scene,
        Err(err) => {
            error!("{}", err);
            eprintln!(
                "Place the sprite sheet in {} or pass --assets/--sheet.",
                loader.base_path().display()
            );
            return Ok(());
        }
    };

    let settings = *scene.settings();

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(window_title(settings.title, false))
            .with_inner_size(winit::dpi::PhysicalSize::new(settings.width, settings.height))
            .with_resizable(true)
            .build(&event_loop)?,
    );

    info!("Window created successfully");

    let mut renderer = pollster::block_on(Renderer::new(
        window.clone(),
        (settings.width, settings.height),
    ))?;
    let mut frame = FrameBuffer::new(settings.width, settings.height);
    let mut input = InputManager::new();
    let mut game_loop = GameLoop::new();

    event_loop.set_control_flow(ControlFlow::Poll);

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!(
                        "Close requested after {} frames, shutting down...",
                        game_loop.frame_count()
                    );
                    elwt.exit();
                }
                WindowEvent::Resized(physical_size) => {
                    renderer.resize(physical_size);
                }
                WindowEvent::Focused(false) => {
                    input.reset();
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    input.process_keyboard_event(&event);
                    if input.just_pressed(Action::Quit) {
                        info!("Quit requested, shutting down...");
                        elwt.exit();
                    }
                }
                WindowEvent::RedrawRequested => {
                    if input.just_pressed(Action::Pause) {
                        game_loop.toggle_pause();
                        window.set_title(&window_title(settings.title, game_loop.is_paused()));
                    }

                    let ticks = game_loop.begin_frame();
                    let snapshot = input.snapshot();
                    for _ in 0..ticks {
                        scene.update(&snapshot);
                    }
                    input.update();

                    if ticks > 0 && game_loop.tick_count() % TICK_RATE as u64 == 0 {
                        if let Some(particles) = scene.particles() {
                            debug!("{} live particles", particles.len());
                        }
                        if let Some(actor) = scene.actor() {
                            debug!(
                                "Hero at {:?} playing '{}'",
                                actor.position(),
                                actor.current_animation()
                            );
                        }
                        debug!("{:.1} fps", game_loop.fps());
                    }

                    scene.render(&mut frame);

                    match renderer.present(&frame) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            warn!("Surface lost, reconfiguring");
                            renderer.reconfigure();
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            error!("GPU out of memory, shutting down");
                            elwt.exit();
                        }
                        Err(err) => warn!("Skipped frame: {}", err),
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    info!("Goodbye");
    Ok(())
}

fn window_title(scene: &str, paused: bool) -> String {
    if paused {
        format!("Pixel Hero - {} (paused)", scene)
    } else {
        format!("Pixel Hero - {}", scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_title_shows_pause() {
        assert_eq!(window_title("Particles", false), "Pixel Hero - Particles");
        assert_eq!(
            window_title("Particles", true),
            "Pixel Hero - Particles (paused)"
        );
    }
}
