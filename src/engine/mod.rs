// Engine modules: assets, input, renderer and tick scheduling

pub mod assets;
pub mod game_loop;
pub mod input;
pub mod renderer;
