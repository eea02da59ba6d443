//! Terminal rendering. Strictly a projection of session state to draw
//! commands; nothing here mutates the world.

pub mod game_scene;

pub use game_scene::render_game;
