//! Core game: world model, physics, spawning, collision, scoring, and the
//! Start / Playing / GameOver phase machine. Rendering and input mapping
//! live elsewhere; everything here is terminal-agnostic and test-driven.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
