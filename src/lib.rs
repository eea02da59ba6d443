//! Flappy - Terminal Arcade Game Library
//!
//! Exposes the game logic for testing and external use; the binary drives
//! it from a crossterm event loop. The `ui` module is a pure projection of
//! session state onto a ratatui frame and touches no game state.

pub mod build_info;
pub mod game;
pub mod input;
pub mod persistence;
pub mod ui;

pub use game::types::{GamePhase, Session};
pub use persistence::BestScoreStore;
