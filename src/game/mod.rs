//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The frame driver in `modes` feeds it input and reads [`RenderView`] back.

pub mod action;
pub mod board;
pub mod config;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use board::{Board, CellPicker};
pub use config::{ConfigError, GameConfig};
pub use engine::{GameEngine, RenderView, TickResult};
pub use state::{Apple, Phase, Position, Snake};
