//! Torus Snake - a snake game on a wrap-around grid
//!
//! This library provides:
//! - Core game logic and the menu/playing state machine (game module)
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - Session metrics (metrics module)
//! - The fixed-rate frame driver (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
