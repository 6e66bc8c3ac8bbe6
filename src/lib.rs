//! Grid Snake with bridge cells the snake can cross over or pass beneath.
//!
//! The simulation (`snake`, `food`, `bridge`, `game`) is pure in-memory state
//! advanced one tick at a time; the remaining modules drive it from a terminal.

pub mod bridge;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod score;
pub mod setup;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
