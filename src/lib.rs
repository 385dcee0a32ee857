//! Retro grid snake for the terminal.
//!
//! The game core (`snake`, `food`, `game`) is a synchronous state machine
//! with no I/O: the binary drives it from a fixed-rate loop and renders it
//! with ratatui. Construct a [`game::GameState`] with a seed for
//! deterministic simulations.

pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
