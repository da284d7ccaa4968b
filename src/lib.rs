//! # TUI Connect Four
//!
//! Two-player Connect Four in the terminal. The engine is plain owned state;
//! the terminal UI is built with Ratatui over crossterm.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine, snapshot
//! - [`ui`] — Terminal UI: game view, key mapping, app loop
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — File logger installation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
