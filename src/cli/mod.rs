//! CLI layer for movie-rental
//!
//! This module contains the command-line interface:
//!
//! - [`app`] - CLI definitions and entry point
//! - [`commands`] - Command implementations, including the interactive menu

pub mod app;
pub mod commands;

// Re-export main entry point
pub use app::run;
