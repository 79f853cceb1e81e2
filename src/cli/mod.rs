//! CLI module - Command-line interface for the application.
//!
//! Server side: `serve`, `migrate`. Front-desk side: `signup`, `login`,
//! `logout`, `dashboard`, `queue`, `appointments`, `doctors`.

pub mod args;

pub use args::{Cli, Commands};
