//! Calendar conflict checker CLI library.
//!
//! This crate provides the CLI interface over `clash-core` and `clash-store`.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands};
pub use config::Config;
