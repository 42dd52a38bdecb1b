//! CLI subcommand implementations.

pub mod add;
pub mod categories;
pub mod clear;
pub mod conflicts;
pub mod day;
pub mod edit;
pub mod list;
pub mod remove;
pub mod show;
pub mod util;

#[cfg(test)]
mod fixtures;
