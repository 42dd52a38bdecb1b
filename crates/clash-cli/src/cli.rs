//! Command-line argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use clash_core::EventId;

use crate::commands::add::AddArgs;
use crate::commands::edit::EditArgs;
use crate::commands::list::ListArgs;

/// Calendar conflict checker.
///
/// Keeps a list of single-day events and reports which ones overlap.
#[derive(Debug, Parser)]
#[command(name = "clash", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the events file, overriding the configured one.
    #[arg(long, global = true)]
    pub events: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every date with overlapping events.
    Conflicts {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show one day's events and its conflict summary.
    Day {
        /// The date to show (YYYY-MM-DD).
        date: NaiveDate,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show one event and the events it overlaps.
    Show {
        /// Event ID.
        id: EventId,
    },

    /// List events, optionally filtered.
    List(ListArgs),

    /// Add an event.
    Add(AddArgs),

    /// Edit an event.
    Edit(EditArgs),

    /// Remove an event.
    Remove {
        /// Event ID.
        id: EventId,
    },

    /// Remove every event.
    Clear,

    /// List the event categories.
    Categories,
}
