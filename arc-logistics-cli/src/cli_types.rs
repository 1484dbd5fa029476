//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use arc_logistics_lib::catalog::Rarity;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "arc-logistics")]
#[command(about = "Track ARC Raiders project and workshop progress", long_about = None)]
pub(crate) struct Cli {
    /// Catalog YAML file to use instead of the built-in catalog
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Directory for saved progress (default: platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show project progress and workshop levels
    Status,

    /// Show materials needed for the next phase and next workshop levels
    List {
        /// Only show items of this rarity (common, uncommon, rare, epic, legendary)
        #[arg(long)]
        rarity: Option<Rarity>,
    },

    /// Look up whether an item is still needed or safe to sell
    Search {
        /// Item name or part of one (e.g., wires, "metal parts")
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Update expedition project progress
    Phase {
        #[command(subcommand)]
        action: PhaseAction,
    },

    /// Update workshop levels
    Workshop {
        #[command(subcommand)]
        action: WorkshopAction,
    },

    /// Reset all progress to the starting state
    Reset {
        /// Confirm the reset (required; without this, shows a warning only)
        #[arg(long)]
        confirm: bool,
    },

    /// Inspect catalog data
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum PhaseAction {
    /// Mark the current goal phase as completed
    Complete,

    /// Step back one phase
    Undo,

    /// Set the number of completed phases (clamped to the valid range)
    Set {
        #[arg(allow_negative_numbers = true)]
        phase: i64,
    },
}

#[derive(Subcommand)]
pub(crate) enum WorkshopAction {
    /// List workshops with their current level
    List,

    /// Raise a workshop by one level
    Up {
        /// Workshop id or name (e.g., gunsmith, "gear bench")
        workshop: String,
    },

    /// Lower a workshop by one level
    Down {
        /// Workshop id or name
        workshop: String,
    },

    /// Set a workshop's level (clamped to the valid range)
    Set {
        /// Workshop id or name
        workshop: String,

        #[arg(allow_negative_numbers = true)]
        level: i64,
    },
}

#[derive(Subcommand)]
pub(crate) enum CatalogAction {
    /// Print every phase and workshop level with its requirements
    Show,

    /// Check a catalog file for structural problems
    Validate {
        /// Catalog YAML file (default: the active catalog)
        path: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show current settings and file locations
    Show,

    /// Print the settings file path
    Path,

    /// Use a catalog file by default
    SetCatalog {
        path: PathBuf,
    },

    /// Go back to the built-in catalog
    ClearCatalog,
}
