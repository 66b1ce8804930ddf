//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use dextrack_core::PokemonType;
use dextrack_lib::{EntryFilter, SortOrder};

#[derive(Parser)]
#[command(name = "dextrack")]
#[command(about = "Browse the national dex and track your collection", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory for the response cache and collection (overrides settings)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show one entry in detail
    Show {
        /// Dex number or name (e.g., 25, pikachu)
        entry: String,

        /// Also list alternate forms
        #[arg(long)]
        forms: bool,
    },

    /// List a generation's entries
    #[command(name = "gen")]
    Generation {
        /// Generation number (1-9) or region name (e.g., johto); omit to
        /// list all generations
        generation: Option<String>,

        /// Which entries to show: all, owned, missing, favorites
        #[arg(short, long, default_value_t = EntryFilter::All)]
        filter: EntryFilter,

        /// Sort order: number, name, type
        #[arg(short, long, default_value_t = SortOrder::Number)]
        sort: SortOrder,

        /// Only show entries of this type (e.g., fire)
        #[arg(short = 't', long = "type")]
        kind: Option<PokemonType>,
    },

    /// Search by dex number or name fragment
    Search {
        query: String,
    },

    /// Toggle whether an entry is owned
    Own {
        /// Dex number or name
        entry: String,
    },

    /// Toggle whether an owned entry is a favorite
    Fav {
        /// Dex number or name
        entry: String,
    },

    /// Show collection progress overall and per generation
    Stats,

    /// List recently viewed entries
    Recent,

    /// List alternate forms of a species
    Forms {
        /// Dex number or species name
        entry: String,
    },

    /// Manage the response cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },

    /// Inspect settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum CacheAction {
    /// Show record counts and size
    Info,

    /// Remove every cached response
    Clear,
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show effective settings
    Show,

    /// Print the settings file path
    Path,
}

#[cfg(test)]
#[path = "tests/cli_types_tests.rs"]
mod tests;
