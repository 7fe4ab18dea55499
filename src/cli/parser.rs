use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rPlantao
/// CLI application to build monthly duty rosters
#[derive(Parser)]
#[command(
    name = "rplantao",
    version = env!("CARGO_PKG_VERSION"),
    about = "Hospital duty rosters: fill night/afternoon/morning shifts, keep a history, export PDF/PNG",
    long_about = None
)]
pub struct Cli {
    /// Override storage directory (useful for tests or a shared folder)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the storage directory
    Init,

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Create a blank roster for a month and save it
    New {
        /// Month (1-12), defaults to the current month
        #[arg(long, short, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        /// Year (2020-2050), defaults to the current year
        #[arg(long, short, value_parser = clap::value_parser!(i32).range(2020..=2050))]
        year: Option<i32>,
    },

    /// Assign personnel to one shift and save as a new record
    Set {
        /// Record identifier (see `list`)
        id: String,

        /// Day of month
        day: u32,

        /// Shift slot: night|afternoon|morning (or noite|tarde|manha)
        slot: String,

        /// Assigned personnel; empty string clears the cell
        text: String,

        #[arg(long, help = "Delete the previous record after saving")]
        replace: bool,
    },

    /// Print a saved roster
    Show { id: String },

    /// List saved rosters, newest first
    List,

    /// Delete a saved roster
    Del {
        id: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Export a saved roster
    Export {
        id: String,

        #[arg(long, value_enum, default_value = "pdf")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a zip archive of every saved roster
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,
    },
}
