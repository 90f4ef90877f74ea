use clap::{ArgAction, Parser, Subcommand};

/// CLI arguments for penamap
#[derive(Debug, Parser)]
#[command(
    name = "penamap",
    version,
    about = "CLI for querying the peñas place store and exercising the search controller"
)]
pub struct CliArgs {
    /// Path to a KML-as-JSON dataset (.json or .json.gz). Defaults to the bundled places
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Drop malformed placemarks with a warning instead of failing
    #[arg(long = "skip-invalid", global = true)]
    pub skip_invalid: bool,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the place store
    Stats,

    /// List all places with category and coordinate
    Places,

    /// List autocomplete suggestions for a query
    Search {
        /// Substring to search (case-insensitive)
        query: String,
    },

    /// Classify a name into its marker category
    Classify {
        /// Place name, e.g. "Parada Bus Centro"
        name: String,
    },

    /// Select a place by name and print the resulting map scene as JSON
    Show {
        /// Exact place name
        name: String,
    },
}
