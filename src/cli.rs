use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to a YAML config file.
    /// Credentials can also be set with GITHUB_API_KEY and YOUTUBE_API_KEY.
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Fetch a url and print the item as JSON
    Resolve {
        /// a url
        url: String,

        /// Single-line JSON output
        #[clap(long, default_value = "false")]
        compact: bool,
    },

    /// List providers in dispatch order
    Providers {},

    /// Print which provider would handle a url, without fetching it
    Which {
        /// a url
        url: String,
    },
}
