pub mod init;
pub mod parse;
pub mod period;
pub mod status;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tally",
    about = "Parse and categorize expense data from credit card statements."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Choose a data directory and write the settings file.
    Init {
        /// Path for tally data (default: ~/Documents/tally)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
        /// Name of the person the statements belong to
        #[arg(long)]
        user: Option<String>,
    },
    /// Parse the transactions out of an extracted statement text file.
    Parse {
        /// Path to the statement's extracted text
        file: String,
        /// Output format: table, json, csv
        #[arg(long)]
        format: Option<String>,
        /// Write output to this file instead of stdout
        #[arg(long, short)]
        output: Option<String>,
    },
    /// Show the period a statement covers.
    Period {
        /// Path to the statement's extracted text
        file: String,
    },
    /// Show the current configuration.
    Status,
}
