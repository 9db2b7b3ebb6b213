use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Decompose ASCII rectangle figures and run the other kata utilities.
#[derive(Debug, Parser)]
#[command(name = "asciifig", about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Decompose a figure into its elementary rectangles
    Rects {
        /// Path to the figure file, or '-' for stdin
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Parse a 3-row ASCII digit blob into its numeric value
    Ocr {
        /// Path to the digit blob, or '-' for stdin
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Wrap text greedily at word boundaries
    Wrap {
        /// Path to the text file, or '-' for stdin
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Maximum line width in characters
        #[arg(long)]
        columns: usize,
    },

    /// Classify a five-card poker hand
    Poker {
        /// The five cards, e.g. 4♥ 5♥ 6♥ 7♥ 8♥
        #[arg(value_name = "CARD", num_args = 5)]
        cards: Vec<String>,
    },

    /// Search for a word along a snaking path in a character grid
    Search {
        /// Path to the puzzle grid, or '-' for stdin
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// The word to search for
        #[arg(value_name = "WORD")]
        word: String,
    },

    /// Print all permutations of a string of distinct characters
    Permute {
        /// The characters to permute
        #[arg(value_name = "CHARS")]
        chars: String,
    },

    /// Compute the maximum profit over a sequence of stock quotes
    Profit {
        /// Daily prices in date order
        #[arg(value_name = "PRICE", num_args = 1..)]
        prices: Vec<f64>,
    },

    /// Assign short codes to URLs with an in-process shortener
    Shorten {
        /// URLs to encode, in order
        #[arg(value_name = "URL", num_args = 1..)]
        urls: Vec<String>,
    },
}

/// Output format for structured subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON
    Json,
}
