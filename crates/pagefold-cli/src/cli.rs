use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Reflow plain text into fixed-size pages and verify paginated output.
#[derive(Debug, Parser)]
#[command(name = "pagefold", about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Reflow a text file into pages and report word statistics
    Paginate {
        /// Path to the input text file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Path to write the paginated text to
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Maximum characters per line
        #[arg(long, value_name = "N")]
        max_chars: usize,

        /// Maximum lines per page
        #[arg(long, value_name = "N")]
        max_lines: usize,

        /// Number of top words to report
        #[arg(long, value_name = "K", default_value_t = 10)]
        top: usize,

        /// Output format for the statistics report
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },

    /// Check previously paginated text against the page bounds
    Verify {
        /// Path to the paginated text file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Maximum characters per line
        #[arg(long, value_name = "N")]
        max_chars: usize,

        /// Maximum lines per page
        #[arg(long, value_name = "N")]
        max_lines: usize,

        /// Output format for the verification report
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },
}

/// Report output format.
#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable text report
    Text,
    /// Machine-readable JSON report
    Json,
}
