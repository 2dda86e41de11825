//! Wavrec - stream raw PCM to disk and finalize a canonical WAV header.
//!
//! The library centres on [`wav::WavFileWriter`]; the CLI types are exposed
//! here for tools like man page generation.

use clap::{CommandFactory, Parser, Subcommand};

pub mod audio;
pub mod commands;
pub mod error;
pub mod progress;
pub mod verbosity;
pub mod wav;

pub use error::WavError;
pub use progress::Progress;
pub use verbosity::Verbosity;
pub use wav::{WavFileWriter, WavFormat, WavHeader};

#[derive(Parser)]
#[command(name = "wavrec")]
#[command(about = "Stream raw PCM audio into canonical 44-byte-header WAV files")]
#[command(version)]
pub struct Cli {
    /// Suppress all output except errors and requested content
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Show detailed output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Get the clap Command for man page generation.
    pub fn cmd() -> clap::Command {
        <Self as CommandFactory>::command()
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record raw PCM from a file or stdin into a WAV file
    Record(commands::record::RecordArgs),

    /// Print the header fields of a WAV file
    Inspect(commands::inspect::InspectArgs),

    /// Generate shell completions
    Completions(commands::completions::CompletionsArgs),
}
