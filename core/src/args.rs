use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "sable")]
#[command(version)]
pub struct Args {
    /// Position to search, as a FEN string. Defaults to the starting
    /// position.
    #[arg(short, long)]
    pub fen: Option<String>,

    /// Search depth in plies.
    #[arg(short, long, default_value_t = 3)]
    pub depth: u8,

    /// Valuation cache file. Created on the first run if absent.
    #[arg(short, long, default_value = "sable-cache.bin")]
    pub cache: PathBuf,

    /// Classifier artifact (safetensors). When given, positions are
    /// scored by the model instead of the heuristic terms.
    #[arg(short, long)]
    pub model: Option<PathBuf>,

    /// Write debug logs to this file instead of logging to the terminal.
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,
}
