use std::path::PathBuf;

use clap::Parser;
use extractor::config::{MAX_CP, SAMPLE_RATE};

#[derive(Parser, Debug)]
#[command(name = "Evaluation Extractor")]
#[command(author = "Jørgen Hanssen <jorgen@hanssen.io>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Line-delimited JSON evaluation dump.
    #[arg(short, long, default_value = "lichess_db_eval.jsonl")]
    pub input: PathBuf,

    /// Destination for `fen | cp | result` lines. Overwritten if it exists.
    #[arg(short, long, default_value = "bullet_format.txt")]
    pub output: PathBuf,

    /// Drop positions whose absolute centipawn score reaches this value.
    #[arg(long, default_value_t = MAX_CP)]
    pub max_cp: i32,

    /// Keep roughly one in this many input lines.
    #[arg(long, default_value_t = SAMPLE_RATE)]
    pub sample_rate: u32,

    /// Seed for the sampler, for reproducible runs.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Keep every n-th line instead of sampling at random.
    #[arg(long)]
    pub stride: bool,

    /// Keep mate-only evaluations as the largest accepted centipawn score.
    #[arg(long)]
    pub convert_mates: bool,

    /// Write debug logs to a file instead of the console.
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,
}
