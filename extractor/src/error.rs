//! Error types for the extractor.
//!
//! Failures are split in two tiers. A [`StreamError`] means the input or
//! output stream itself is unusable and the run has to stop. A
//! [`RecordError`] only concerns a single input line: the converter drops
//! the line, counts the reason and moves on.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StreamError {
    #[error("failed to open input {path:?}: {source}")]
    OpenInput { path: PathBuf, source: io::Error },

    #[error("failed to create output {path:?}: {source}")]
    CreateOutput { path: PathBuf, source: io::Error },

    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),

    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),
}

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("line is not valid UTF-8")]
    InvalidUtf8,

    #[error("malformed record: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("FEN has no side to move: {0:?}")]
    MissingSideToMove(String),

    #[error("record has no evaluations")]
    NoEvaluations,

    #[error("evaluation has no principal variations")]
    NoPrincipalVariation,

    #[error("principal variation has no centipawn score")]
    NoCentipawnScore,

    #[error("score {cp} outside of (-{max_cp}, {max_cp})")]
    OutOfRange { cp: i32, max_cp: i32 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("sample rate must be at least 1")]
    ZeroSampleRate,

    #[error("max cp must be positive, got {0}")]
    NonPositiveMaxCp(i32),
}
