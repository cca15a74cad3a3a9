pub mod config;
pub mod converter;
pub mod error;
pub mod record;
pub mod sampler;
pub mod samples;
pub mod score;
pub mod stats;

pub use config::{ConvertConfig, MateScores};
pub use converter::Converter;
pub use error::{ConfigError, RecordError, StreamError};
pub use sampler::{RandomSampler, Sampler, StrideSampler};
pub use samples::Sample;
pub use score::GameResult;
pub use stats::ConvertStats;
