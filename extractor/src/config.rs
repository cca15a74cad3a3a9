use crate::error::ConfigError;
use crate::sampler::{RandomSampler, Sampler, StrideSampler};

pub const MAX_CP: i32 = 1500;
pub const SAMPLE_RATE: u32 = 60;

/// What to do with a top PV that only carries a mate score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MateScores {
    /// Drop the line.
    #[default]
    Ignore,
    /// Replace the mate with the largest accepted centipawn score.
    Convert,
}

#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Exclusive bound on the absolute centipawn score of emitted samples.
    pub max_cp: i32,
    /// Keep roughly one in `sample_rate` input lines.
    pub sample_rate: u32,
    pub mate_scores: MateScores,
    /// Log progress every this many written samples.
    pub progress_interval: usize,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            max_cp: MAX_CP,
            sample_rate: SAMPLE_RATE,
            mate_scores: MateScores::Ignore,
            progress_interval: 1000,
        }
    }
}

impl ConvertConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_rate == 0 {
            return Err(ConfigError::ZeroSampleRate);
        }
        if self.max_cp <= 0 {
            return Err(ConfigError::NonPositiveMaxCp(self.max_cp));
        }
        Ok(())
    }

    pub fn random_sampler(&self, seed: Option<u64>) -> Box<dyn Sampler> {
        Box::new(RandomSampler::new(self.sample_rate, seed))
    }

    pub fn stride_sampler(&self) -> Box<dyn Sampler> {
        Box::new(StrideSampler::new(self.sample_rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConvertConfig::default();
        assert_eq!(config.max_cp, 1500);
        assert_eq!(config.sample_rate, 60);
        assert_eq!(config.mate_scores, MateScores::Ignore);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = ConvertConfig {
            sample_rate: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroSampleRate)));

        let config = ConvertConfig {
            max_cp: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveMaxCp(0))
        ));
    }
}
