use crate::error::RecordError;

/// Per-run counters. Every input line ends up in exactly one bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertStats {
    pub lines_read: usize,
    pub sampled_out: usize,
    pub written: usize,
    pub malformed: usize,
    pub no_side_to_move: usize,
    pub no_evaluation: usize,
    pub no_cp: usize,
    pub out_of_range: usize,
}

impl ConvertStats {
    pub fn record_skip(&mut self, error: &RecordError) {
        match error {
            RecordError::InvalidUtf8 | RecordError::Malformed(_) => self.malformed += 1,
            RecordError::MissingSideToMove(_) => self.no_side_to_move += 1,
            RecordError::NoEvaluations | RecordError::NoPrincipalVariation => {
                self.no_evaluation += 1
            }
            RecordError::NoCentipawnScore => self.no_cp += 1,
            RecordError::OutOfRange { .. } => self.out_of_range += 1,
        }
    }

    pub fn skipped(&self) -> usize {
        self.malformed + self.no_side_to_move + self.no_evaluation + self.no_cp + self.out_of_range
    }

    pub fn log(&self) {
        let sampled = self.lines_read - self.sampled_out;
        let kept_percentage = if sampled > 0 {
            (self.written as f64 / sampled as f64) * 100.0
        } else {
            0.0
        };

        log::info!("Lines read: {}", self.lines_read);
        log::info!("Lines sampled: {}", sampled);
        log::info!("Samples written: {} ({:.2}% of sampled)", self.written, kept_percentage);
        log::info!(
            "Skipped: {} malformed, {} without side to move, {} without evaluation, {} without cp, {} out of range",
            self.malformed,
            self.no_side_to_move,
            self.no_evaluation,
            self.no_cp,
            self.out_of_range
        );
    }
}
