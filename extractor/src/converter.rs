use indicatif::ProgressBar;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::config::{ConvertConfig, MateScores};
use crate::error::{ConfigError, RecordError, StreamError};
use crate::record::EvalRecord;
use crate::sampler::Sampler;
use crate::samples::Sample;
use crate::score::mate_to_cp;
use crate::stats::ConvertStats;

/// Streams an evaluation dump into sampled `fen | cp | result` lines.
pub struct Converter {
    config: ConvertConfig,
    sampler: Box<dyn Sampler>,
    progress: ProgressBar,
}

impl Converter {
    pub fn new(config: ConvertConfig, sampler: Box<dyn Sampler>) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            config,
            sampler,
            progress: ProgressBar::hidden(),
        })
    }

    /// Track bytes read from the input file on `progress`.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    /// Converts `input` into `output`, truncating any existing output file.
    pub fn run(&mut self, input: &Path, output: &Path) -> Result<ConvertStats, StreamError> {
        let input_file = File::open(input).map_err(|source| StreamError::OpenInput {
            path: input.to_path_buf(),
            source,
        })?;
        let output_file = File::create(output).map_err(|source| StreamError::CreateOutput {
            path: output.to_path_buf(),
            source,
        })?;

        if let Ok(metadata) = input_file.metadata() {
            self.progress.set_length(metadata.len());
        }

        log::info!("Converting {} into {}", input.display(), output.display());

        let reader = BufReader::new(self.progress.wrap_read(input_file));
        let writer = BufWriter::new(output_file);
        let stats = self.convert(reader, writer)?;

        self.progress.finish_and_clear();
        stats.log();
        if stats.written == 0 {
            log::warn!("No samples were written, check the input format and sample rate");
        }
        log::info!("{}", done_message(output));

        Ok(stats)
    }

    /// Converts line by line. Only I/O failures abort; bad records are counted and dropped.
    pub fn convert<R: BufRead, W: Write>(
        &mut self,
        mut reader: R,
        mut writer: W,
    ) -> Result<ConvertStats, StreamError> {
        let mut stats = ConvertStats::default();
        let mut line = Vec::new();

        loop {
            line.clear();
            if reader
                .read_until(b'\n', &mut line)
                .map_err(StreamError::Read)?
                == 0
            {
                break;
            }
            stats.lines_read += 1;

            if !self.sampler.keep() {
                stats.sampled_out += 1;
                continue;
            }

            let sample = std::str::from_utf8(&line)
                .map_err(|_| RecordError::InvalidUtf8)
                .and_then(|line| self.process_line(line));

            match sample {
                Ok(sample) => {
                    sample.write(&mut writer).map_err(StreamError::Write)?;
                    stats.written += 1;

                    if should_report(stats.written, self.config.progress_interval) {
                        self.progress
                            .suspend(|| log::info!("{}", progress_message(stats.written)));
                    }
                }
                Err(e) => {
                    log::trace!("Skipping line {}: {}", stats.lines_read, e);
                    stats.record_skip(&e);
                }
            }
        }

        writer.flush().map_err(StreamError::Write)?;

        Ok(stats)
    }

    /// Turns one input line into a sample, or says why it has to be dropped.
    pub fn process_line(&self, line: &str) -> Result<Sample, RecordError> {
        let record = EvalRecord::parse(line)?;
        let side_to_move = record.side_to_move()?;
        let pv = *record.top_pv()?;

        let cp = match (pv.cp, pv.mate, self.config.mate_scores) {
            (Some(cp), _, _) => cp,
            (None, Some(mate), MateScores::Convert) => {
                mate_to_cp(mate, side_to_move, self.config.max_cp)
            }
            _ => return Err(RecordError::NoCentipawnScore),
        };

        if cp.unsigned_abs() >= self.config.max_cp.unsigned_abs() {
            return Err(RecordError::OutOfRange {
                cp,
                max_cp: self.config.max_cp,
            });
        }

        Ok(Sample::from_cp(record.fen, cp))
    }
}

/// Progress is reported each time `written` reaches a multiple of `interval`.
pub fn should_report(written: usize, interval: usize) -> bool {
    interval > 0 && written > 0 && written % interval == 0
}

pub fn progress_message(written: usize) -> String {
    format!("Written {} entries.", written)
}

pub fn done_message(output: &Path) -> String {
    format!("Done. Output written to {}", output.display())
}
