mod args;

use args::Args;
use clap::Parser;
use extractor::{ConvertConfig, Converter, MateScores};
use indicatif::{ProgressBar, ProgressStyle};
use log::LevelFilter;
use simplelog::{CombinedLogger, Config, SharedLogger, SimpleLogger, WriteLogger};
use std::{error::Error, fs::File};

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;

    let config = ConvertConfig {
        max_cp: args.max_cp,
        sample_rate: args.sample_rate,
        mate_scores: if args.convert_mates {
            MateScores::Convert
        } else {
            MateScores::Ignore
        },
        ..Default::default()
    };

    let sampler = if args.stride {
        config.stride_sampler()
    } else {
        config.random_sampler(args.seed)
    };

    let mut converter = Converter::new(config, sampler)?.with_progress(progress_bar()?);
    converter.run(&args.input, &args.output)?;

    Ok(())
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();

    let log_file = args.log_file.as_ref().map(File::create).transpose()?;
    CombinedLogger::init(loggers(log_file))?;

    Ok(args)
}

/// Progress always goes to the console; a log file additionally gets debug output.
fn loggers(log_file: Option<File>) -> Vec<Box<dyn SharedLogger>> {
    let mut loggers: Vec<Box<dyn SharedLogger>> =
        vec![SimpleLogger::new(LevelFilter::Info, Config::default())];

    if let Some(file) = log_file {
        loggers.push(WriteLogger::new(LevelFilter::Debug, Config::default(), file));
    }

    loggers
}

fn progress_bar() -> Result<ProgressBar, Box<dyn Error>> {
    let bar = ProgressBar::new(0);
    bar.set_style(
        ProgressStyle::default_bar().template(
            " {spinner:.cyan} {elapsed_precise} [{wide_bar:.cyan/blue}] {bytes}/{total_bytes} ({eta})",
        )?,
    );
    Ok(bar)
}
