//! trialgen — build-time converter for the trial data module.
//!
//! Reads the hand-authored word list, groups it into the four test banks and
//! writes `testData.ts`. The conversion itself lives in [`trialgen_core`];
//! this crate adds the command line, logging and progress output.
//!
//! ```text
//! words_real.ts ──► trialgen_core::pipeline ──► testData.ts
//! ```

pub mod logging;

use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use trialgen_core::{
    config::Config,
    emitter, loader,
    pipeline::{self, Progress},
    Bucket,
};

#[derive(Debug, Parser)]
#[command(
    name = "trialgen",
    about = "Convert the word list into the typed trial data module"
)]
pub struct Cli {
    /// Source word list (default: ../src/data/words_real.ts).
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Generated module path (default: ../src/data/testData.ts).
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// TOML file layered over the built-in defaults.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Render but do not write; fail if the output file is out of date.
    #[arg(long)]
    pub check: bool,

    /// Log pipeline internals to stderr at debug level.
    #[arg(long)]
    pub debug: bool,
}

/// What a run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: PathBuf,
    pub total_read: usize,
    pub counts: [(Bucket, usize); 4],
    /// `false` in `--check` mode.
    pub written: bool,
}

/// Run one conversion as described by `cli`, writing progress lines to `out`.
///
/// Counts are written even when a later stage fails, before the error is
/// returned.
pub fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<Outcome> {
    let config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    let input = cli.input.clone().unwrap_or(config.paths.input);
    let output = cli.output.clone().unwrap_or(config.paths.output);

    let source = loader::load(&input)?;
    let mut events = Vec::new();
    let converted = pipeline::convert(&source, &config.emit, |p| events.push(p));
    for progress in events {
        write_progress(out, progress)?;
    }
    let conversion = converted.with_context(|| format!("converting {}", input.display()))?;

    if cli.check {
        if !emitter::is_up_to_date(&output, &conversion.module)? {
            anyhow::bail!(
                "{} is out of date; rerun trialgen without --check",
                output.display()
            );
        }
        writeln!(out, "{} is up to date", output.display())?;
    } else {
        emitter::write_module(&output, &conversion.module)?;
        writeln!(out, "\nConversion complete: wrote {}", output.display())?;
    }

    Ok(Outcome {
        output,
        total_read: conversion.total_read,
        counts: conversion.trials.counts(),
        written: !cli.check,
    })
}

fn write_progress(out: &mut impl Write, progress: Progress) -> std::io::Result<()> {
    match progress {
        Progress::Read { total } => writeln!(out, "Read {total} records"),
        Progress::Grouped { counts } => {
            for (bucket, n) in counts {
                writeln!(out, "{}: {n} trials", bucket.upper())?;
            }
            Ok(())
        }
    }
}
