// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! gocheck-events: turn gocheck test output into structured test events
//!
//! This binary reads gocheck output from a file or stdin and writes one JSON
//! object per recognized test event to a file or stdout.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info, warn};

use gocheck_events_cli::config::Config;
use gocheck_events_cli::report::{exit_code, process};

fn main() -> ExitCode {
    let config = Config::parse();

    // Logs go to stderr; stdout carries the events
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    match run(&config) {
        Ok(code) => code,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> anyhow::Result<ExitCode> {
    config.validate()?;

    let reader: Box<dyn BufRead> = match &config.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let writer: Box<dyn Write> = match &config.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let mut stderr = io::stderr();
    let echo: Option<&mut dyn Write> = if config.echo {
        Some(&mut stderr)
    } else {
        None
    };

    info!("Reading gocheck output...");
    let tally = process(reader, writer, echo).context("Failed to process gocheck output")?;

    info!(
        passed = tally.passed(),
        failed = tally.failed(),
        skipped = tally.skipped(),
        "Gocheck run summarized"
    );
    for test_id in tally.failing_tests() {
        warn!(test_id = %test_id, "Test failed");
    }

    Ok(exit_code(config, &tally))
}
