// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Stream processing for the reporter binary
//!
//! Reads gocheck output line by line, feeds each line to a
//! [`LineEventParser`] wired to a JSON-lines writer and a status tally, and
//! returns the tally once the input is exhausted.

use std::io::{BufRead, Write};
use std::process::ExitCode;

use gocheck_events::{EventSink, JsonLinesSink, LineEventParser, ReportError, StatusTally};
use tracing::debug;

use crate::config::Config;

/// Convert gocheck output from `reader` into JSON-lines events on `writer`
///
/// When `echo` is given, every input line is copied to it verbatim before it
/// is parsed.
///
/// # Errors
///
/// Returns `ReportError::Io` if reading the input, echoing, or flushing the
/// output fails.
pub fn process<R: BufRead, W: Write>(
    mut reader: R,
    writer: W,
    mut echo: Option<&mut dyn Write>,
) -> Result<StatusTally, ReportError> {
    let mut json = JsonLinesSink::new(writer);
    let mut tally = StatusTally::new();
    let mut parser = LineEventParser::new((&mut json, &mut tally));

    let mut line = Vec::new();
    let mut lines_read = 0usize;
    let mut events = 0usize;

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        lines_read += 1;

        if let Some(echo) = echo.as_mut() {
            echo.write_all(&line)?;
        }
        events += parser.write(&line);
    }

    parser.sink_mut().flush()?;
    if let Some(echo) = echo.as_mut() {
        echo.flush()?;
    }

    debug!(lines = lines_read, events, "gocheck output exhausted");
    Ok(tally)
}

/// Exit status for a finished run
///
/// Failed tests only turn into a failing exit status under `--strict`.
#[must_use]
pub fn exit_code(config: &Config, tally: &StatusTally) -> ExitCode {
    if config.strict && !tally.all_passed() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
