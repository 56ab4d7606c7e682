// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Gocheck output parsing
//!
//! This module turns the line-oriented output of the gocheck test runner into
//! [`Event`]s. Four line shapes are recognized:
//!
//! ```text
//! ****** Running suite.TestName
//! PASS: /path/to/file_test.go:34: suite.TestName      0.005s
//! FAIL: /path/to/file_test.go:85: suite.TestName
//! SKIP: /path/to/file_test.go:36: suite.TestName (reason)
//! ```
//!
//! Every other line is ignored. Lines are classified independently; the parser
//! does not pair a `Running` announcement with its outcome.
//!
//! # Example
//!
//! ```
//! use gocheck_events::parser::LineEventParser;
//! use gocheck_events::sink::RecordingSink;
//!
//! let mut parser = LineEventParser::new(RecordingSink::new());
//! parser.write(b"FAIL: /tmp/job/apt_test.go:85: suite.TestFail\n");
//! assert_eq!(parser.sink().events()[0].test_id, "suite.TestFail");
//! ```

use std::io;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::{debug, trace, warn};

use crate::event::{Attachment, Event, Status};
use crate::sink::EventSink;

// ============================================================================
// Grammar table
// ============================================================================

/// One recognized line shape and the event it produces
struct Grammar {
    pattern: Regex,
    build: fn(&Captures<'_>) -> Event,
}

impl Grammar {
    fn new(pattern: &str, build: fn(&Captures<'_>) -> Event) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("grammar pattern must compile"),
            build,
        }
    }
}

// The path is matched lazily up to the first `.go:<line>: ` so free text
// after the test id (a skip reason) can never move the id.
static GRAMMARS: LazyLock<[Grammar; 4]> = LazyLock::new(|| {
    [
        Grammar::new(r"^\*{6} Running (\S+)\s*$", |caps| {
            Event::new(&caps[1], Status::Exists)
        }),
        Grammar::new(r"^PASS: .*?\.go:\d+: (\S+)\s+\d+(?:\.\d+)?s\s*$", |caps| {
            Event::new(&caps[1], Status::Success)
        }),
        Grammar::new(r"^FAIL: .*?\.go:\d+: (\S+)\s*$", |caps| {
            Event::new(&caps[1], Status::Fail)
        }),
        Grammar::new(r"^SKIP: .*?\.go:\d+: (\S+) \((.*)\)\s*$", |caps| {
            Event::new(&caps[1], Status::Skip).with_attachment(Attachment::reason(&caps[2]))
        }),
    ]
});

/// Classify a single line of gocheck output
///
/// Returns `None` when the line matches none of the known shapes.
#[must_use]
pub fn classify_line(line: &str) -> Option<Event> {
    GRAMMARS.iter().find_map(|grammar| {
        grammar
            .pattern
            .captures(line)
            .map(|caps| (grammar.build)(&caps))
    })
}

// ============================================================================
// Parser
// ============================================================================

/// Parser forwarding recognized gocheck lines to an [`EventSink`]
pub struct LineEventParser<S: EventSink> {
    sink: S,
}

impl<S: EventSink> LineEventParser<S> {
    /// Create a parser delivering events to `sink`
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Borrow the sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutably borrow the sink
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the parser and return the sink
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Parse a chunk of output
    ///
    /// Each recognized line produces exactly one call to the sink. Unrecognized
    /// lines are skipped silently, and a sink error is logged without stopping
    /// the remaining lines. A chunk is not joined with the previous one, so a
    /// line split across two writes is classified as two partial lines.
    ///
    /// Returns the number of events handed to the sink.
    pub fn write(&mut self, data: &[u8]) -> usize {
        self.process(data)
    }

    fn process(&mut self, data: &[u8]) -> usize {
        let text = String::from_utf8_lossy(data);
        let mut emitted = 0;

        for line in text.lines() {
            let Some(event) = classify_line(line) else {
                if !line.trim().is_empty() {
                    trace!(line, "unrecognized gocheck line");
                }
                continue;
            };

            debug!(test_id = %event.test_id, status = %event.status, "gocheck event");
            if let Err(error) = self.sink.status(&event) {
                warn!(%error, test_id = %event.test_id, "sink rejected event");
            }
            emitted += 1;
        }

        emitted
    }
}

/// Each `write` call is classified on its own, like [`LineEventParser::write`].
/// Callers must hand over whole lines: `write!` with interpolated arguments may
/// split one line across several calls, and the pieces then match nothing.
impl<S: EventSink> io::Write for LineEventParser<S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.process(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.sink.flush().map_err(io::Error::other)
    }
}
