// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Event sinks
//!
//! An [`EventSink`] receives every event the parser recognizes. The crate ships
//! a recording double for tests, a JSON-lines transport for production use and
//! a tally that aggregates statuses. Sinks compose: `&mut S` is a sink, and a
//! pair `(A, B)` forwards each event to both members.

use std::borrow::Cow;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::ReportError;
use crate::event::{Event, Status};

/// Destination for parsed test events
pub trait EventSink {
    /// Deliver one event
    ///
    /// # Errors
    ///
    /// Returns an error if the event could not be delivered downstream.
    fn status(&mut self, event: &Event) -> Result<(), ReportError>;

    /// Flush any buffered output
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying transport fails to flush.
    fn flush(&mut self) -> Result<(), ReportError> {
        Ok(())
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn status(&mut self, event: &Event) -> Result<(), ReportError> {
        (**self).status(event)
    }

    fn flush(&mut self) -> Result<(), ReportError> {
        (**self).flush()
    }
}

impl<A: EventSink, B: EventSink> EventSink for (A, B) {
    fn status(&mut self, event: &Event) -> Result<(), ReportError> {
        // Both sinks see the event even if the first one fails.
        let first = self.0.status(event);
        let second = self.1.status(event);
        first.and(second)
    }

    fn flush(&mut self) -> Result<(), ReportError> {
        let first = self.0.flush();
        let second = self.1.flush();
        first.and(second)
    }
}

// ============================================================================
// Recording sink
// ============================================================================

/// Sink that keeps every event it receives
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Vec<Event>,
}

impl RecordingSink {
    /// Create an empty recording sink
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events received so far, in arrival order
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Number of events received
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no event has been received
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Forget all recorded events
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Take the recorded events, leaving the sink empty
    pub fn take(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}

impl EventSink for RecordingSink {
    fn status(&mut self, event: &Event) -> Result<(), ReportError> {
        self.events.push(event.clone());
        Ok(())
    }
}

// ============================================================================
// JSON lines sink
// ============================================================================

/// Wire form of an event written by [`JsonLinesSink`]
#[derive(Debug, Serialize)]
struct EventRecord<'a> {
    test_id: &'a str,
    status: Status,
    timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mime: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attachment_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attachment: Option<Cow<'a, str>>,
}

impl<'a> EventRecord<'a> {
    fn new(event: &'a Event, timestamp: DateTime<Utc>) -> Self {
        Self {
            test_id: &event.test_id,
            status: event.status,
            timestamp,
            mime: event.mime(),
            attachment_name: event.attachment_name(),
            attachment: event.attachment_bytes().map(String::from_utf8_lossy),
        }
    }
}

/// Sink writing one JSON object per line to a writer
///
/// Each record carries the test id, status, the UTC time the event was
/// written and, for skips, the attachment as text.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    /// Wrap a writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> EventSink for JsonLinesSink<W> {
    fn status(&mut self, event: &Event) -> Result<(), ReportError> {
        let record = EventRecord::new(event, Utc::now());
        serde_json::to_writer(&mut self.writer, &record)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), ReportError> {
        self.writer.flush()?;
        Ok(())
    }
}

// ============================================================================
// Status tally
// ============================================================================

/// Sink counting events per status
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusTally {
    exists: usize,
    passed: usize,
    failed: usize,
    skipped: usize,
    failing: Vec<String>,
}

impl StatusTally {
    /// Create an empty tally
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `exists` events
    #[must_use]
    pub fn exists(&self) -> usize {
        self.exists
    }

    /// Number of `success` events
    #[must_use]
    pub fn passed(&self) -> usize {
        self.passed
    }

    /// Number of `fail` events
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Number of `skip` events
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Number of terminal events (success, fail, skip)
    #[must_use]
    pub fn total_finished(&self) -> usize {
        self.passed + self.failed + self.skipped
    }

    /// Check if no test failed
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Ids of failed tests in the order they were reported
    #[must_use]
    pub fn failing_tests(&self) -> &[String] {
        &self.failing
    }
}

impl EventSink for StatusTally {
    fn status(&mut self, event: &Event) -> Result<(), ReportError> {
        match event.status {
            Status::Exists => self.exists += 1,
            Status::Success => self.passed += 1,
            Status::Fail => {
                self.failed += 1;
                self.failing.push(event.test_id.clone());
            }
            Status::Skip => self.skipped += 1,
        }
        Ok(())
    }
}
