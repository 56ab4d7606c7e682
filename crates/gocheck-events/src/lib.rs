// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! gocheck-events: structured test events from gocheck output
//!
//! This library crate reads the line-oriented output of the gocheck test runner
//! and translates recognized status lines (`****** Running`, `PASS:`, `FAIL:`,
//! `SKIP:`) into [`Event`]s delivered to an [`EventSink`].
//!
//! # Example
//!
//! ```
//! use gocheck_events::prelude::*;
//!
//! let mut parser = LineEventParser::new(RecordingSink::new());
//! parser.write(b"SKIP: /tmp/job/info_test.go:36: suite.TestSkip (no network)\n");
//!
//! let event = &parser.sink().events()[0];
//! assert_eq!(event.status, Status::Skip);
//! assert_eq!(event.attachment_bytes(), Some(&b"no network"[..]));
//! ```

pub mod error;
pub mod event;
pub mod parser;
pub mod sink;

pub use error::ReportError;
pub use event::{Attachment, Event, Status};
pub use parser::{LineEventParser, classify_line};
pub use sink::{EventSink, JsonLinesSink, RecordingSink, StatusTally};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::ReportError;
    pub use crate::event::{Event, Status};
    pub use crate::parser::LineEventParser;
    pub use crate::sink::{EventSink, RecordingSink};
}
