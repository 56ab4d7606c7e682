// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for the line parser
//!
//! Arbitrary bytes go through `LineEventParser::write`, which must never panic
//! and must only emit events with a non-empty test id.

#![no_main]

use libfuzzer_sys::fuzz_target;

use gocheck_events::{LineEventParser, RecordingSink};

fuzz_target!(|data: &[u8]| {
    let mut parser = LineEventParser::new(RecordingSink::new());
    let emitted = parser.write(data);

    let events = parser.into_sink().take();
    assert_eq!(emitted, events.len());
    assert!(events.iter().all(|e| !e.test_id.is_empty()));
});
