// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Integration tests for the gocheck-events command line
//!
//! These tests cover flag parsing and the end-to-end conversion of a captured
//! gocheck run into JSON-lines events.

use std::io::Cursor;
use std::path::PathBuf;

use clap::Parser;
use gocheck_events_cli::config::Config;
use gocheck_events_cli::report::process;
use similar_asserts::assert_eq;
use tracing::Level;

const RUN: &str = "\
****** Running snapSuite.TestInstall
PASS: /home/ubuntu/src/snappy/integration-tests/tests/snap_test.go:41: snapSuite.TestInstall	1.204s
****** Running snapSuite.TestRemove
snap remove hello-world
error: cannot remove \"hello-world\": snap not installed
FAIL: /home/ubuntu/src/snappy/integration-tests/tests/snap_test.go:77: snapSuite.TestRemove
****** Running snapSuite.TestRollback
SKIP: /home/ubuntu/src/snappy/integration-tests/tests/snap_test.go:102: snapSuite.TestRollback (rollback needs two revisions)
OOPS: 1 passed, 1 skipped, 1 FAILED
";

// ============================================================================
// Flag parsing
// ============================================================================

#[test]
fn test_no_flags() {
    let config = Config::try_parse_from(["gocheck-events"]).expect("parse should succeed");
    assert!(config.input.is_none());
    assert!(config.output.is_none());
    assert_eq!(config.log_level(), Level::INFO);
}

#[test]
fn test_input_and_output_flags() {
    let config = Config::try_parse_from([
        "gocheck-events",
        "--input",
        "/tmp/gocheck.log",
        "-o",
        "/tmp/events.jsonl",
    ])
    .expect("parse should succeed");
    assert_eq!(config.input, Some(PathBuf::from("/tmp/gocheck.log")));
    assert_eq!(config.output, Some(PathBuf::from("/tmp/events.jsonl")));
}

#[test]
fn test_echo_and_strict_flags() {
    let config = Config::try_parse_from(["gocheck-events", "--echo", "--strict"])
        .expect("parse should succeed");
    assert!(config.echo);
    assert!(config.strict);
}

#[test]
fn test_quiet_short_flag() {
    let config = Config::try_parse_from(["gocheck-events", "-q"]).expect("parse should succeed");
    assert_eq!(config.log_level(), Level::WARN);
}

#[test]
fn test_verbose_flag_value_syntax_not_supported() {
    let result = Config::try_parse_from(["gocheck-events", "--verbose=true"]);
    assert!(result.is_err(), "Boolean flags don't support =value syntax");
}

#[test]
fn test_unknown_flag_rejected() {
    let result = Config::try_parse_from(["gocheck-events", "--format", "subunit"]);
    assert!(result.is_err());
}

// ============================================================================
// End-to-end processing
// ============================================================================

#[test]
fn test_process_captured_run() {
    let mut out = Vec::new();
    let tally = process(Cursor::new(RUN), &mut out, None).expect("Should process");

    assert_eq!(tally.exists(), 3);
    assert_eq!(tally.passed(), 1);
    assert_eq!(tally.failed(), 1);
    assert_eq!(tally.skipped(), 1);
    assert!(!tally.all_passed());

    let text = String::from_utf8(out).expect("Should be UTF-8");
    let records: Vec<serde_json::Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).expect("Each line should be JSON"))
        .collect();

    let summary: Vec<(&str, &str)> = records
        .iter()
        .map(|r| {
            (
                r["test_id"].as_str().expect("test_id is a string"),
                r["status"].as_str().expect("status is a string"),
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            ("snapSuite.TestInstall", "exists"),
            ("snapSuite.TestInstall", "success"),
            ("snapSuite.TestRemove", "exists"),
            ("snapSuite.TestRemove", "fail"),
            ("snapSuite.TestRollback", "exists"),
            ("snapSuite.TestRollback", "skip"),
        ]
    );
    assert_eq!(records[5]["attachment"], "rollback needs two revisions");
    assert_eq!(records[5]["mime"], "text/plain;charset=utf8");
}

#[test]
fn test_process_line_endings() {
    let input = RUN.replace('\n', "\r\n");
    let mut out = Vec::new();
    let tally = process(Cursor::new(input), &mut out, None).expect("Should process");
    assert_eq!(tally.total_finished(), 3);
}
