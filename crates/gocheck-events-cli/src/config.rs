// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Configuration for the gocheck-events reporter
//!
//! This module provides the command line options of the binary: where gocheck
//! output is read from, where events are written, and logging options.

use std::path::PathBuf;

use clap::Parser;

/// Gocheck events - structured test events from gocheck output
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "gocheck-events")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Path to a file holding gocheck output
    ///
    /// Defaults to reading stdin, so the reporter can sit at the end of a pipe:
    ///   go test ./... -check.vv | gocheck-events
    #[arg(short, long, env = "GOCHECK_EVENTS_INPUT")]
    pub input: Option<PathBuf>,

    /// Path to write JSON-lines events to
    ///
    /// The file is created or truncated. Defaults to stdout.
    #[arg(short, long, env = "GOCHECK_EVENTS_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Copy the raw gocheck output to stderr while parsing
    #[arg(long, default_value = "false")]
    pub echo: bool,

    /// Exit with a non-zero status when any test failed
    #[arg(long, default_value = "false")]
    pub strict: bool,

    /// Enable verbose logging (debug level)
    ///
    /// Logs every recognized event. Logs are written to stderr so they never
    /// mix with events on stdout.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Config {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the input path is specified but doesn't exist or
    /// is not a regular file.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref input) = self.input {
            if !input.exists() {
                return Err(ConfigError::InputNotFound(input.clone()));
            }
            if !input.is_file() {
                return Err(ConfigError::InputNotFile(input.clone()));
            }
        }
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Input path not found
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    /// Input path is not a regular file
    #[error("Input path is not a file: {0}")]
    InputNotFile(PathBuf),
}
