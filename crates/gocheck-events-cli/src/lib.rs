// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! gocheck-events-cli library
//!
//! This module exports the configuration and stream processing of the
//! `gocheck-events` binary for use in integration tests.

pub mod config;
pub mod report;
