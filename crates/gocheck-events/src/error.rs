// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for gocheck-events

use thiserror::Error;

/// Errors that can occur while delivering events to a sink
#[derive(Debug, Error)]
pub enum ReportError {
    /// Error writing to the underlying transport
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error serializing an event
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
