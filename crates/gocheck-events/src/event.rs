// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Test event types

use serde::{Deserialize, Serialize};
use std::fmt;

/// MIME type attached to skip reasons
pub const TEXT_PLAIN_UTF8: &str = "text/plain;charset=utf8";

/// Attachment name used for skip reasons
pub const REASON_ATTACHMENT: &str = "reason";

/// Lifecycle status carried by an [`Event`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The test was announced as running
    Exists,
    /// The test passed
    Success,
    /// The test failed
    Fail,
    /// The test was skipped
    Skip,
}

impl Status {
    /// Wire name of the status
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Exists => "exists",
            Self::Success => "success",
            Self::Fail => "fail",
            Self::Skip => "skip",
        }
    }

    /// Whether the status ends a test (anything but `exists`)
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Exists)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named detail blob attached to an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// MIME type of the content
    pub mime: String,
    /// Name of the attachment
    pub name: String,
    /// Raw content
    pub bytes: Vec<u8>,
}

impl Attachment {
    /// Plain-text attachment holding a skip reason
    #[must_use]
    pub fn reason(text: &str) -> Self {
        Self {
            mime: TEXT_PLAIN_UTF8.to_string(),
            name: REASON_ATTACHMENT.to_string(),
            bytes: text.as_bytes().to_vec(),
        }
    }
}

/// One observed test-lifecycle occurrence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Dotted `Suite.Test` identifier
    pub test_id: String,
    /// Observed status
    pub status: Status,
    /// Optional detail (only skip events carry one)
    pub attachment: Option<Attachment>,
}

impl Event {
    /// Create an event without an attachment
    #[must_use]
    pub fn new(test_id: impl Into<String>, status: Status) -> Self {
        Self {
            test_id: test_id.into(),
            status,
            attachment: None,
        }
    }

    /// Attach a detail blob
    #[must_use]
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachment = Some(attachment);
        self
    }

    /// MIME type of the attachment, if any
    #[must_use]
    pub fn mime(&self) -> Option<&str> {
        self.attachment.as_ref().map(|a| a.mime.as_str())
    }

    /// Name of the attachment, if any
    #[must_use]
    pub fn attachment_name(&self) -> Option<&str> {
        self.attachment.as_ref().map(|a| a.name.as_str())
    }

    /// Content of the attachment, if any
    #[must_use]
    pub fn attachment_bytes(&self) -> Option<&[u8]> {
        self.attachment.as_ref().map(|a| a.bytes.as_slice())
    }
}
