// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Errors raised by the record store.
//!
//! A missing file and an unsupported extension are not errors: the store
//! logs them and returns an empty result. Everything here is fatal to the
//! editor and propagates up to `main`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The `Label: value` lines could not be turned into a figure.
    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Well-formed tokens in an order no XML document allows.
    #[error("malformed XML: {0}")]
    XmlStructure(String),

    #[error("XML serialization error: {0}")]
    XmlWrite(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
