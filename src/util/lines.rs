// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! `Label: value` line helpers.
//!
//! Every file format is projected onto these lines when loaded, and
//! rebuilt from them when saved.

/// Format a single `Label: value` line.
pub fn format_line(label: &str, value: impl std::fmt::Display) -> String {
    format!("{}: {}", label, value)
}

/// Split a line on its first `:` and trim both halves.
///
/// Returns `None` when the line has no colon.
pub fn split_line(line: &str) -> Option<(&str, &str)> {
    line.split_once(':')
        .map(|(label, value)| (label.trim(), value.trim()))
}
