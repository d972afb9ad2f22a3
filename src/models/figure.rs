// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Figure data structure.
//!
//! A figure is a named rectangle. It is the only record the editor
//! works with, and it travels between formats as three `Label: value`
//! lines in the fixed order Name, Width, Height.

use crate::error::{Result, StoreError};
use crate::util::lines::{format_line, split_line};
use serde::{Deserialize, Serialize};

pub const NAME_LABEL: &str = "Name";
pub const WIDTH_LABEL: &str = "Width";
pub const HEIGHT_LABEL: &str = "Height";

/// A named rectangle.
///
/// Field order here is the element order of the XML encoding and the
/// key order of the JSON encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "Figure", rename_all = "PascalCase", default)]
pub struct Figure {
    #[serde(alias = "name")]
    pub name: String,
    #[serde(alias = "width")]
    pub width: i32,
    #[serde(alias = "height")]
    pub height: i32,
}

impl Figure {
    /// Create a new figure.
    pub fn new(name: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }

    /// Project the figure onto its three `Label: value` lines.
    pub fn to_lines(&self) -> Vec<String> {
        vec![
            format_line(NAME_LABEL, &self.name),
            format_line(WIDTH_LABEL, self.width),
            format_line(HEIGHT_LABEL, self.height),
        ]
    }

    /// Rebuild a figure from `Label: value` lines.
    ///
    /// Only the first three lines are read, positionally. Labels are not
    /// checked; the value is whatever follows the first colon.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        if lines.len() < 3 {
            return Err(StoreError::malformed(
                lines.len() + 1,
                format!("expected 3 lines, found {}", lines.len()),
            ));
        }

        let name = value_at(lines, 0)?.to_string();
        let width = int_at(lines, 1)?;
        let height = int_at(lines, 2)?;

        Ok(Self {
            name,
            width,
            height,
        })
    }
}

fn value_at<S: AsRef<str>>(lines: &[S], index: usize) -> Result<&str> {
    let line = lines[index].as_ref();
    split_line(line)
        .map(|(_, value)| value)
        .ok_or_else(|| StoreError::malformed(index + 1, format!("missing ':' in {:?}", line)))
}

fn int_at<S: AsRef<str>>(lines: &[S], index: usize) -> Result<i32> {
    let value = value_at(lines, index)?;
    value
        .parse()
        .map_err(|_| StoreError::malformed(index + 1, format!("{:?} is not an integer", value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_lines_order() {
        let figure = Figure::new("Box", 3, 4);
        assert_eq!(figure.to_lines(), vec!["Name: Box", "Width: 3", "Height: 4"]);
    }

    #[test]
    fn test_lines_roundtrip() {
        let figure = Figure::new("Wide box", -2, 40);
        let parsed = Figure::from_lines(&figure.to_lines()).unwrap();
        assert_eq!(parsed, figure);
    }

    #[test]
    fn test_from_lines_ignores_labels_and_extra_lines() {
        let lines = ["Title: Box", "W: 3", "H:4", "Depth: 9"];
        assert_eq!(Figure::from_lines(&lines).unwrap(), Figure::new("Box", 3, 4));
    }

    #[test]
    fn test_from_lines_too_few() {
        let err = Figure::from_lines(&["Name: Box", "Width: 3"]).unwrap_err();
        assert!(matches!(err, StoreError::MalformedRecord { line: 3, .. }));
    }

    #[test]
    fn test_from_lines_missing_colon() {
        let err = Figure::from_lines(&["Name Box", "Width: 3", "Height: 4"]).unwrap_err();
        assert!(matches!(err, StoreError::MalformedRecord { line: 1, .. }));
    }

    #[test]
    fn test_from_lines_non_integer() {
        let err = Figure::from_lines(&["Name: Box", "Width: 3", "Height: tall"]).unwrap_err();
        assert!(matches!(err, StoreError::MalformedRecord { line: 3, .. }));
    }
}
