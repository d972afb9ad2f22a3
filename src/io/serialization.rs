// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Figure serialization and deserialization.
//!
//! This module handles converting file contents in text, JSON and XML
//! formats to and from `Label: value` lines. It does no file I/O.

use crate::error::{Result, StoreError};
use crate::models::figure::Figure;
use crate::util::lines::format_line;
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Serialize;
use std::path::Path;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

/// Supported file formats, selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
    Xml,
}

impl Format {
    /// Pick the format from the extension of `path`, ignoring case.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            "xml" => Some(Self::Xml),
            _ => None,
        }
    }

    /// Turn file contents into `Label: value` lines.
    pub fn decode(self, contents: &str) -> Result<Vec<String>> {
        match self {
            Self::Text => Ok(contents.lines().map(str::to_string).collect()),
            Self::Json => {
                let figure: Figure = serde_json::from_str(contents)?;
                Ok(figure.to_lines())
            }
            Self::Xml => xml_to_lines(contents),
        }
    }

    /// Turn `Label: value` lines into file contents.
    ///
    /// Text is written verbatim; JSON and XML rebuild a figure first, so
    /// their lines must parse.
    pub fn encode<S: AsRef<str>>(self, lines: &[S]) -> Result<String> {
        match self {
            Self::Text => Ok(lines
                .iter()
                .map(|line| format!("{}\n", line.as_ref()))
                .collect()),
            Self::Json => {
                let figure = Figure::from_lines(lines)?;
                Ok(serde_json::to_string_pretty(&figure)?)
            }
            Self::Xml => {
                let figure = Figure::from_lines(lines)?;
                figure_to_xml(&figure)
            }
        }
    }
}

fn figure_to_xml(figure: &Figure) -> Result<String> {
    let mut body = String::new();
    let mut serializer = quick_xml::se::Serializer::new(&mut body);
    serializer.indent(' ', 2);
    figure
        .serialize(serializer)
        .map_err(|e| StoreError::XmlWrite(Box::new(e)))?;
    Ok(format!("{}\n{}\n", XML_DECLARATION, body))
}

/// Child of the root element currently being collected.
struct OpenChild {
    label: String,
    text: String,
}

fn element_name(name: quick_xml::name::QName) -> String {
    String::from_utf8_lossy(name.as_ref()).into_owned()
}

fn misplaced(what: &str) -> StoreError {
    StoreError::XmlStructure(format!("{} outside the root element", what))
}

/// Project the root element's immediate children onto `Label: value` lines.
///
/// Elements give `tag: inner text`, where inner text is all descendant
/// text joined unchanged. Whitespace-only text is dropped at every depth.
/// Loose text, CDATA and comments directly under the root are labelled
/// `#text`, `#cdata-section` and `#comment`. The document must have
/// exactly one root element.
fn xml_to_lines(contents: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(contents);

    let mut lines = Vec::new();
    let mut depth = 0usize;
    let mut root_seen = false;
    let mut child: Option<OpenChild> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                if depth == 0 {
                    if root_seen {
                        return Err(misplaced("element"));
                    }
                    root_seen = true;
                } else if depth == 1 {
                    child = Some(OpenChild {
                        label: element_name(start.name()),
                        text: String::new(),
                    });
                }
                depth += 1;
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                if depth == 1 {
                    if let Some(done) = child.take() {
                        lines.push(format_line(&done.label, &done.text));
                    }
                }
            }
            Event::Empty(empty) => match depth {
                0 if root_seen => return Err(misplaced("element")),
                0 => root_seen = true,
                1 => lines.push(format_line(&element_name(empty.name()), "")),
                _ => {}
            },
            Event::Text(text) => {
                let text = text.unescape().map_err(quick_xml::Error::from)?;
                if text.trim().is_empty() {
                    continue;
                }
                match (&mut child, depth) {
                    (_, 0) => return Err(misplaced("text")),
                    (Some(open), d) if d >= 2 => open.text.push_str(&text),
                    (_, 1) => lines.push(format_line("#text", &text)),
                    _ => {}
                }
            }
            Event::CData(cdata) => {
                let text = String::from_utf8_lossy(&cdata).into_owned();
                match (&mut child, depth) {
                    (_, 0) => return Err(misplaced("CDATA")),
                    (Some(open), d) if d >= 2 => open.text.push_str(&text),
                    (_, 1) => lines.push(format_line("#cdata-section", &text)),
                    _ => {}
                }
            }
            Event::Comment(comment) if depth == 1 => {
                lines.push(format_line("#comment", String::from_utf8_lossy(&comment)));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !root_seen {
        return Err(StoreError::XmlStructure("no root element".to_string()));
    }
    if depth != 0 {
        return Err(StoreError::XmlStructure("unexpected end of document".to_string()));
    }

    Ok(lines)
}
