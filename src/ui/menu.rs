// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Menu screens.
//!
//! Plain text screens shown by the editor loop. Rendering only; key
//! handling lives in the app.

use super::console::Console;
use crate::models::figure::Figure;
use anyhow::Result;

pub const PATH_PROMPT: &str = "Enter file path: ";
pub const SAVED_MESSAGE: &str = "File saved successfully.";

/// Show the current figure's fields followed by a blank line.
pub fn show_figure(console: &mut impl Console, figure: &Figure) -> Result<()> {
    for line in figure.to_lines() {
        console.write_line(&line)?;
    }
    console.write_line("")
}

/// Show the main menu options.
pub fn show_main(console: &mut impl Console) -> Result<()> {
    console.write_line("Options:")?;
    console.write_line("1. Edit Figure")?;
    console.write_line("2. Save (F1)")?;
    console.write_line("3. Exit (Escape)")
}

/// Show the edit submenu options.
pub fn show_edit(console: &mut impl Console) -> Result<()> {
    console.write_line("Edit Figure:")?;
    console.write_line("1. Name")?;
    console.write_line("2. Width")?;
    console.write_line("3. Height")?;
    console.write_line("4. Back")
}

/// Prompt for a new field value on the same line.
pub fn prompt_field(console: &mut impl Console, label: &str) -> Result<()> {
    console.write(&format!("Enter new {}: ", label))
}
