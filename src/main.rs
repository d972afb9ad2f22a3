// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! FIGEDIT - Figure Editor
//!
//! A console editor for a single named rectangle stored as a text,
//! JSON or XML file.

mod app;
mod error;
mod io;
mod models;
mod ui;
mod util;

use anyhow::Result;
use app::EditorApp;
use ui::console::TerminalConsole;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Run the editor until Escape; errors end the process non-zero
    EditorApp::new(TerminalConsole::new()).run()
}
