// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Console input and output.
//!
//! The editor talks to the terminal only through [`Console`], so the
//! menu loop can be driven by scripted input in tests.

use anyhow::{bail, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{cursor, execute};
use std::io::{self, BufRead, Write};

/// Blocking console used by the editor loop.
pub trait Console {
    /// Clear the screen and move the cursor to the top-left corner.
    fn clear(&mut self) -> Result<()>;

    /// Write text without a trailing newline.
    fn write(&mut self, text: &str) -> Result<()>;

    /// Block until a single key is pressed.
    fn read_key(&mut self) -> Result<KeyCode>;

    /// Block until a full line is entered. The line terminator is removed.
    fn read_line(&mut self) -> Result<String>;

    /// Write text followed by a newline.
    fn write_line(&mut self, text: &str) -> Result<()> {
        self.write(text)?;
        self.write("\n")
    }
}

/// Console backed by the process terminal.
pub struct TerminalConsole {
    stdout: io::Stdout,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }
}

/// Keeps raw mode on for one key read and restores the terminal on drop.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            log::error!("Failed to disable raw mode: {}", e);
        }
    }
}

impl Console for TerminalConsole {
    fn clear(&mut self) -> Result<()> {
        execute!(self.stdout, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        Ok(())
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.stdout.write_all(text.as_bytes())?;
        self.stdout.flush()?;
        Ok(())
    }

    fn read_key(&mut self) -> Result<KeyCode> {
        let _raw = RawModeGuard::enable()?;
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    log::debug!("Key pressed: {:?}", key.code);
                    return Ok(key.code);
                }
            }
        }
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            bail!("console input closed");
        }
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }
}

#[cfg(test)]
pub mod scripted {
    //! In-memory console for driving the editor in tests.

    use super::*;
    use std::collections::VecDeque;

    /// One scripted input event.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Input {
        Key(KeyCode),
        Line(String),
    }

    /// Console that replays scripted input and records all output.
    #[derive(Default)]
    pub struct ScriptedConsole {
        inputs: VecDeque<Input>,
        pub output: String,
        pub clears: usize,
    }

    impl ScriptedConsole {
        pub fn new(inputs: impl IntoIterator<Item = Input>) -> Self {
            Self {
                inputs: inputs.into_iter().collect(),
                ..Default::default()
            }
        }

        pub fn is_drained(&self) -> bool {
            self.inputs.is_empty()
        }
    }

    pub fn key(c: char) -> Input {
        Input::Key(KeyCode::Char(c))
    }

    pub fn line(text: &str) -> Input {
        Input::Line(text.to_string())
    }

    impl Console for ScriptedConsole {
        fn clear(&mut self) -> Result<()> {
            self.clears += 1;
            Ok(())
        }

        fn write(&mut self, text: &str) -> Result<()> {
            self.output.push_str(text);
            Ok(())
        }

        fn read_key(&mut self) -> Result<KeyCode> {
            match self.inputs.pop_front() {
                Some(Input::Key(code)) => Ok(code),
                other => bail!("expected a key, script has {:?}", other),
            }
        }

        fn read_line(&mut self) -> Result<String> {
            match self.inputs.pop_front() {
                Some(Input::Line(text)) => Ok(text),
                other => bail!("expected a line, script has {:?}", other),
            }
        }
    }
}
