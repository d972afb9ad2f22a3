// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main editor state and menu loop.
//!
//! This module contains the editor structure that owns the current
//! figure and file path, and moves between screens one keypress at a
//! time, asking the store to load and save along the way.

use crate::io::store;
use crate::models::figure::{Figure, HEIGHT_LABEL, NAME_LABEL, WIDTH_LABEL};
use crate::ui::console::Console;
use crate::ui::menu;
use anyhow::{Context, Result};
use crossterm::event::KeyCode;
use std::path::PathBuf;

/// Screen the editor is currently on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Waiting for the file path to edit
    AwaitPath,
    /// Reload, show the figure and the main options
    MainMenu,
    /// Choose a field to change
    EditMenu,
    /// Escape was pressed
    Exit,
}

/// Main editor state.
pub struct EditorApp<C: Console> {
    console: C,

    /// In-memory figure, replaced on every reload that finds a record
    figure: Figure,

    /// File being edited, set once on the path screen
    path: PathBuf,

    screen: Screen,
}

impl<C: Console> EditorApp<C> {
    /// Create a new editor on the path prompt.
    pub fn new(console: C) -> Self {
        Self {
            console,
            figure: Figure::default(),
            path: PathBuf::new(),
            screen: Screen::AwaitPath,
        }
    }

    /// Run screens until Escape is pressed.
    ///
    /// Any error ends the loop and is returned without further output.
    pub fn run(&mut self) -> Result<()> {
        while self.screen != Screen::Exit {
            log::debug!("Entering {:?}", self.screen);
            self.screen = match self.screen {
                Screen::AwaitPath => self.await_path()?,
                Screen::MainMenu => self.main_menu()?,
                Screen::EditMenu => self.edit_menu()?,
                Screen::Exit => Screen::Exit,
            };
        }
        log::info!("Editor exited");
        Ok(())
    }

    fn await_path(&mut self) -> Result<Screen> {
        self.console.write_line(menu::PATH_PROMPT)?;
        self.path = PathBuf::from(self.console.read_line()?);
        log::info!("Editing {}", self.path.display());
        Ok(Screen::MainMenu)
    }

    fn main_menu(&mut self) -> Result<Screen> {
        self.console.clear()?;
        self.reload()?;
        menu::show_main(&mut self.console)?;

        let next = match self.console.read_key()? {
            KeyCode::Char('1') => Screen::EditMenu,
            KeyCode::F(1) => {
                self.save()?;
                self.console.write_line(menu::SAVED_MESSAGE)?;
                self.console.read_key()?;
                Screen::MainMenu
            }
            KeyCode::Esc => Screen::Exit,
            _ => Screen::MainMenu,
        };
        Ok(next)
    }

    /// Reload the figure from disk and show it.
    ///
    /// With fewer than three lines on disk nothing is shown and the
    /// in-memory figure is kept, including any unsaved edits. Otherwise
    /// the file wins and unsaved edits are dropped.
    fn reload(&mut self) -> Result<()> {
        let lines = store::load(&self.path)?;
        if lines.len() < 3 {
            log::debug!("No figure on disk, keeping {:?}", self.figure);
            return Ok(());
        }
        self.figure = Figure::from_lines(&lines)
            .with_context(|| format!("Failed to read figure from {}", self.path.display()))?;
        menu::show_figure(&mut self.console, &self.figure)
    }

    fn save(&mut self) -> Result<()> {
        store::save(&self.path, &self.figure.to_lines())
            .with_context(|| format!("Failed to save {}", self.path.display()))
    }

    fn edit_menu(&mut self) -> Result<Screen> {
        self.console.clear()?;
        menu::show_edit(&mut self.console)?;

        match self.console.read_key()? {
            KeyCode::Char('1') => {
                menu::prompt_field(&mut self.console, NAME_LABEL)?;
                self.figure.name = self.console.read_line()?;
            }
            KeyCode::Char('2') => {
                self.figure.width = self.read_int(WIDTH_LABEL)?;
            }
            KeyCode::Char('3') => {
                self.figure.height = self.read_int(HEIGHT_LABEL)?;
            }
            _ => {}
        }
        Ok(Screen::MainMenu)
    }

    fn read_int(&mut self, label: &str) -> Result<i32> {
        menu::prompt_field(&mut self.console, label)?;
        let input = self.console.read_line()?;
        input
            .trim()
            .parse()
            .with_context(|| format!("{} must be an integer, got {:?}", label, input))
    }
}
