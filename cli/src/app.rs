use std::io::Write;

use anyhow::Result;
use pisweeper_core::*;
use serde_json::json;

use crate::clock::Stopwatch;
use crate::command::{self, Command};
use crate::render;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

/// Owns the current session and turns prompt lines into moves and output.
pub(crate) struct App<W> {
    session: Session,
    seed: Option<u64>,
    json: bool,
    color: bool,
    stopwatch: Stopwatch,
    out: W,
}

fn new_session(config: GameConfig, seed: Option<u64>) -> pisweeper_core::Result<Session> {
    Session::new_game(config, seed.unwrap_or_else(rand::random))
}

impl<W: Write> App<W> {
    pub(crate) fn new(
        config: GameConfig,
        seed: Option<u64>,
        json: bool,
        color: bool,
        out: W,
    ) -> Result<Self> {
        let mut app = Self {
            session: new_session(config, seed)?,
            seed,
            json,
            color,
            stopwatch: Stopwatch::new(),
            out,
        };
        app.announce_new_game()?;
        Ok(app)
    }

    pub(crate) fn prompt(&mut self) -> Result<()> {
        if !self.json {
            write!(self.out, "> ")?;
        }
        self.out.flush()?;
        Ok(())
    }

    pub(crate) fn handle(&mut self, line: &str) -> Result<Flow> {
        self.sync_clock();

        let command = match command::parse(line) {
            None => return Ok(Flow::Continue),
            Some(Ok(command)) => command,
            Some(Err(err)) => {
                write!(self.out, "{err}")?;
                return Ok(Flow::Continue);
            }
        };
        log::debug!("command: {:?}", command);

        match command {
            Command::Reveal { x, y } => self.reveal((x, y))?,
            Command::Flag { x, y } => self.flag((x, y))?,
            Command::New { preset } => self.start(preset.map(|p| Preset::from(p).into()))?,
            Command::Custom {
                rows,
                columns,
                mines,
            } => self.start(Some(NewGameRequest::Custom {
                rows,
                columns,
                mines,
            }))?,
            Command::Show => self.show()?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Convert wall-clock seconds into session ticks.
    fn sync_clock(&mut self) {
        for _ in 0..self.stopwatch.take_whole_secs() {
            self.session.tick();
        }
    }

    /// Replace the session, `None` restarts on the current board size.
    fn start(&mut self, request: Option<NewGameRequest>) -> Result<()> {
        let config = match request {
            Some(request) => request.config(),
            None => Ok(self.session.minefield().game_config()),
        };
        match config.and_then(|config| new_session(config, self.seed)) {
            Ok(session) => {
                self.session = session;
                self.stopwatch.reset();
                self.announce_new_game()
            }
            Err(err) => {
                log::debug!("rejected new game: {:?}", err);
                writeln!(self.out, "Cannot start game: {err}")?;
                Ok(())
            }
        }
    }

    fn reveal(&mut self, coords: Coord2) -> Result<()> {
        let result = self.session.reveal(coords);
        if self.json {
            writeln!(self.out, "{}", serde_json::to_string(&result)?)?;
            return Ok(());
        }

        if !result.has_update() {
            writeln!(self.out, "Nothing to reveal at {} {}", coords.0, coords.1)?;
            return Ok(());
        }
        self.show()?;
        if let Some(message) = render::announcement(result.status) {
            writeln!(self.out, "{message}")?;
        }
        Ok(())
    }

    fn flag(&mut self, coords: Coord2) -> Result<()> {
        let view = self.session.toggle_flag(coords);
        if self.json {
            writeln!(self.out, "{}", serde_json::to_string(&view)?)?;
        } else if view.is_some() {
            self.show()?;
        } else {
            writeln!(self.out, "No cell at {} {}", coords.0, coords.1)?;
        }
        Ok(())
    }

    fn show(&mut self) -> Result<()> {
        if self.json {
            let cells: Vec<_> = self.session.cells().collect();
            let snapshot = json!({
                "status": self.session.status(),
                "flags_left": self.session.flags_left(),
                "elapsed_secs": self.session.elapsed_secs(),
                "cells": cells,
            });
            writeln!(self.out, "{snapshot}")?;
        } else {
            let board = render::Board {
                session: &self.session,
                color: self.color,
            };
            write!(self.out, "{board}")?;
        }
        Ok(())
    }

    fn announce_new_game(&mut self) -> Result<()> {
        let GameConfig { size, mines } = self.session.minefield().game_config();
        log::info!("New game {}x{} with {} mines", size.0, size.1, mines);
        if self.json {
            let event = json!({
                "event": "new_game",
                "width": size.0,
                "height": size.1,
                "mines": mines,
            });
            writeln!(self.out, "{event}")?;
            Ok(())
        } else {
            self.show()
        }
    }
}
