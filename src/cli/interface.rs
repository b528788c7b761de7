//! Plain-text board display for terminal play.

use std::io::{self, Write};
use std::path::PathBuf;
use std::string::String;

use log::warn;

use crate::core::{Cell, Coord, Grid, Outcome, Placement, ShotResult, GRID_SIZE};
use crate::player::Renderer;

use super::banner;

/// Write `grid` as a lettered/numbered table. Cells of `pending` are drawn as
/// `@`, or `!` where they collide with something already on the grid.
pub fn write_grid<W: Write>(out: &mut W, grid: &Grid, pending: Option<&Placement>) -> io::Result<()> {
    write!(out, "   ")?;
    for c in 0..GRID_SIZE {
        write!(out, " {}", (b'A' + c as u8) as char)?;
    }
    writeln!(out)?;
    for y in 0..GRID_SIZE {
        write!(out, "{:2} ", y + 1)?;
        for x in 0..GRID_SIZE {
            let at = Coord::new(x, y);
            let cell = grid.get(at).unwrap_or(Cell::Empty);
            let covered = pending.is_some_and(|p| p.cells().any(|c| c == at));
            let ch = match (covered, cell) {
                (true, Cell::Empty) => '@',
                (true, _) => '!',
                (false, cell) => cell.symbol(),
            };
            write!(out, " {}", ch)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn describe(result: ShotResult) -> &'static str {
    match result {
        ShotResult::Miss => "miss",
        ShotResult::Hit => "hit",
        ShotResult::Sank => "ship sunk!",
        ShotResult::GameOver => "last ship sunk!",
    }
}

/// Renderer printing boards and shot reports as text.
pub struct TextRenderer<W: Write> {
    name: String,
    out: W,
    banners: PathBuf,
}

impl TextRenderer<io::Stdout> {
    /// Renderer on stdout, loading end-of-match banners from `banners`.
    pub fn stdout(name: impl Into<String>, banners: impl Into<PathBuf>) -> Self {
        Self::new(name, io::stdout(), banners)
    }
}

impl<W: Write> TextRenderer<W> {
    pub fn new(name: impl Into<String>, out: W, banners: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            out,
            banners: banners.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn try_draw(&mut self, title: &str, grid: &Grid, pending: Option<&Placement>) -> io::Result<()> {
        writeln!(self.out, "\n{} - {}:", self.name, title)?;
        write_grid(&mut self.out, grid, pending)?;
        self.out.flush()
    }

    fn report(&mut self, res: io::Result<()>) {
        if let Err(e) = res {
            warn!("terminal output failed: {}", e);
        }
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn draw_fleet(&mut self, fleet: &Grid, pending: Option<&Placement>) {
        let res = self.try_draw("your fleet", fleet, pending);
        self.report(res);
    }

    fn draw_knowledge(&mut self, knowledge: &Grid) {
        let res = self.try_draw("enemy waters", knowledge, None);
        self.report(res);
    }

    fn shot_resolved(&mut self, at: Coord, result: ShotResult, incoming: bool) {
        let who = if incoming { "Opponent fired" } else { "You fired" };
        let res = writeln!(self.out, "{} at {} -> {}", who, at, describe(result));
        self.report(res);
    }

    fn show_outcome(&mut self, outcome: Outcome) {
        let text = banner::load_banner(&self.banners, outcome);
        let res = writeln!(self.out, "\n{}:\n{}", self.name, text.trim_end())
            .and_then(|()| self.out.flush());
        self.report(res);
    }
}
