//! Line-based keyboard input for terminal play.
//!
//! Each line is either a coordinate such as `B7`, or a run of single-letter
//! commands: `w`/`a`/`s`/`d` move, `r` rotates, `f` (or an empty line) confirms.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::string::String;

use log::warn;

use crate::core::{
    ship_length, Coord, Direction, GameError, Grid, PlacementAction, PlacementCursor, GRID_SIZE,
    SHOT_START,
};
use crate::player::InputSource;

/// One parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Jump straight to a cell.
    Target(Coord),
    /// Cursor actions in the order typed.
    Actions(Vec<PlacementAction>),
}

/// Parse `A1`..`J10` (case-insensitive) into a coordinate.
pub fn parse_coord(input: &str) -> Option<Coord> {
    let mut chars = input.chars();
    let col = chars.next()?.to_ascii_uppercase();
    if !col.is_ascii_uppercase() {
        return None;
    }
    let row: usize = chars.as_str().parse().ok()?;
    let x = (col as u8 - b'A') as usize;
    if row == 0 || row > GRID_SIZE || x >= GRID_SIZE {
        return None;
    }
    Some(Coord::new(x, row - 1))
}

/// Parse one input line, or `None` if it is not understood.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return Some(Command::Actions(vec![PlacementAction::Confirm]));
    }
    if let Some(at) = parse_coord(line) {
        return Some(Command::Target(at));
    }
    line.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c.to_ascii_lowercase() {
            'w' => Some(PlacementAction::Move(Direction::Up)),
            's' => Some(PlacementAction::Move(Direction::Down)),
            'a' => Some(PlacementAction::Move(Direction::Left)),
            'd' => Some(PlacementAction::Move(Direction::Right)),
            'r' => Some(PlacementAction::Rotate),
            'f' => Some(PlacementAction::Confirm),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()
        .map(Command::Actions)
}

/// Moves that take a cursor at `from` to `to`.
fn moves_towards(from: Coord, to: Coord) -> impl Iterator<Item = PlacementAction> {
    let horizontal = if to.x >= from.x {
        (Direction::Right, to.x - from.x)
    } else {
        (Direction::Left, from.x - to.x)
    };
    let vertical = if to.y >= from.y {
        (Direction::Down, to.y - from.y)
    } else {
        (Direction::Up, from.y - to.y)
    };
    [horizontal, vertical]
        .into_iter()
        .flat_map(|(dir, n)| std::iter::repeat(PlacementAction::Move(dir)).take(n))
}

fn step_clamped(c: &mut Coord, dir: Direction) {
    match dir {
        Direction::Up => c.y = c.y.saturating_sub(1),
        Direction::Left => c.x = c.x.saturating_sub(1),
        Direction::Down => c.y = (c.y + 1).min(GRID_SIZE - 1),
        Direction::Right => c.x = (c.x + 1).min(GRID_SIZE - 1),
    }
}

/// Something that yields whole lines of text.
///
/// `Stdin` locks per line, so several players can share the terminal.
pub trait LineReader {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl LineReader for io::Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::Stdin::read_line(self, buf)
    }
}

impl LineReader for &[u8] {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Reads commands from a line-oriented reader and prompts on a writer.
pub struct TerminalInput<R: LineReader, W: Write> {
    reader: R,
    out: W,
    pending: VecDeque<PlacementAction>,
    /// Ship the queued actions were typed for.
    placing: Option<u8>,
    shot_cursor: Coord,
    retrying: bool,
}

impl TerminalInput<io::Stdin, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin(), io::stdout())
    }
}

impl<R: LineReader, W: Write> TerminalInput<R, W> {
    pub fn new(reader: R, out: W) -> Self {
        Self {
            reader,
            out,
            pending: VecDeque::new(),
            placing: None,
            shot_cursor: SHOT_START,
            retrying: false,
        }
    }

    fn read_command(&mut self, prompt: &str) -> Result<Command, GameError> {
        loop {
            let mut line = String::new();
            let read = write!(self.out, "{}", prompt)
                .and_then(|()| self.out.flush())
                .and_then(|()| self.reader.read_line(&mut line));
            match read {
                Ok(0) => return Err(GameError::InputClosed),
                Ok(_) => {}
                Err(e) => {
                    warn!("reading input failed: {}", e);
                    return Err(GameError::InputClosed);
                }
            }
            match parse_command(&line) {
                Some(cmd) => return Ok(cmd),
                None => self.say(format_args!("Unrecognised input {:?}", line.trim())),
            }
        }
    }

    fn say(&mut self, msg: std::fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{}", msg) {
            warn!("terminal output failed: {}", e);
        }
    }
}

impl<R: LineReader, W: Write> InputSource for TerminalInput<R, W> {
    fn next_placement_action(
        &mut self,
        ship: u8,
        cursor: &PlacementCursor,
    ) -> Result<PlacementAction, GameError> {
        // leftovers typed after the previous ship's confirm do not carry over
        if self.placing != Some(ship) {
            self.pending.clear();
            self.placing = Some(ship);
        }
        if let Some(action) = self.pending.pop_front() {
            return Ok(action);
        }
        let length = ship_length(ship).unwrap_or_default();
        let prompt = format!(
            "Ship {} (length {}) at {} [wasd move, r rotate, enter place]: ",
            ship,
            length,
            cursor.placement().anchor
        );
        match self.read_command(&prompt)? {
            Command::Target(at) => {
                self.pending.extend(moves_towards(cursor.placement().anchor, at));
            }
            Command::Actions(actions) => self.pending.extend(actions),
        }
        // an already-reached target leaves nothing queued; ask again
        match self.pending.pop_front() {
            Some(action) => Ok(action),
            None => self.next_placement_action(ship, cursor),
        }
    }

    fn next_shot_coordinate(&mut self, _knowledge: &Grid) -> Result<Coord, GameError> {
        if !self.retrying {
            self.shot_cursor = SHOT_START;
        }
        self.retrying = false;
        loop {
            let prompt = format!(
                "Aim at {} [wasd move, enter fire, or e.g. B7]: ",
                self.shot_cursor
            );
            match self.read_command(&prompt)? {
                Command::Target(at) => return Ok(at),
                Command::Actions(actions) => {
                    for action in actions {
                        let c = &mut self.shot_cursor;
                        match action {
                            PlacementAction::Confirm => return Ok(*c),
                            PlacementAction::Move(dir) => step_clamped(c, dir),
                            PlacementAction::Rotate => {}
                        }
                    }
                }
            }
        }
    }

    fn rejected(&mut self, err: &GameError) {
        self.pending.clear();
        self.retrying = true;
        self.say(format_args!("Not allowed: {}", err));
    }
}
