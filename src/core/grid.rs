//! Fixed 10x10 grids of cells, shared by fleet and knowledge boards.

use core::fmt;

use super::common::GameError;
use super::config::GRID_SIZE;

/// `true` iff `v` is a valid row or column index.
pub fn in_range(v: i32) -> bool {
    0 <= v && v < GRID_SIZE as i32
}

/// Index as reported in errors; anything past `i32::MAX` saturates.
pub(crate) fn signed(v: usize) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

/// Column (`x`) and row (`y`) of a grid cell. `(0, 0)` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Build a coordinate from signed components, rejecting anything off the grid.
    pub fn checked(x: i32, y: i32) -> Result<Self, GameError> {
        if in_range(x) && in_range(y) {
            Ok(Self::new(x as usize, y as usize))
        } else {
            Err(GameError::OutOfRange { x, y })
        }
    }

    /// Neighbouring coordinate shifted by `(dx, dy)`, if it is still on the grid.
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        let x = signed(self.x).checked_add(dx)?;
        let y = signed(self.y).checked_add(dy)?;
        Self::checked(x, y).ok()
    }

    /// Shift towards larger indices, saturating instead of overflowing.
    /// The result may lie off the grid.
    pub fn shifted(self, dx: usize, dy: usize) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// The up to eight edge- and corner-adjacent cells.
    pub fn neighbours(self) -> impl Iterator<Item = Coord> {
        NEIGHBOURS
            .iter()
            .filter_map(move |&(dx, dy)| self.offset(dx, dy))
    }

    fn validate(self) -> Result<Self, GameError> {
        if self.x < GRID_SIZE && self.y < GRID_SIZE {
            Ok(self)
        } else {
            Err(GameError::OutOfRange {
                x: signed(self.x),
                y: signed(self.y),
            })
        }
    }
}

impl fmt::Display for Coord {
    /// Formats as column letter and 1-based row, e.g. `(1, 4)` is `B5`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = (b'A' + (self.x % 26) as u8) as char;
        write!(f, "{}{}", col, self.y + 1)
    }
}

static NEIGHBOURS: [(i32, i32); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// State of a single cell.
///
/// A fleet grid holds `Empty`, `ShipSegment`, `Blocked`, `Miss` and `Hit`.
/// A knowledge grid holds `Empty`, `Miss`, `Hit` and `SunkReveal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    /// Segment of the ship with this 1-based id.
    ShipSegment(u8),
    /// Padding next to a placed ship; no other ship may go here.
    Blocked,
    Miss,
    Hit,
    /// Part or perimeter of a ship known to be sunk.
    SunkReveal,
}

impl Cell {
    /// Single-character rendering used by text frontends.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::ShipSegment(_) => 'S',
            Cell::Blocked => ',',
            Cell::Miss => 'o',
            Cell::Hit => 'X',
            Cell::SunkReveal => '#',
        }
    }
}

/// A 10x10 grid of cells, stored row-major.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// All-`Empty` grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a cell.
    pub fn get(&self, at: Coord) -> Result<Cell, GameError> {
        let at = at.validate()?;
        Ok(self.cells[at.y][at.x])
    }

    /// Overwrite a cell. Nothing is written if `at` is off the grid.
    pub fn set(&mut self, at: Coord, cell: Cell) -> Result<(), GameError> {
        let at = at.validate()?;
        self.cells[at.y][at.x] = cell;
        Ok(())
    }

    /// Every cell with its coordinate in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, &cell)| (Coord::new(x, y), cell))
        })
    }

    /// Number of cells equal to `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.iter().filter(|&(_, c)| c == cell).count()
    }

    /// Set every `Empty` neighbour of `at` to `cell`.
    pub fn fill_empty_neighbours(&mut self, at: Coord, cell: Cell) -> Result<(), GameError> {
        let at = at.validate()?;
        for n in at.neighbours() {
            if self.cells[n.y][n.x] == Cell::Empty {
                self.cells[n.y][n.x] = cell;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..GRID_SIZE {
            write!(f, " {}", (b'A' + c as u8) as char)?;
        }
        writeln!(f)?;
        for (y, row) in self.cells.iter().enumerate() {
            write!(f, "{:2} ", y + 1)?;
            for cell in row {
                write!(f, " {}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {{")?;
        fmt::Display::fmt(self, f)?;
        write!(f, "}}")
    }
}
