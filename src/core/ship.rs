//! Ship geometry: orientation, placements and the interactive placement cursor.

use super::common::GameError;
use super::config::{GRID_SIZE, PLACEMENT_START};
use super::grid::{signed, Coord};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends towards increasing `x`.
    Horizontal,
    /// Extends towards increasing `y`.
    Vertical,
}

impl Orientation {
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    fn step(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}

/// A straight run of `length` cells starting at `anchor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub anchor: Coord,
    pub length: usize,
    pub orientation: Orientation,
}

impl Placement {
    /// Build a placement, failing if any of its cells would fall off the grid.
    pub fn new(anchor: Coord, length: usize, orientation: Orientation) -> Result<Self, GameError> {
        let placement = Self {
            anchor,
            length,
            orientation,
        };
        let (max_x, max_y) = max_anchor(length, orientation);
        if length == 0 || length > GRID_SIZE || anchor.x >= max_x || anchor.y >= max_y {
            let end = placement.end();
            return Err(GameError::OutOfRange {
                x: signed(end.x),
                y: signed(end.y),
            });
        }
        Ok(placement)
    }

    /// Cells covered by the ship, from the anchor outwards.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let (dx, dy) = self.orientation.step();
        let anchor = self.anchor;
        (0..self.length).map(move |i| anchor.shifted(dx * i, dy * i))
    }

    /// Last cell covered by the ship.
    pub fn end(&self) -> Coord {
        let (dx, dy) = self.orientation.step();
        let n = self.length.saturating_sub(1);
        self.anchor.shifted(dx * n, dy * n)
    }
}

/// Exclusive upper bounds `(x, y)` for the anchor of a ship of this length and orientation.
pub fn max_anchor(length: usize, orientation: Orientation) -> (usize, usize) {
    let span = GRID_SIZE + 1 - length.clamp(1, GRID_SIZE);
    match orientation {
        Orientation::Horizontal => (span, GRID_SIZE),
        Orientation::Vertical => (GRID_SIZE, span),
    }
}

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// One step of interactive ship placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementAction {
    Move(Direction),
    Rotate,
    Confirm,
}

/// Provisional position of the ship being placed interactively.
///
/// Movement and rotation are clamped so the whole ship always stays on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementCursor {
    x: usize,
    y: usize,
    length: usize,
    orientation: Orientation,
}

impl PlacementCursor {
    pub fn new(length: usize) -> Self {
        let (start, orientation) = PLACEMENT_START;
        let mut cursor = Self {
            x: start.x,
            y: start.y,
            length,
            orientation,
        };
        cursor.clamp();
        cursor
    }

    /// Apply a move or rotate. `Confirm` leaves the cursor unchanged.
    pub fn apply(&mut self, action: PlacementAction) {
        let (max_x, max_y) = max_anchor(self.length, self.orientation);
        match action {
            PlacementAction::Move(Direction::Up) => self.y = self.y.saturating_sub(1),
            PlacementAction::Move(Direction::Left) => self.x = self.x.saturating_sub(1),
            PlacementAction::Move(Direction::Down) => {
                if self.y + 1 < max_y {
                    self.y += 1;
                }
            }
            PlacementAction::Move(Direction::Right) => {
                if self.x + 1 < max_x {
                    self.x += 1;
                }
            }
            PlacementAction::Rotate => {
                self.orientation = self.orientation.toggled();
                self.clamp();
            }
            PlacementAction::Confirm => {}
        }
    }

    pub fn placement(&self) -> Placement {
        Placement {
            anchor: Coord::new(self.x, self.y),
            length: self.length,
            orientation: self.orientation,
        }
    }

    fn clamp(&mut self) {
        let (max_x, max_y) = max_anchor(self.length, self.orientation);
        self.x = self.x.min(max_x - 1);
        self.y = self.y.min(max_y - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_follow_orientation() {
        let h = Placement::new(Coord::new(2, 0), 4, Orientation::Horizontal).unwrap();
        let cells: Vec<_> = h.cells().collect();
        assert_eq!(
            cells,
            vec![
                Coord::new(2, 0),
                Coord::new(3, 0),
                Coord::new(4, 0),
                Coord::new(5, 0)
            ]
        );
        let v = Placement::new(Coord::new(9, 7), 3, Orientation::Vertical).unwrap();
        assert_eq!(v.end(), Coord::new(9, 9));
    }

    #[test]
    fn placement_off_grid_is_rejected() {
        assert_eq!(
            Placement::new(Coord::new(7, 0), 4, Orientation::Horizontal),
            Err(GameError::OutOfRange { x: 10, y: 0 })
        );
        assert!(Placement::new(Coord::new(0, 8), 3, Orientation::Vertical).is_err());
        assert!(Placement::new(Coord::new(9, 9), 1, Orientation::Vertical).is_ok());
    }

    #[test]
    fn oversized_or_empty_ship_is_rejected() {
        assert_eq!(
            Placement::new(Coord::new(0, 0), GRID_SIZE + 1, Orientation::Horizontal),
            Err(GameError::OutOfRange { x: 10, y: 0 })
        );
        assert_eq!(
            Placement::new(Coord::new(2, 3), 0, Orientation::Vertical),
            Err(GameError::OutOfRange { x: 2, y: 3 })
        );
        assert!(Placement::new(Coord::new(0, 0), GRID_SIZE, Orientation::Vertical).is_ok());
    }

    #[test]
    fn far_anchor_is_an_error() {
        assert_eq!(
            Placement::new(Coord::new(usize::MAX, 0), 2, Orientation::Horizontal),
            Err(GameError::OutOfRange { x: i32::MAX, y: 0 })
        );
        let far = Placement {
            anchor: Coord::new(usize::MAX - 1, 0),
            length: 4,
            orientation: Orientation::Horizontal,
        };
        assert_eq!(far.end(), Coord::new(usize::MAX, 0));
        assert_eq!(far.cells().count(), 4);
    }

    #[test]
    fn cursor_moves_are_clamped() {
        let mut cursor = PlacementCursor::new(4);
        for _ in 0..20 {
            cursor.apply(PlacementAction::Move(Direction::Right));
            cursor.apply(PlacementAction::Move(Direction::Down));
        }
        assert_eq!(cursor.placement().anchor, Coord::new(6, 9));
        for _ in 0..20 {
            cursor.apply(PlacementAction::Move(Direction::Left));
            cursor.apply(PlacementAction::Move(Direction::Up));
        }
        assert_eq!(cursor.placement().anchor, Coord::new(0, 0));
    }

    #[test]
    fn rotate_reclamps_anchor() {
        let mut cursor = PlacementCursor::new(4);
        for _ in 0..20 {
            cursor.apply(PlacementAction::Move(Direction::Down));
        }
        assert_eq!(cursor.placement().anchor, Coord::new(3, 9));
        cursor.apply(PlacementAction::Rotate);
        let p = cursor.placement();
        assert_eq!(p.orientation, Orientation::Vertical);
        assert_eq!(p.anchor, Coord::new(3, 6));
        assert_eq!(p.end(), Coord::new(3, 9));
    }

    #[test]
    fn confirm_does_not_move() {
        let mut cursor = PlacementCursor::new(2);
        let before = cursor;
        cursor.apply(PlacementAction::Confirm);
        assert_eq!(cursor, before);
    }
}
