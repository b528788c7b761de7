use super::grid::Coord;
use super::ship::Orientation;

pub const GRID_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 10;
pub const MAX_SHIP_LEN: usize = 4;

/// Ship lengths in placement order. Ship ids are 1-based indices into this list.
pub const FLEET: [usize; NUM_SHIPS] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 4 + 3 + 3 + 2 + 2 + 2 + 1 + 1 + 1 + 1;

/// Where the interactive placement cursor starts for every ship.
pub const PLACEMENT_START: (Coord, Orientation) = (Coord::new(3, 3), Orientation::Horizontal);

/// Where the interactive shot cursor starts each turn.
pub const SHOT_START: Coord = Coord::new(4, 4);

/// Length of the ship with the given 1-based id, or `None` if the id is not in the fleet.
pub fn ship_length(id: u8) -> Option<usize> {
    let idx = (id as usize).checked_sub(1)?;
    FLEET.get(idx).copied()
}
