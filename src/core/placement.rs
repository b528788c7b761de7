//! Randomized fleet placement.

use log::debug;
use rand::Rng;

use super::board::Board;
use super::common::GameError;
use super::config::{ship_length, FLEET, GRID_SIZE};
use super::grid::Coord;
use super::ship::{Orientation, Placement};

/// Ships in placement order as `(id, length)`: longest first.
pub fn fleet_order() -> impl Iterator<Item = (u8, usize)> {
    FLEET
        .iter()
        .enumerate()
        .map(|(i, &len)| (i as u8 + 1, len))
}

/// Every placement of a `length` ship that fits on the grid and covers only `Empty` cells,
/// scanning anchors row-major and trying horizontal before vertical.
pub fn feasible_placements(board: &Board, length: usize) -> impl Iterator<Item = Placement> + '_ {
    (0..GRID_SIZE)
        .flat_map(|y| (0..GRID_SIZE).map(move |x| Coord::new(x, y)))
        .flat_map(move |anchor| {
            [Orientation::Horizontal, Orientation::Vertical]
                .into_iter()
                .filter_map(move |o| Placement::new(anchor, length, o).ok())
        })
        .filter(move |p| !board.occupied(p))
}

/// Pick one feasible placement for ship `id` uniformly at random.
pub fn random_placement<R: Rng + ?Sized>(
    board: &Board,
    rng: &mut R,
    id: u8,
) -> Result<Placement, GameError> {
    let length = ship_length(id).ok_or(GameError::UnknownShip(id))?;
    let count = feasible_placements(board, length).count();
    if count == 0 {
        return Err(GameError::ExhaustedRandomPlacement { ship: id });
    }
    let pick = rng.random_range(0..count);
    feasible_placements(board, length)
        .nth(pick)
        .ok_or(GameError::ExhaustedRandomPlacement { ship: id })
}

/// Place the whole fleet at random positions.
pub fn arrange_random<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Result<(), GameError> {
    for (id, _) in fleet_order() {
        let placement = random_placement(board, rng, id)?;
        board.place_ship(id, &placement)?;
    }
    debug!("random fleet arranged");
    Ok(())
}
