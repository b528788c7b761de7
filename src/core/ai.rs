// Random targeting for the scripted opponent.
// Only never-shot cells are candidates, so a repeated shot cannot happen.

use rand::Rng;

use super::common::GameError;
use super::grid::{Cell, Coord, Grid};

/// Choose uniformly among the `Empty` cells of a knowledge grid.
///
/// The draw is a rank into the row-major sequence of unshot cells.
pub fn random_target<R: Rng + ?Sized>(knowledge: &Grid, rng: &mut R) -> Result<Coord, GameError> {
    let unshot = knowledge.count(Cell::Empty);
    if unshot == 0 {
        return Err(GameError::NoTargetsLeft);
    }
    let rank = rng.random_range(0..unshot);
    knowledge
        .iter()
        .filter(|&(_, cell)| cell == Cell::Empty)
        .nth(rank)
        .map(|(at, _)| at)
        .ok_or(GameError::NoTargetsLeft)
}
