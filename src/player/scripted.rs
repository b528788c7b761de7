use rand::rngs::SmallRng;

use crate::core::{ai, arrange_random, Board, Coord, GameError};

/// Random fleet; every ship gets a uniformly chosen feasible position.
pub fn arrange_fleet(board: &mut Board, rng: &mut SmallRng) -> Result<(), GameError> {
    arrange_random(board, rng)
}

/// Uniform pick among cells never shot at.
pub fn choose_shot(board: &Board, rng: &mut SmallRng) -> Result<Coord, GameError> {
    ai::random_target(board.knowledge(), rng)
}
