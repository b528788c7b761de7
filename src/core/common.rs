//! Common types for the engine: shot results, match outcomes and errors.

use super::ship::Orientation;

/// Result of a shot as reported by the defending board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// Shot landed on water (or padding, or a cell that was already resolved).
    Miss,
    /// Shot hit a ship that is still afloat.
    Hit,
    /// Shot sank a ship; the defender has ships left.
    Sank,
    /// Shot sank the defender's last ship.
    GameOver,
}

impl ShotResult {
    /// Whether the attacker keeps the turn after this result.
    pub fn keeps_turn(self) -> bool {
        !matches!(self, ShotResult::Miss)
    }

    /// Whether a ship went down with this shot.
    pub fn is_sink(self) -> bool {
        matches!(self, ShotResult::Sank | ShotResult::GameOver)
    }
}

/// Final result of a match from one player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Win,
    Loss,
}

/// Errors returned by engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Coordinate lies outside the 10x10 grid.
    #[error("coordinate ({x}, {y}) is out of range")]
    OutOfRange { x: i32, y: i32 },
    /// Ship would cover a cell that is not empty.
    #[error("cannot place a length-{length} ship {orientation:?} at ({x}, {y})")]
    InvalidPlacement {
        x: usize,
        y: usize,
        length: usize,
        orientation: Orientation,
    },
    /// Cell was already shot at.
    #[error("cell ({x}, {y}) was already shot")]
    AlreadyShot { x: usize, y: usize },
    /// Random placement found no feasible position for a ship.
    #[error("no feasible position left for ship {ship}")]
    ExhaustedRandomPlacement { ship: u8 },
    /// Ship id is not part of the fleet.
    #[error("unknown ship id {0}")]
    UnknownShip(u8),
    /// Knowledge grid has no unshot cell left.
    #[error("no unshot cell left to target")]
    NoTargetsLeft,
    /// The match already has a winner.
    #[error("match is already over")]
    MatchOver,
    /// Interactive input source has no more input.
    #[error("input source closed")]
    InputClosed,
}
