//! Core game engine (no_std compatible)
//!
//! Grids, ships, shot resolution, sink reveal, random placement and random
//! targeting. Nothing here touches a terminal or the filesystem.

pub mod ai;
pub mod board;
pub mod common;
pub mod config;
pub mod grid;
pub mod placement;
pub mod ship;

// Re-export commonly used types
pub use ai::random_target;
pub use board::Board;
pub use common::{GameError, Outcome, ShotResult};
pub use config::*;
pub use grid::{in_range, Cell, Coord, Grid};
pub use placement::{arrange_random, feasible_placements, fleet_order, random_placement};
pub use ship::{max_anchor, Direction, Orientation, Placement, PlacementAction, PlacementCursor};
