//! Commonly used types and utilities for ease of import.

pub use crate::{
    Board, Cell, Coord, GameError, Grid, Match, MatchReport, Outcome, Player, ShotResult, Side,
};
pub use crate::{InputSource, NoRender, Renderer, ReplayInput};

#[cfg(feature = "std")]
pub use crate::cli::{TerminalInput, TextRenderer};
