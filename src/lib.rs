#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod core;
mod game;
pub mod player;
#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;

pub use crate::core::*;
pub use game::{Match, MatchReport, ShotRecord, Side};
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use player::{InputSource, NoRender, Player, PlayerKind, Renderer, ReplayInput};
