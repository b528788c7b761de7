//! Terminal frontend: keyboard input, text rendering and end-of-match banners.

#![cfg(feature = "std")]

pub mod banner;
pub mod input;
pub mod interface;

pub use input::{parse_command, parse_coord, Command, LineReader, TerminalInput};
pub use interface::{write_grid, TextRenderer};
