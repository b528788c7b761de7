//! End-of-match banners loaded from text files.

use std::fs;
use std::path::{Path, PathBuf};
use std::string::String;

use anyhow::Context;
use log::debug;

use crate::core::Outcome;

pub const WIN_FILE: &str = "win.txt";
pub const LOSS_FILE: &str = "lose.txt";

/// Directory searched when no banner directory is configured.
pub const DEFAULT_DIR: &str = "assets";

/// Location of the banner for `outcome` inside `dir`.
pub fn banner_path(dir: &Path, outcome: Outcome) -> PathBuf {
    match outcome {
        Outcome::Win => dir.join(WIN_FILE),
        Outcome::Loss => dir.join(LOSS_FILE),
    }
}

/// Read the banner text for `outcome` from `dir`.
pub fn read_banner(dir: &Path, outcome: Outcome) -> anyhow::Result<String> {
    let path = banner_path(dir, outcome);
    fs::read_to_string(&path).with_context(|| format!("reading banner {}", path.display()))
}

/// Banner text for `outcome`, or a one-line fallback if the file cannot be read.
pub fn load_banner(dir: &Path, outcome: Outcome) -> String {
    match read_banner(dir, outcome) {
        Ok(text) => text,
        Err(e) => {
            debug!("{:#}", e);
            match outcome {
                Outcome::Win => String::from("you sank the whole enemy fleet. Victory!"),
                Outcome::Loss => String::from("your fleet has been destroyed. Defeat."),
            }
        }
    }
}
