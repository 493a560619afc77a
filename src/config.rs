//! Runner configuration read from the environment.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Default terminal columns per board cell
pub const DEFAULT_CELL_WIDTH: u16 = 2;

/// Settings for one run of the terminal game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Fixed RNG seed; `None` picks one from the clock
    pub seed: Option<u32>,
    /// File that receives log output; logging is off without it
    pub log_path: Option<PathBuf>,
    /// Terminal columns per board cell (1..=4)
    pub cell_width: u16,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_path: None,
            cell_width: DEFAULT_CELL_WIDTH,
        }
    }
}

impl RunConfig {
    /// Read `TETRIS_SEED`, `TETRIS_LOG_PATH` and `TETRIS_CELL_WIDTH`.
    ///
    /// Missing or unparseable values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("TETRIS_SEED").and_then(|s| s.trim().parse().ok());

        let log_path = lookup("TETRIS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        let cell_width = lookup("TETRIS_CELL_WIDTH")
            .and_then(|s| s.trim().parse::<u16>().ok())
            .filter(|w| (1..=4).contains(w))
            .unwrap_or(DEFAULT_CELL_WIDTH);

        Self {
            seed,
            log_path,
            cell_width,
        }
    }

    /// The configured seed, or one derived from the system clock
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}
