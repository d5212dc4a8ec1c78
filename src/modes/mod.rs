//! Difficulty modes - static multiplier tables and event probabilities.

mod config;

pub use config::{EventChances, GameMode, GameModeConfig};
