//! Core game module - states, events, timing, input intent, and the fixed
//! frame pipeline.
//!
//! This module provides the foundation that all other game systems build upon.

mod arena;
mod clock;
mod damage;
mod events;
mod input;
mod plugin;
mod rng;
mod settings;
mod states;

pub use arena::ArenaBounds;
pub use clock::{tick_game_clock, GameClock};
pub use damage::apply_damage;
pub use events::*;
pub use input::{movement_vector, poll_input, InputIntent, DIAGONAL_FACTOR};
pub use plugin::{CorePlugin, FrameSet};
pub use rng::GameRng;
pub use settings::{Settings, SettingsError, DEFAULT_FPS, FPS_OPTIONS, SETTINGS_PATH};
pub use states::GameState;
