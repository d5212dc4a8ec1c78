//! Player module - the player entity, its vitals, and movement.

mod components;
mod movement;
mod plugin;

pub use components::*;
pub use movement::spawn_player;
pub use plugin::PlayerPlugin;
