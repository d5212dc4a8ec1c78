//! Skills module - the player's cooldown-gated actions.

mod components;
mod plugin;
mod systems;

pub use components::*;
pub use plugin::SkillsPlugin;
pub use systems::nearest_enemy_center;
