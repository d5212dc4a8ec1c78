//! Enemies module - archetypes, per-enemy AI state machines, and spawning.

mod ai;
mod components;
pub mod data;
mod plugin;
mod spawning;

pub use components::*;
pub use data::{plant_archetype, EnemyArchetype, EnemyRegistry, FrameCounts};
pub use plugin::EnemyPlugin;
pub use spawning::{
    choose_archetype, random_edge_position, EnemySpawner, SpawnWeightRule, SPAWN_INTERVAL,
};
