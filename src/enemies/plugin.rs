//! Enemy plugin - registers archetype data, AI, and spawning systems.

use bevy::prelude::*;

use super::ai;
use super::data::{load_enemy_archetypes, EnemyRegistry};
use super::spawning::{reset_spawner, spawn_enemies, EnemySpawner};
use crate::core::{FrameSet, GameState};

/// Enemy plugin - handles enemy spawning, AI, death, and reaping.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EnemyRegistry>()
            .init_resource::<EnemySpawner>()
            .add_systems(Startup, load_enemy_archetypes)
            .add_systems(
                OnTransition {
                    exited: GameState::MainMenu,
                    entered: GameState::InGame,
                },
                reset_spawner,
            )
            .add_systems(Update, spawn_enemies.in_set(FrameSet::Spawning))
            .add_systems(
                Update,
                (
                    ai::check_enemy_death,
                    ai::update_death_animations,
                    ai::tick_hurt_overlays,
                    ai::enemy_movement,
                    ai::enemy_attack,
                    ai::step_enemy_animations,
                )
                    .chain()
                    .in_set(FrameSet::EnemyAi),
            )
            .add_systems(Update, ai::reap_defeated_enemies.in_set(FrameSet::Reap));
    }
}
