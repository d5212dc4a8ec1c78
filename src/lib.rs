//! Slime Arena - the game-state core of a top-down action game.
//!
//! A player-controlled slime fights endlessly spawning enemies with timed
//! skills inside a frame-stepped simulation. Difficulty modes scale enemy
//! and player parameters and drive timed world events.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, the run clock, input intent, damage
//!   resolution, and the fixed per-frame pipeline
//! - **Modes**: Static difficulty configuration
//! - **Player**: Movement, health/barrier vitals, hurt animation lock
//! - **Skills**: Cooldown-gated slash and dash
//! - **Enemies**: Archetype data, per-enemy AI state machines, spawning
//! - **Game events**: Timed world modifiers (shrines, blessings, invasions)
//!
//! Rendering, audio, menus, and input polling devices are external
//! collaborators; the presentation layer reads the public components and
//! resources and writes the input intent.

pub mod core;
pub mod enemies;
pub mod game_events;
pub mod modes;
pub mod player;
pub mod skills;

use bevy::prelude::*;

use modes::GameMode;

/// Main game plugin that adds all sub-plugins.
pub struct SlimeArenaPlugin;

impl Plugin for SlimeArenaPlugin {
    fn build(&self, app: &mut App) {
        // The selected mode may already have been inserted by the caller.
        if !app.world().contains_resource::<GameMode>() {
            app.insert_resource(GameMode::default());
        }

        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)
            // Player systems
            .add_plugins(player::PlayerPlugin)
            // Skill systems
            .add_plugins(skills::SkillsPlugin)
            // Enemy systems
            .add_plugins(enemies::EnemyPlugin)
            // World event systems
            .add_plugins(game_events::GameEventsPlugin);
    }
}
