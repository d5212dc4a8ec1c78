//! Slime Arena - Entry Point
//!
//! Controls:
//! - WASD: Move
//! - Left mouse: Slash toward the pointer
//! - Space: Dash along the movement direction
//! - Escape: Pause/Unpause
//! - Enter: Start a run / leave the game-over screen
//!
//! An optional first argument selects the difficulty (Easy, Normal, Hard);
//! unknown names fall back to Normal.

use bevy::prelude::*;

use slime_arena::modes::GameMode;

fn main() {
    let mode = std::env::args()
        .nth(1)
        .map(|name| GameMode::from_name(&name))
        .unwrap_or_default();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Slime Arena".to_string(),
                resolution: (1920.0, 1080.0).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(mode)
        .add_plugins(slime_arena::SlimeArenaPlugin)
        .run();
}
