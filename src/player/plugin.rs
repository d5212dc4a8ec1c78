//! Player plugin - spawning, movement, and vitals systems.

use bevy::prelude::*;

use super::movement;

/// Player plugin - handles the player entity's lifecycle and upkeep.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        movement::setup_player_systems(app);
    }
}
