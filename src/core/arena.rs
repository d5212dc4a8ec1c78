//! Arena bounds shared by spawning and movement.

use bevy::prelude::*;

/// Playable area in arena coordinates. The origin is the top-left corner
/// and +y points toward the bottom edge, matching the presentation layer.
#[derive(Resource, Debug, Clone, Copy)]
pub struct ArenaBounds {
    pub width: f32,
    pub height: f32,
}

impl Default for ArenaBounds {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
        }
    }
}

impl ArenaBounds {
    /// Center of the arena, where the player starts.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}
