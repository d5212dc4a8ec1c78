//! Skills plugin - cooldown-gated player actions.

use bevy::prelude::*;

use super::systems;

/// Skills plugin - slash and dash activation, updates, and hit tests.
pub struct SkillsPlugin;

impl Plugin for SkillsPlugin {
    fn build(&self, app: &mut App) {
        systems::setup_skill_systems(app);
    }
}
