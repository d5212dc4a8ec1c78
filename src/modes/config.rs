//! Game mode configuration - per-difficulty multipliers and event chances.
//!
//! The selected mode is fixed at the start of a run; everything here is
//! immutable static data.

use bevy::prelude::*;

/// Per-minute probabilities for each world event kind.
///
/// The elite invasion only exists on Hard, hence the explicit option.
#[derive(Debug, Clone, Copy)]
pub struct EventChances {
    pub healing_shrine: f32,
    pub loot_blessing: f32,
    pub enemy_weakness: f32,
    pub elite_invasion: Option<f32>,
}

/// Static per-difficulty configuration.
///
/// Multipliers scale base stats; `1.0` means unchanged. The theme color is
/// consumed by the HUD for mode-specific tinting.
#[derive(Debug, Clone)]
pub struct GameModeConfig {
    pub display_name: &'static str,
    pub description: &'static str,

    // Difficulty multipliers
    pub enemy_health: f32,
    pub enemy_damage: f32,
    pub enemy_speed: f32,
    pub enemy_spawn_rate: f32,

    // Player multipliers
    pub player_health: f32,
    pub player_damage: f32,
    pub player_speed: f32,
    pub experience: f32,

    // Resource multipliers
    pub loot_drop_rate: f32,
    pub gold: f32,

    pub event_chances: EventChances,
    pub theme_color: [u8; 3],
}

/// The closed set of selectable difficulty modes.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    Easy,
    #[default]
    Normal,
    Hard,
}

const EASY: GameModeConfig = GameModeConfig {
    display_name: "Easy Mode",
    description: "Relaxed gameplay for beginners",
    enemy_health: 0.7,
    enemy_damage: 0.8,
    enemy_speed: 0.9,
    enemy_spawn_rate: 0.8,
    player_health: 1.2,
    player_damage: 1.1,
    player_speed: 1.0,
    experience: 1.0,
    loot_drop_rate: 1.3,
    gold: 1.2,
    event_chances: EventChances {
        healing_shrine: 0.15,
        loot_blessing: 0.10,
        enemy_weakness: 0.08,
        elite_invasion: None,
    },
    theme_color: [100, 255, 100],
};

const NORMAL: GameModeConfig = GameModeConfig {
    display_name: "Normal Mode",
    description: "Balanced gameplay experience",
    enemy_health: 1.0,
    enemy_damage: 1.0,
    enemy_speed: 1.0,
    enemy_spawn_rate: 1.0,
    player_health: 1.0,
    player_damage: 1.0,
    player_speed: 1.0,
    experience: 1.0,
    loot_drop_rate: 1.0,
    gold: 1.0,
    event_chances: EventChances {
        healing_shrine: 0.08,
        loot_blessing: 0.06,
        enemy_weakness: 0.04,
        elite_invasion: None,
    },
    theme_color: [100, 150, 255],
};

const HARD: GameModeConfig = GameModeConfig {
    display_name: "Hard Mode",
    description: "Challenging gameplay for veterans",
    enemy_health: 1.4,
    enemy_damage: 1.3,
    enemy_speed: 1.2,
    enemy_spawn_rate: 1.5,
    player_health: 0.8,
    player_damage: 0.9,
    player_speed: 1.0,
    experience: 1.5,
    loot_drop_rate: 0.8,
    gold: 1.3,
    event_chances: EventChances {
        healing_shrine: 0.05,
        loot_blessing: 0.12,
        enemy_weakness: 0.02,
        elite_invasion: Some(0.08),
    },
    theme_color: [255, 100, 100],
};

impl GameMode {
    /// All selectable modes, in menu order.
    pub const ALL: [GameMode; 3] = [GameMode::Easy, GameMode::Normal, GameMode::Hard];

    /// Resolve a mode identifier, falling back to Normal for unknown names.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Easy" => GameMode::Easy,
            "Normal" => GameMode::Normal,
            "Hard" => GameMode::Hard,
            other => {
                warn!("Unknown game mode '{}', falling back to Normal", other);
                GameMode::Normal
            }
        }
    }

    /// Static configuration for this mode.
    pub fn config(&self) -> &'static GameModeConfig {
        match self {
            GameMode::Easy => &EASY,
            GameMode::Normal => &NORMAL,
            GameMode::Hard => &HARD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_mode_falls_back_to_normal() {
        assert_eq!(GameMode::from_name("Nightmare"), GameMode::Normal);
        assert_eq!(GameMode::from_name("Hard"), GameMode::Hard);
    }

    #[test]
    fn hard_mode_scales_enemies_up() {
        let config = GameMode::Hard.config();
        assert!(config.enemy_health > 1.0);
        assert!(config.enemy_spawn_rate > 1.0);
        assert!(config.event_chances.elite_invasion.is_some());
    }

    #[test]
    fn easy_and_normal_have_no_elite_invasion() {
        assert!(GameMode::Easy.config().event_chances.elite_invasion.is_none());
        assert!(GameMode::Normal.config().event_chances.elite_invasion.is_none());
    }
}
