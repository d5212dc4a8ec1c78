//! Enemy archetype data - built-in definitions plus RON file loading.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Directory scanned for additional archetype files.
pub const ARCHETYPE_DIR: &str = "assets/data/enemies";

/// Animation frame counts per AI state.
#[derive(Deserialize, Clone, Copy, Debug)]
pub struct FrameCounts {
    pub idle: u32,
    pub walk: u32,
    pub run: u32,
    pub attack: u32,
    pub death: u32,
}

/// Immutable enemy archetype shared by every instance of a type.
///
/// Instances never mutate the archetype; mode scaling is applied to the
/// spawned entity's own components.
#[derive(Deserialize, Clone, Debug)]
pub struct EnemyArchetype {
    pub name: String,
    pub max_health: i32,
    /// Bounding-box side length.
    pub size: f32,
    pub speed: f32,
    /// Tint for the presentation layer.
    pub color: [u8; 3],
    /// Distance at which an attack cycle starts.
    pub attack_trigger_range: f32,
    /// Distance within which the impact frame actually lands damage.
    pub attack_damage_range: f32,
    pub attack_damage: i32,
    pub attack_cooldown: f32,
    /// Frame index of the attack animation at which damage applies.
    #[serde(default = "default_impact_frame")]
    pub impact_frame: u32,
    /// Base weight for the spawner's roulette.
    #[serde(default = "default_spawn_weight")]
    pub spawn_weight: f32,
    /// Elite archetypes additionally scale with the elite-spawn-rate event.
    #[serde(default)]
    pub elite: bool,
    pub frames: FrameCounts,
}

fn default_impact_frame() -> u32 {
    3
}

fn default_spawn_weight() -> f32 {
    1.0
}

/// The built-in Plant archetype, available without any data files.
pub fn plant_archetype() -> EnemyArchetype {
    EnemyArchetype {
        name: "Plant".to_string(),
        max_health: 50,
        size: 48.0,
        speed: 3.0,
        color: [80, 160, 60],
        attack_trigger_range: 40.0,
        attack_damage_range: 25.0,
        attack_damage: 5,
        attack_cooldown: 1.0,
        impact_frame: 3,
        spawn_weight: 1.0,
        elite: false,
        frames: FrameCounts {
            idle: 8,
            walk: 6,
            run: 8,
            attack: 7,
            death: 10,
        },
    }
}

/// Resource holding all known enemy archetypes, keyed by type id.
#[derive(Resource)]
pub struct EnemyRegistry {
    pub archetypes: HashMap<String, EnemyArchetype>,
}

impl Default for EnemyRegistry {
    fn default() -> Self {
        let mut archetypes = HashMap::new();
        archetypes.insert("plant".to_string(), plant_archetype());
        Self { archetypes }
    }
}

impl EnemyRegistry {
    /// Get an archetype by type id.
    pub fn get(&self, enemy_type: &str) -> Option<&EnemyArchetype> {
        self.archetypes.get(enemy_type)
    }

    /// Archetypes in a stable order, for deterministic weighted selection.
    pub fn sorted(&self) -> Vec<(&String, &EnemyArchetype)> {
        let mut entries: Vec<_> = self.archetypes.iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        entries
    }
}

/// Load archetype files from the data directory into the registry.
///
/// Missing directory or malformed files are logged and skipped; the
/// built-in definitions keep the game playable without any assets.
pub fn load_enemy_archetypes(mut registry: ResMut<EnemyRegistry>) {
    let dir = Path::new(ARCHETYPE_DIR);

    if !dir.exists() {
        warn!("Enemy archetype directory not found: {:?}", dir);
        return;
    }

    let Ok(entries) = fs::read_dir(dir) else {
        warn!("Failed to read enemy archetype directory");
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();

        if path.extension().is_some_and(|ext| ext == "ron") {
            let enemy_type = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("unknown")
                .to_string();

            match fs::read_to_string(&path) {
                Ok(contents) => match ron::from_str::<EnemyArchetype>(&contents) {
                    Ok(archetype) => {
                        info!("Loaded enemy archetype: {} ({})", archetype.name, enemy_type);
                        registry.archetypes.insert(enemy_type, archetype);
                    }
                    Err(e) => {
                        error!("Failed to parse enemy archetype {:?}: {}", path, e);
                    }
                },
                Err(e) => {
                    error!("Failed to read enemy archetype {:?}: {}", path, e);
                }
            }
        }
    }

    info!("{} enemy archetypes available", registry.archetypes.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_has_builtin_plant() {
        let registry = EnemyRegistry::default();
        let plant = registry.get("plant").unwrap();
        assert_eq!(plant.max_health, 50);
        assert_eq!(plant.frames.death, 10);
    }

    #[test]
    fn archetype_parses_from_ron() {
        let ron_str = r#"(
            name: "Skeleton",
            max_health: 80,
            size: 48.0,
            speed: 5.0,
            color: (200, 200, 200),
            attack_trigger_range: 50.0,
            attack_damage_range: 30.0,
            attack_damage: 8,
            attack_cooldown: 1.5,
            elite: true,
            frames: (idle: 6, walk: 6, run: 6, attack: 8, death: 8),
        )"#;
        let archetype: EnemyArchetype = ron::from_str(ron_str).unwrap();
        assert_eq!(archetype.name, "Skeleton");
        assert_eq!(archetype.impact_frame, 3);
        assert_eq!(archetype.spawn_weight, 1.0);
        assert!(archetype.elite);
    }
}
