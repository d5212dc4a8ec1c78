//! Enemy spawning - time-gated, weighted-random creation at arena edges.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::Rng;

use super::components::*;
use super::data::{EnemyArchetype, EnemyRegistry};
use crate::core::{ArenaBounds, GameClock, GameRng};
use crate::game_events::GameEventManager;
use crate::modes::GameMode;

/// Base seconds between spawns, before the mode's spawn-rate multiplier.
pub const SPAWN_INTERVAL: f32 = 2.0;

/// Makes an archetype's weight change once a run-time threshold passes,
/// e.g. rarer types becoming more common later in a run.
#[derive(Debug, Clone)]
pub struct SpawnWeightRule {
    /// Registry id the rule applies to.
    pub archetype: String,
    /// Run time in seconds after which the rule is active.
    pub after_secs: f32,
    pub multiplier: f32,
}

/// Spawn gate state and weight rules.
#[derive(Resource, Debug)]
pub struct EnemySpawner {
    pub spawn_interval: f32,
    pub last_spawn: f32,
    pub weight_rules: Vec<SpawnWeightRule>,
}

impl Default for EnemySpawner {
    fn default() -> Self {
        Self {
            spawn_interval: SPAWN_INTERVAL,
            last_spawn: f32::NEG_INFINITY,
            weight_rules: Vec::new(),
        }
    }
}

impl EnemySpawner {
    /// Whether the interval has elapsed since the last spawn.
    pub fn can_spawn(&self, now: f32, interval: f32) -> bool {
        now - self.last_spawn >= interval
    }

    /// Base weight with every matching time rule applied.
    pub fn effective_weight(&self, id: &str, base: f32, run_time: f32) -> f32 {
        self.weight_rules
            .iter()
            .filter(|rule| rule.archetype == id && run_time > rule.after_secs)
            .fold(base, |weight, rule| weight * rule.multiplier)
    }
}

/// Cumulative-weight roulette over the registry.
///
/// Draws r uniform in [0, total) and walks the (stably ordered) archetype
/// list accumulating weight until the running sum reaches r. Elite
/// archetypes get the event layer's elite-spawn-rate multiplier on top.
pub fn choose_archetype<'a>(
    registry: &'a EnemyRegistry,
    spawner: &EnemySpawner,
    run_time: f32,
    elite_multiplier: f32,
    rng: &mut StdRng,
) -> Option<(&'a String, &'a EnemyArchetype)> {
    let entries = registry.sorted();
    if entries.is_empty() {
        return None;
    }

    let weights: Vec<f32> = entries
        .iter()
        .map(|(id, archetype)| {
            let mut weight = spawner.effective_weight(id, archetype.spawn_weight, run_time);
            if archetype.elite {
                weight *= elite_multiplier;
            }
            weight
        })
        .collect();

    let total: f32 = weights.iter().sum();
    if total <= 0.0 {
        return entries.first().copied();
    }

    let r = rng.gen_range(0.0..total);
    let mut upto = 0.0;
    for (entry, weight) in entries.iter().zip(weights.iter()) {
        if upto + weight >= r {
            return Some(*entry);
        }
        upto += weight;
    }
    entries.first().copied()
}

/// Uniform position on one of the four arena edges; enemies always enter
/// from the boundary, never the interior.
pub fn random_edge_position(bounds: &ArenaBounds, rng: &mut StdRng) -> Vec2 {
    match rng.gen_range(0..4u8) {
        0 => Vec2::new(rng.gen_range(0.0..=bounds.width), 0.0),
        1 => Vec2::new(rng.gen_range(0.0..=bounds.width), bounds.height),
        2 => Vec2::new(0.0, rng.gen_range(0.0..=bounds.height)),
        _ => Vec2::new(bounds.width, rng.gen_range(0.0..=bounds.height)),
    }
}

/// Clear leftover enemies and re-arm the spawn gate for a fresh run.
pub fn reset_spawner(
    mut commands: Commands,
    mut spawner: ResMut<EnemySpawner>,
    enemies: Query<Entity, With<Enemy>>,
) {
    for entity in enemies.iter() {
        commands.entity(entity).despawn_recursive();
    }
    spawner.last_spawn = f32::NEG_INFINITY;
}

/// Spawn one enemy when the mode-adjusted interval has elapsed.
///
/// The new enemy's health is scaled by the mode's enemy-health multiplier,
/// and the damage/speed multipliers ride along as instance overrides; the
/// shared archetype is never touched.
pub fn spawn_enemies(
    mut commands: Commands,
    clock: Res<GameClock>,
    mode: Res<GameMode>,
    registry: Res<EnemyRegistry>,
    events: Res<GameEventManager>,
    bounds: Res<ArenaBounds>,
    mut spawner: ResMut<EnemySpawner>,
    mut rng: ResMut<GameRng>,
) {
    let config = mode.config();
    let now = clock.now();
    let interval = spawner.spawn_interval / config.enemy_spawn_rate;
    if !spawner.can_spawn(now, interval) {
        return;
    }

    let elite_multiplier = events.multipliers().elite_spawn_rate;
    let Some((id, archetype)) =
        choose_archetype(&registry, &spawner, clock.elapsed, elite_multiplier, &mut rng.0)
    else {
        return;
    };

    spawner.last_spawn = now;
    let position = random_edge_position(&bounds, &mut rng.0);
    let health = (archetype.max_health as f32 * config.enemy_health) as i32;

    commands.spawn((
        Enemy,
        EnemyStats::from_archetype(id, archetype),
        EnemyVitals::new(health),
        StatModifiers {
            damage: config.enemy_damage,
            speed: config.enemy_speed,
        },
        AiState::default(),
        EnemyAnimation::default(),
        AttackCycle::default(),
        HurtOverlay::default(),
        FixedDrawPos::default(),
        Facing::default(),
        Transform::from_xyz(position.x, position.y, 0.0),
    ));

    debug!("Spawned {} at {:?} with {} health", archetype.name, position, health);
}
