//! Skill systems - activation (manual and automatic), per-frame updates,
//! and slash hit detection.

use bevy::prelude::*;

use super::components::{rects_overlap, Dash, Slash};
use crate::core::{DamageEvent, FrameSet, GameClock, InputIntent, Settings};
use crate::enemies::{enemy_rect, AiState, Enemy, EnemyStats};
use crate::game_events::GameEventManager;
use crate::modes::GameMode;
use crate::player::{LastMove, Player, PlayerStats};

/// Set up skill systems on the frame pipeline.
pub fn setup_skill_systems(app: &mut App) {
    app.add_systems(
        Update,
        (trigger_skills, update_slash, update_dash)
            .chain()
            .in_set(FrameSet::Skills),
    );
}

/// Find the center of the closest living enemy to `from`.
pub fn nearest_enemy_center(
    from: Vec2,
    enemies: impl Iterator<Item = (Vec2, AiState)>,
) -> Option<Vec2> {
    enemies
        .filter(|(_, state)| *state != AiState::Death)
        .min_by(|(a, _), (b, _)| {
            a.distance_squared(from)
                .total_cmp(&b.distance_squared(from))
        })
        .map(|(center, _)| center)
}

/// Activate skills from input presses and the auto-attack setting.
///
/// Aimed skills target the nearest living enemy when auto-aim is on (and do
/// nothing if there is none), otherwise the pointer. Dash always follows the
/// last movement direction regardless of aim.
fn trigger_skills(
    intent: Res<InputIntent>,
    settings: Res<Settings>,
    clock: Res<GameClock>,
    mut player_query: Query<(&Transform, &LastMove, &mut Slash, &mut Dash), With<Player>>,
    enemy_query: Query<(&Transform, &AiState), With<Enemy>>,
) {
    let Ok((transform, last_move, mut slash, mut dash)) = player_query.get_single_mut() else {
        return;
    };

    let now = clock.now();
    let origin = transform.translation.truncate();

    let aim_target = if settings.auto_aim {
        nearest_enemy_center(
            origin,
            enemy_query
                .iter()
                .map(|(t, state)| (t.translation.truncate(), *state)),
        )
    } else {
        Some(intent.pointer)
    };

    let slash_wanted = intent.slash_pressed || (settings.auto_attack && slash.cooldown.ready(now));
    if slash_wanted {
        if let Some(target) = aim_target {
            slash.try_use(now, origin, target);
        }
    }

    if intent.dash_pressed {
        dash.try_use(now, origin, last_move.0);
    }
}

/// Advance the slash swing and test its rotated hitbox against enemies.
///
/// The test re-runs every tick while active because the hit geometry
/// follows the displayed frame; the per-activation hit set keeps each
/// enemy to a single damage application per swing.
fn update_slash(
    clock: Res<GameClock>,
    mode: Res<GameMode>,
    events: Res<GameEventManager>,
    mut player_query: Query<(&Transform, &PlayerStats, &mut Slash), With<Player>>,
    enemy_query: Query<(Entity, &Transform, &EnemyStats, &AiState), With<Enemy>>,
    mut damage_events: EventWriter<DamageEvent>,
) {
    let Ok((transform, stats, mut slash)) = player_query.get_single_mut() else {
        return;
    };

    slash.advance(clock.dt);
    if !slash.active {
        return;
    }

    let center = transform.translation.truncate();
    let hit_rect = slash.hit_rect(center, stats.size);
    let damage_scale = mode.config().player_damage * events.multipliers().damage_to_enemies;
    let damage = (slash.damage as f32 * damage_scale).round() as i32;

    for (entity, enemy_transform, enemy_stats, state) in enemy_query.iter() {
        if *state == AiState::Death || slash.hit.contains(&entity) {
            continue;
        }
        let target_rect = enemy_rect(enemy_transform.translation.truncate(), enemy_stats.size);
        if rects_overlap(hit_rect, target_rect) {
            damage_events.send(DamageEvent {
                target: entity,
                source: "slash".to_string(),
                amount: damage,
                barrier_bypass: false,
            });
            slash.hit.insert(entity);
        }
    }
}

/// Interpolate an active dash, overwriting the player position.
fn update_dash(
    clock: Res<GameClock>,
    mut query: Query<(&mut Transform, &mut Dash), With<Player>>,
) {
    let Ok((mut transform, mut dash)) = query.get_single_mut() else {
        return;
    };

    if let Some(position) = dash.advance(clock.dt) {
        transform.translation.x = position.x;
        transform.translation.y = position.y;
    }
}
