//! Enemy AI behavior systems.
//!
//! One chained pass per frame: death entry, death animation, hurt-overlay
//! aging, movement, attack cycles, then the animation step - mirroring the
//! order the state machine depends on (attack logic reads the frame index
//! the previous step produced).

use bevy::prelude::*;

use super::components::*;
use crate::core::{DamageEvent, EnemyDefeatedEvent, GameClock};
use crate::player::Player;

/// Enter the death state once health is gone.
///
/// Unconditional and irreversible: it preempts an attack mid-animation, and
/// the draw position freezes so the death sequence doesn't jitter.
pub fn check_enemy_death(
    mut query: Query<
        (
            &EnemyVitals,
            &Transform,
            &mut AiState,
            &mut EnemyAnimation,
            &mut FixedDrawPos,
        ),
        With<Enemy>,
    >,
) {
    for (vitals, transform, mut state, mut animation, mut fixed_pos) in query.iter_mut() {
        if vitals.current <= 0 && *state != AiState::Death {
            *state = AiState::Death;
            animation.reset();
            fixed_pos.0 = Some(transform.translation.truncate());
        }
    }
}

/// Play out the death animation; only once the full frame sequence has
/// elapsed is the enemy marked defeated for the reap pass. No other logic
/// runs for a dying enemy.
pub fn update_death_animations(
    mut commands: Commands,
    clock: Res<GameClock>,
    mut defeated_events: EventWriter<EnemyDefeatedEvent>,
    mut query: Query<
        (Entity, &EnemyStats, &mut EnemyAnimation, &AiState),
        (With<Enemy>, Without<Defeated>),
    >,
) {
    for (entity, stats, mut animation, state) in query.iter_mut() {
        if *state != AiState::Death {
            continue;
        }
        animation.timer += clock.dt;
        if animation.timer > ENEMY_FRAME_STEP {
            animation.frame += 1;
            animation.timer = 0.0;
            if animation.frame >= stats.frames.death {
                commands.entity(entity).insert(Defeated);
                defeated_events.send(EnemyDefeatedEvent {
                    entity,
                    archetype: stats.archetype.clone(),
                });
            }
        }
    }
}

/// Age the cosmetic hurt tint.
pub fn tick_hurt_overlays(clock: Res<GameClock>, mut query: Query<&mut HurtOverlay, With<Enemy>>) {
    for mut overlay in query.iter_mut() {
        if overlay.remaining > 0.0 {
            overlay.remaining -= clock.dt;
        }
    }
}

/// Move toward the player and pick the walk/run state.
///
/// Movement halts while attacking or dying, and stops inside the damage
/// range so enemies don't stack on top of the player.
pub fn enemy_movement(
    clock: Res<GameClock>,
    player_query: Query<&Transform, (With<Player>, Without<Enemy>)>,
    mut enemy_query: Query<
        (
            &mut Transform,
            &EnemyStats,
            &StatModifiers,
            &mut AiState,
            &mut EnemyAnimation,
            &mut Facing,
        ),
        (With<Enemy>, Without<Player>),
    >,
) {
    let Ok(player_transform) = player_query.get_single() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();

    for (mut transform, stats, modifiers, mut state, mut animation, mut facing) in
        enemy_query.iter_mut()
    {
        if matches!(*state, AiState::Death | AiState::Attack) {
            continue;
        }

        let enemy_pos = transform.translation.truncate();
        let delta = player_pos - enemy_pos;
        let distance = delta.length();
        *facing = cardinal_direction(delta);

        let speed = stats.speed * modifiers.speed;
        if distance > stats.attack_damage_range && distance > f32::EPSILON {
            let step = delta / distance * speed * clock.dt * 60.0;
            transform.translation.x += step.x;
            transform.translation.y += step.y;
        }

        let new_state = if speed > RUN_SPEED_THRESHOLD {
            AiState::Run
        } else {
            AiState::Walk
        };
        if *state != new_state {
            *state = new_state;
            animation.reset();
        }
    }
}

/// Attack cycle logic.
///
/// An attack starts when the player is inside the trigger range and the
/// cooldown has elapsed. Damage lands exactly once per cycle, on the impact
/// frame, and only if the player is still inside the damage range. The
/// final frame ends the cycle and starts the cooldown.
pub fn enemy_attack(
    clock: Res<GameClock>,
    player_query: Query<(Entity, &Transform), (With<Player>, Without<Enemy>)>,
    mut enemy_query: Query<
        (
            &Transform,
            &EnemyStats,
            &StatModifiers,
            &mut AiState,
            &mut EnemyAnimation,
            &mut AttackCycle,
        ),
        (With<Enemy>, Without<Player>),
    >,
    mut damage_events: EventWriter<DamageEvent>,
) {
    let Ok((player_entity, player_transform)) = player_query.get_single() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();
    let now = clock.now();

    for (transform, stats, modifiers, mut state, mut animation, mut cycle) in
        enemy_query.iter_mut()
    {
        if *state == AiState::Death {
            continue;
        }

        let distance = player_pos.distance(transform.translation.truncate());

        if *state == AiState::Attack {
            if animation.frame == stats.impact_frame && !cycle.damage_dealt {
                if distance < stats.attack_damage_range {
                    let amount =
                        (stats.attack_damage as f32 * modifiers.damage).round() as i32;
                    damage_events.send(DamageEvent {
                        target: player_entity,
                        source: stats.name.clone(),
                        amount,
                        barrier_bypass: false,
                    });
                }
                cycle.damage_dealt = true;
            }

            if animation.frame >= stats.frames.attack - 1 {
                *state = if stats.speed * modifiers.speed > RUN_SPEED_THRESHOLD {
                    AiState::Run
                } else {
                    AiState::Walk
                };
                cycle.damage_dealt = false;
                cycle.last_attack = now;
                animation.reset();
            }
        } else if distance < stats.attack_trigger_range
            && now - cycle.last_attack > stats.attack_cooldown
        {
            *state = AiState::Attack;
            animation.reset();
            cycle.damage_dealt = false;
        }
    }
}

/// Frame-step the walk/run/attack animations. Movement animations loop;
/// the attack animation holds on its last frame until the cycle ends.
pub fn step_enemy_animations(
    clock: Res<GameClock>,
    mut query: Query<(&EnemyStats, &AiState, &mut EnemyAnimation), With<Enemy>>,
) {
    for (stats, state, mut animation) in query.iter_mut() {
        let frames = match state {
            AiState::Walk => stats.frames.walk,
            AiState::Run => stats.frames.run,
            AiState::Attack => stats.frames.attack,
            _ => continue,
        };

        animation.timer += clock.dt;
        if animation.timer > ENEMY_FRAME_STEP {
            if *state == AiState::Attack {
                if animation.frame < frames - 1 {
                    animation.frame += 1;
                }
            } else {
                animation.frame = (animation.frame + 1) % frames.max(1);
            }
            animation.timer = 0.0;
        }
    }
}

/// Remove enemies whose death animation has completed.
///
/// Runs as a post-pass so the live list is never mutated while the AI or
/// skill systems iterate it.
pub fn reap_defeated_enemies(mut commands: Commands, query: Query<Entity, With<Defeated>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
