//! Player spawning, movement, and vitals upkeep.

use bevy::prelude::*;

use super::components::*;
use crate::core::{ArenaBounds, FrameSet, GameClock, GameState, InputIntent};
use crate::modes::GameMode;
use crate::skills::{Dash, Slash};

/// Set up player systems on the frame pipeline.
pub fn setup_player_systems(app: &mut App) {
    // A run starts only from the menu; resuming from pause re-enters
    // InGame without resetting anything.
    app.add_systems(
        OnTransition {
            exited: GameState::MainMenu,
            entered: GameState::InGame,
        },
        spawn_player,
    )
        .add_systems(
            Update,
            (
                unlock_hurt_animation,
                player_movement,
                barrier_decay,
                tick_animation,
            )
                .chain()
                .in_set(FrameSet::Player),
        );
}

/// Build a fresh player at the arena center, applying the mode's player
/// multipliers at construction so the entity is consistent from frame one.
///
/// Any player from a previous run is despawned first; starting a run from
/// the menu is the reset path. The run clock restarts with it.
pub fn spawn_player(
    mut commands: Commands,
    mode: Res<GameMode>,
    bounds: Res<ArenaBounds>,
    mut clock: ResMut<GameClock>,
    existing: Query<Entity, With<Player>>,
) {
    for entity in existing.iter() {
        commands.entity(entity).despawn_recursive();
    }
    clock.restart();

    let config = mode.config();
    let max_health = (PLAYER_BASE_HEALTH as f32 * config.player_health) as i32;
    let center = bounds.center();

    commands.spawn((
        Player,
        Vitals::new(max_health, PLAYER_BASE_BARRIER),
        PlayerStats::from_mode(config),
        PlayerAnimation::default(),
        LastMove::default(),
        DamageLog::default(),
        Slash::default(),
        Dash::default(),
        Transform::from_xyz(center.x, center.y, 0.0),
    ));

    info!(
        "Spawned player for {} (health {})",
        config.display_name, max_health
    );
}

/// Move the player from the current input intent.
///
/// No momentum: position changes are a direct function of this frame's
/// intent. The last nonzero direction persists for dash and facing. The x60
/// factor keeps speed values in a per-frame scale at a 60 fps reference.
pub fn player_movement(
    intent: Res<InputIntent>,
    clock: Res<GameClock>,
    mut query: Query<(&mut Transform, &mut LastMove, &mut PlayerAnimation, &PlayerStats), With<Player>>,
) {
    let Ok((mut transform, mut last_move, mut animation, stats)) = query.get_single_mut() else {
        return;
    };

    let movement = intent.movement;
    if movement != Vec2::ZERO {
        last_move.0 = movement;
        transform.translation.x += movement.x * stats.movement_speed * clock.dt * 60.0;
        transform.translation.y += movement.y * stats.movement_speed * clock.dt * 60.0;

        let state = if stats.movement_speed > RUN_ANIM_SPEED_THRESHOLD {
            PlayerAnimState::Run
        } else {
            PlayerAnimState::Walk
        };
        animation.set_movement_state(state);
    } else {
        animation.set_movement_state(PlayerAnimState::Idle);
    }
}

/// Continuous barrier decay.
pub fn barrier_decay(clock: Res<GameClock>, mut query: Query<&mut Vitals, With<Player>>) {
    for mut vitals in query.iter_mut() {
        vitals.decay_barrier(clock.dt);
    }
}

/// Advance the animation timer every frame.
pub fn tick_animation(clock: Res<GameClock>, mut query: Query<&mut PlayerAnimation, With<Player>>) {
    for mut animation in query.iter_mut() {
        animation.timer += clock.dt;
    }
}

/// Release the hurt lock once the hurt sheet has played through.
///
/// The damage handler only starts the lock; ending it is this side of the
/// cross-component timing contract.
pub fn unlock_hurt_animation(mut query: Query<&mut PlayerAnimation, With<Player>>) {
    for mut animation in query.iter_mut() {
        if animation.lock && animation.timer >= PlayerAnimation::hurt_duration() {
            animation.lock = false;
            animation.state = PlayerAnimState::Idle;
            animation.timer = 0.0;
        }
    }
}
