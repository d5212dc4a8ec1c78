//! Game events plugin - event aging/activation and the shrine heal.

use bevy::prelude::*;

use super::manager::GameEventManager;
use crate::core::{FrameSet, GameClock, GameRng, GameState};
use crate::modes::GameMode;
use crate::player::{Player, Vitals};

/// Fractional carry for the heal-over-time effect, so whole hit points are
/// restored at unit thresholds regardless of frame rate.
#[derive(Resource, Debug, Default)]
pub struct ShrineHealing {
    pub accum: f32,
}

/// Game events plugin - timed world events and their player-facing effects.
pub struct GameEventsPlugin;

impl Plugin for GameEventsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameEventManager>()
            .init_resource::<ShrineHealing>()
            .add_systems(
                OnTransition {
                    exited: GameState::MainMenu,
                    entered: GameState::InGame,
                },
                reset_events,
            )
            .add_systems(Update, update_game_events.in_set(FrameSet::Events))
            .add_systems(Update, apply_shrine_healing.in_set(FrameSet::Healing));
    }
}

/// Clear event state for a fresh run.
fn reset_events(mut manager: ResMut<GameEventManager>, mut healing: ResMut<ShrineHealing>) {
    manager.reset();
    healing.accum = 0.0;
}

/// Age active events and roll the periodic activation checks.
fn update_game_events(
    clock: Res<GameClock>,
    mode: Res<GameMode>,
    mut manager: ResMut<GameEventManager>,
    mut rng: ResMut<GameRng>,
) {
    let chances = &mode.config().event_chances;
    manager.update(clock.dt, chances, &mut rng.0);
}

/// Apply the healing shrine's flat HP per second to the player.
///
/// Runs before the player stage so a heal landing this frame counts before
/// the end-of-frame death check.
fn apply_shrine_healing(
    clock: Res<GameClock>,
    manager: Res<GameEventManager>,
    mut healing: ResMut<ShrineHealing>,
    mut query: Query<&mut Vitals, With<Player>>,
) {
    let Some(rate) = manager.healing_shrine() else {
        healing.accum = 0.0;
        return;
    };
    let Ok(mut vitals) = query.get_single_mut() else {
        return;
    };

    healing.accum += rate as f32 * clock.dt;
    if healing.accum >= 1.0 {
        let whole = healing.accum as i32;
        vitals.heal(whole);
        healing.accum -= whole as f32;
    }
}
