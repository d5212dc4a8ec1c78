//! Core plugin that sets up game states, events, timing, and the fixed
//! frame pipeline every other plugin hangs its systems on.

use bevy::prelude::*;

use super::arena::ArenaBounds;
use super::clock::{tick_game_clock, GameClock};
use super::damage::apply_damage;
use super::events::*;
use super::input::{poll_input, InputIntent};
use super::rng::GameRng;
use super::settings::{load_settings, Settings};
use super::states::GameState;
use crate::player::{Player, Vitals};

/// Fixed per-frame update order for the gameplay core.
///
/// The order is a contract: healing runs before the player update so a
/// shrine can save a player at exactly zero health the same frame, skill
/// hit tests run after enemies have moved, and dead enemies are reaped in
/// a post-pass so the live list is never mutated mid-iteration.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// World-event aging and activation checks.
    Events,
    /// Healing-shrine effect applied to the player.
    Healing,
    /// Player movement, barrier decay, animation timers.
    Player,
    /// Skill cooldowns, active-effect progression, hit tests.
    Skills,
    /// Conditional enemy spawning.
    Spawning,
    /// Per-enemy AI state machines.
    EnemyAi,
    /// Damage event resolution against player and enemy vitals.
    Damage,
    /// Removal of enemies whose death animation completed.
    Reap,
    /// Player death check and game-over transition.
    GameOver,
}

/// Core plugin - must be added first as other plugins depend on it.
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<GameClock>()
            .init_resource::<InputIntent>()
            .init_resource::<GameRng>()
            .init_resource::<ArenaBounds>()
            .init_resource::<Settings>()
            .add_event::<DamageEvent>()
            .add_event::<EnemyDefeatedEvent>()
            .add_systems(Startup, load_settings)
            .add_systems(PreUpdate, (tick_game_clock, poll_input).chain())
            .configure_sets(
                Update,
                (
                    FrameSet::Events,
                    FrameSet::Healing,
                    FrameSet::Player,
                    FrameSet::Skills,
                    FrameSet::Spawning,
                    FrameSet::EnemyAi,
                    FrameSet::Damage,
                    FrameSet::Reap,
                    FrameSet::GameOver,
                )
                    .chain()
                    .run_if(in_state(GameState::InGame)),
            )
            .add_systems(
                Update,
                handle_pause_input
                    .run_if(in_state(GameState::InGame).or(in_state(GameState::Paused))),
            )
            .add_systems(Update, start_run.run_if(in_state(GameState::MainMenu)))
            .add_systems(
                Update,
                leave_game_over.run_if(in_state(GameState::GameOver)),
            )
            .add_systems(Update, apply_damage.in_set(FrameSet::Damage))
            .add_systems(Update, check_game_over.in_set(FrameSet::GameOver));
    }
}

/// Toggle pause from the input intent.
fn handle_pause_input(
    intent: Res<InputIntent>,
    current_state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if intent.pause_pressed {
        match current_state.get() {
            GameState::InGame => next_state.set(GameState::Paused),
            GameState::Paused => next_state.set(GameState::InGame),
            _ => {}
        }
    }
}

/// Start a run from the main menu.
fn start_run(intent: Res<InputIntent>, mut next_state: ResMut<NextState<GameState>>) {
    if intent.confirm_pressed {
        next_state.set(GameState::InGame);
    }
}

/// Return to the main menu from the game-over screen.
fn leave_game_over(intent: Res<InputIntent>, mut next_state: ResMut<NextState<GameState>>) {
    if intent.confirm_pressed || intent.pause_pressed {
        next_state.set(GameState::MainMenu);
    }
}

/// Flag game over once the player's health is gone.
///
/// This is the only place the check happens, exactly once per frame after
/// all damage has been applied.
fn check_game_over(
    player_query: Query<&Vitals, With<Player>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Ok(vitals) = player_query.get_single() else {
        return;
    };

    if vitals.health <= 0 {
        info!("Player died, game over");
        next_state.set(GameState::GameOver);
    }
}
