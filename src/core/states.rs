//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. Gameplay systems
//! only run in the InGame state; Paused and GameOver freeze the world while
//! the presentation layer keeps drawing it.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// The game transitions between these states based on player actions:
/// - Start in `MainMenu` where a run is configured
/// - Enter `InGame` when the player starts a run
/// - `Paused` freezes gameplay but keeps the world visible
/// - `GameOver` when the player dies; the transition is one-way, and a new
///   run only starts by going back through MainMenu (which rebuilds the world)
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Main menu / title screen
    #[default]
    MainMenu,
    /// Active gameplay
    InGame,
    /// Game is paused (overlay on gameplay)
    Paused,
    /// Player has died
    GameOver,
}
