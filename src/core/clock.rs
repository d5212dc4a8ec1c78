//! Run clock for the frame-stepped simulation.
//!
//! Every timing read in the gameplay layer (cooldowns, animation steps,
//! event durations) goes through this resource instead of the wall clock,
//! so a fixed dt sequence reproduces a run exactly.

use bevy::prelude::*;

/// Per-frame timing for the current run.
///
/// `dt` is the delta for the frame being simulated and `elapsed` the
/// accumulated run time. In `manual` mode the tick system leaves `dt`
/// untouched, letting tests drive the simulation with exact deltas.
#[derive(Resource, Debug, Clone)]
pub struct GameClock {
    /// Delta time for the current frame, in seconds.
    pub dt: f32,
    /// Accumulated run time, in seconds.
    pub elapsed: f32,
    /// When true, `dt` is supplied externally instead of read from `Time`.
    pub manual: bool,
}

impl Default for GameClock {
    fn default() -> Self {
        Self {
            dt: 0.0,
            elapsed: 0.0,
            manual: false,
        }
    }
}

impl GameClock {
    /// A clock driven manually with fixed deltas (used by tests).
    pub fn manual() -> Self {
        Self {
            manual: true,
            ..Self::default()
        }
    }

    /// Current run time, used as "now" for cooldown timestamps.
    pub fn now(&self) -> f32 {
        self.elapsed
    }

    /// Reset accumulated time for a fresh run.
    pub fn restart(&mut self) {
        self.elapsed = 0.0;
    }
}

/// Advance the run clock once per frame.
///
/// Runs in `PreUpdate` so every gameplay system sees the same dt. `Time` is
/// optional so headless test apps without the time plugin still work.
pub fn tick_game_clock(time: Option<Res<Time>>, mut clock: ResMut<GameClock>) {
    if !clock.manual {
        clock.dt = match &time {
            Some(time) => time.delta_secs(),
            None => 0.0,
        };
    }
    let dt = clock.dt;
    clock.elapsed += dt;
}
