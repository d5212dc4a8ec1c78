//! Player-related components.

use bevy::prelude::*;

use crate::modes::GameModeConfig;

/// Base health before mode multipliers.
pub const PLAYER_BASE_HEALTH: i32 = 100;
/// Base barrier pool before mode multipliers.
pub const PLAYER_BASE_BARRIER: i32 = 50;
/// Barrier decay in percent of the current pool per second.
pub const PLAYER_BARRIER_DECAY_PERCENT: f32 = 10.0;
/// Base movement speed (arena units per frame at the 60 fps reference).
pub const PLAYER_BASE_SPEED: f32 = 3.0;
/// Player bounding-box side length.
pub const PLAYER_SIZE: f32 = 48.0;
/// Frames in the hurt reaction sheets.
pub const PLAYER_HURT_FRAME_COUNT: u32 = 5;
/// Playback rate of the hurt reaction animation.
pub const PLAYER_HURT_FPS: f32 = 12.0;
/// Movement speed above which the run animation plays instead of walk.
pub const RUN_ANIM_SPEED_THRESHOLD: f32 = 4.0;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Which pool a hurt reaction was triggered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HurtKind {
    /// The barrier absorbed at least part of the hit.
    Barrier,
    /// The hit reached health directly.
    Health,
}

/// Health and barrier pools.
///
/// The barrier is a secondary pool consumed before health and decaying by a
/// percentage of itself per second. Fractional decay accumulates so the
/// integer pool only drops at whole-unit thresholds, never from per-frame
/// rounding noise. Neither pool goes negative.
#[derive(Component, Debug, Clone)]
pub struct Vitals {
    pub health: i32,
    pub max_health: i32,
    pub barrier: i32,
    pub max_barrier: i32,
    pub barrier_decay_percent: f32,
    decay_accum: f32,
}

impl Vitals {
    pub fn new(max_health: i32, max_barrier: i32) -> Self {
        Self {
            health: max_health,
            max_health,
            barrier: max_barrier,
            max_barrier,
            barrier_decay_percent: PLAYER_BARRIER_DECAY_PERCENT,
            decay_accum: 0.0,
        }
    }

    /// Apply damage, barrier first unless bypassed.
    ///
    /// Returns which hurt reaction the hit calls for: barrier takes
    /// precedence when a single hit drains the barrier and spills into
    /// health. Returns `None` when nothing was lost.
    pub fn take_damage(&mut self, amount: i32, barrier_bypass: bool) -> Option<HurtKind> {
        if amount <= 0 {
            return None;
        }

        let mut to_health = amount;
        let mut absorbed = 0;
        if !barrier_bypass && self.barrier > 0 {
            absorbed = self.barrier.min(amount);
            self.barrier -= absorbed;
            to_health -= absorbed;
        }
        if to_health > 0 {
            self.health = (self.health - to_health).max(0);
        }

        if absorbed > 0 {
            Some(HurtKind::Barrier)
        } else if to_health > 0 {
            Some(HurtKind::Health)
        } else {
            None
        }
    }

    /// Continuous barrier decay, accumulating fractional loss.
    pub fn decay_barrier(&mut self, dt: f32) {
        if self.barrier <= 0 {
            return;
        }
        let decay = self.barrier as f32 * (self.barrier_decay_percent / 100.0) * dt;
        self.decay_accum += decay;
        if self.decay_accum >= 1.0 {
            let whole = self.decay_accum as i32;
            self.barrier = (self.barrier - whole).max(0);
            self.decay_accum -= whole as f32;
        }
    }

    /// Restore health, clamped to the maximum.
    pub fn heal(&mut self, amount: i32) {
        self.health = (self.health + amount).min(self.max_health);
    }
}

/// Player animation states for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerAnimState {
    #[default]
    Idle,
    Walk,
    Run,
    HurtHp,
    HurtBarrier,
}

/// Current animation state plus the hurt lock.
///
/// While `lock` is true a hurt animation is playing and subsequent hurt
/// triggers are suppressed (damage still applies). The lock is cleared by
/// the animation-unlock system once the hurt sheet has run its course; the
/// damage handler only ever starts it.
#[derive(Component, Debug, Default)]
pub struct PlayerAnimation {
    pub state: PlayerAnimState,
    /// Seconds since the current animation state began.
    pub timer: f32,
    pub lock: bool,
}

impl PlayerAnimation {
    /// Begin a hurt reaction if none is already playing.
    pub fn trigger_hurt(&mut self, kind: HurtKind) {
        if self.lock {
            return;
        }
        self.state = match kind {
            HurtKind::Barrier => PlayerAnimState::HurtBarrier,
            HurtKind::Health => PlayerAnimState::HurtHp,
        };
        self.timer = 0.0;
        self.lock = true;
    }

    /// Switch between idle/walk/run, unless hurt-locked.
    pub fn set_movement_state(&mut self, state: PlayerAnimState) {
        if self.lock || self.state == state {
            return;
        }
        self.state = state;
        self.timer = 0.0;
    }

    /// How long a hurt reaction plays before the lock releases.
    pub fn hurt_duration() -> f32 {
        PLAYER_HURT_FRAME_COUNT as f32 / PLAYER_HURT_FPS
    }
}

/// Last nonzero movement direction; drives dash direction and facing.
/// Defaults to facing right.
#[derive(Component, Debug)]
pub struct LastMove(pub Vec2);

impl Default for LastMove {
    fn default() -> Self {
        Self(Vec2::X)
    }
}

/// Movement speed and the progression stub.
#[derive(Component, Debug, Clone)]
pub struct PlayerStats {
    pub movement_speed: f32,
    pub size: f32,
    pub level: u32,
    pub exp: f32,
    pub exp_to_next_level_mult: f32,
}

impl PlayerStats {
    /// Build stats with the mode's player multipliers applied up front.
    pub fn from_mode(config: &GameModeConfig) -> Self {
        Self {
            movement_speed: PLAYER_BASE_SPEED * config.player_speed,
            size: PLAYER_SIZE,
            level: 1,
            exp: 0.0,
            exp_to_next_level_mult: 1.02,
        }
    }
}

/// One damage-log entry for analytics and the HUD.
#[derive(Debug, Clone)]
pub struct DamageEntry {
    pub amount: i32,
    pub source: String,
    /// Run time when the hit landed.
    pub at: f32,
}

/// Rolling log of damage taken.
#[derive(Component, Debug, Default)]
pub struct DamageLog {
    pub entries: Vec<DamageEntry>,
}

impl DamageLog {
    pub fn record(&mut self, amount: i32, source: String, at: f32) {
        self.entries.push(DamageEntry { amount, source, at });
    }

    /// The most recent `count` entries, oldest first.
    pub fn recent(&self, count: usize) -> &[DamageEntry] {
        let start = self.entries.len().saturating_sub(count);
        &self.entries[start..]
    }
}
