//! Enemy-related components.

use bevy::prelude::*;

use super::data::{EnemyArchetype, FrameCounts};

/// Seconds each enemy animation frame is displayed.
pub const ENEMY_FRAME_STEP: f32 = 0.1;

/// Speed above which the run animation plays instead of walk.
pub const RUN_SPEED_THRESHOLD: f32 = 4.0;

/// How long the hurt tint stays visible after a hit.
pub const HURT_OVERLAY_DURATION: f32 = 0.5;

/// Marker component for all enemies.
#[derive(Component)]
pub struct Enemy;

/// Per-instance copy of the archetype's combat-relevant stats.
///
/// Copied at spawn so the shared archetype is never mutated.
#[derive(Component, Clone, Debug)]
pub struct EnemyStats {
    /// Type id in the registry, e.g. "plant".
    pub archetype: String,
    pub name: String,
    pub size: f32,
    pub speed: f32,
    pub attack_trigger_range: f32,
    pub attack_damage_range: f32,
    pub attack_damage: i32,
    pub attack_cooldown: f32,
    pub impact_frame: u32,
    pub frames: FrameCounts,
}

impl EnemyStats {
    pub fn from_archetype(id: &str, archetype: &EnemyArchetype) -> Self {
        Self {
            archetype: id.to_string(),
            name: archetype.name.clone(),
            size: archetype.size,
            speed: archetype.speed,
            attack_trigger_range: archetype.attack_trigger_range,
            attack_damage_range: archetype.attack_damage_range,
            attack_damage: archetype.attack_damage,
            attack_cooldown: archetype.attack_cooldown,
            impact_frame: archetype.impact_frame,
            frames: archetype.frames,
        }
    }
}

/// Current enemy health. Death is driven by the AI state machine once this
/// reaches zero, not by immediate removal.
#[derive(Component, Debug)]
pub struct EnemyVitals {
    pub current: i32,
    pub max: i32,
}

impl EnemyVitals {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }
}

/// Mode multipliers carried as instance-level overrides.
///
/// Every enemy has the full shape; `1.0` means unmodified.
#[derive(Component, Debug, Clone, Copy)]
pub struct StatModifiers {
    pub damage: f32,
    pub speed: f32,
}

impl Default for StatModifiers {
    fn default() -> Self {
        Self {
            damage: 1.0,
            speed: 1.0,
        }
    }
}

/// AI state machine for enemy behavior.
///
/// Death is terminal and preempts every other state; the hurt tint is an
/// overlay, not a state, and never interrupts movement or attacks.
#[derive(Component, Default, PartialEq, Eq, Clone, Copy, Debug)]
pub enum AiState {
    /// Freshly spawned, before the first update picks a movement state.
    #[default]
    Idle,
    /// Moving toward the player at walking pace.
    Walk,
    /// Moving toward the player at running pace.
    Run,
    /// Performing an attack cycle; movement halts.
    Attack,
    /// Playing the death animation before removal.
    Death,
}

/// Frame-stepped animation counter.
#[derive(Component, Debug, Default)]
pub struct EnemyAnimation {
    pub frame: u32,
    pub timer: f32,
}

impl EnemyAnimation {
    pub fn reset(&mut self) {
        self.frame = 0;
        self.timer = 0.0;
    }
}

/// Attack cycle bookkeeping: re-entry cooldown and the once-per-cycle
/// damage guard.
#[derive(Component, Debug)]
pub struct AttackCycle {
    pub last_attack: f32,
    pub damage_dealt: bool,
}

impl Default for AttackCycle {
    fn default() -> Self {
        Self {
            last_attack: f32::NEG_INFINITY,
            damage_dealt: false,
        }
    }
}

/// Cosmetic red-tint timer set when the enemy takes damage.
#[derive(Component, Debug, Default)]
pub struct HurtOverlay {
    pub remaining: f32,
}

impl HurtOverlay {
    pub fn flash(&mut self) {
        self.remaining = HURT_OVERLAY_DURATION;
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }
}

/// Draw position frozen at death entry so continued integration never
/// jitters the death animation.
#[derive(Component, Debug, Default)]
pub struct FixedDrawPos(pub Option<Vec2>);

/// Marker inserted once the death frame sequence has completed; the reap
/// system removes these in a post-pass.
#[derive(Component)]
pub struct Defeated;

/// Four-way sprite orientation.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    #[default]
    Down,
    Up,
    Left,
    Right,
}

/// Pick a cardinal direction from the dominant axis of `delta`; diagonal
/// movement does not get diagonal sprites.
pub fn cardinal_direction(delta: Vec2) -> Facing {
    if delta.x.abs() > delta.y.abs() {
        if delta.x > 0.0 {
            Facing::Right
        } else {
            Facing::Left
        }
    } else if delta.y > 0.0 {
        Facing::Down
    } else {
        Facing::Up
    }
}

/// Axis-aligned bounding box for an enemy centered at `center`.
pub fn enemy_rect(center: Vec2, size: f32) -> Rect {
    Rect::from_center_size(center, Vec2::splat(size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dominant_axis_picks_cardinal() {
        assert_eq!(cardinal_direction(Vec2::new(5.0, 2.0)), Facing::Right);
        assert_eq!(cardinal_direction(Vec2::new(-5.0, 2.0)), Facing::Left);
        assert_eq!(cardinal_direction(Vec2::new(1.0, 3.0)), Facing::Down);
        assert_eq!(cardinal_direction(Vec2::new(1.0, -3.0)), Facing::Up);
    }

    #[test]
    fn vertical_wins_ties() {
        assert_eq!(cardinal_direction(Vec2::new(2.0, 2.0)), Facing::Down);
    }
}
