//! Skill components - cooldown gating plus the Slash and Dash actions.

use bevy::prelude::*;
use std::collections::HashSet;

/// Slash cooldown in seconds.
pub const SLASH_COOLDOWN: f32 = 0.5;
/// Slash damage per hit before multipliers.
pub const SLASH_DAMAGE: i32 = 10;
/// Slash effect duration in seconds.
pub const SLASH_DURATION: f32 = 0.25;
/// Frames in the slash sheet.
pub const SLASH_FRAME_COUNT: u32 = 5;
/// Slash sprite frame dimensions, used for the rotated hitbox.
pub const SLASH_FRAME_SIZE: Vec2 = Vec2::new(64.0, 64.0);
/// Gap between the player edge and the slash hitbox center.
pub const SLASH_OFFSET_PAD: f32 = 4.0;

/// Dash cooldown in seconds.
pub const DASH_COOLDOWN: f32 = 2.0;
/// Dash travel distance.
pub const DASH_RANGE: f32 = 100.0;
/// Dash duration in seconds.
pub const DASH_DURATION: f32 = 0.15;

/// Cooldown gate shared by all skills.
#[derive(Debug, Clone)]
pub struct Cooldown {
    pub duration: f32,
    pub last_used: f32,
}

impl Cooldown {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            last_used: f32::NEG_INFINITY,
        }
    }

    pub fn ready(&self, now: f32) -> bool {
        now - self.last_used >= self.duration
    }

    pub fn trigger(&mut self, now: f32) {
        self.last_used = now;
    }
}

/// Axis-aligned bounding box of a `size` rectangle rotated by `angle`,
/// centered at `center`. The slash hit test is this box against the enemy
/// box - a single rect-vs-rect overlap, not an angular sector.
pub fn rotated_bounding_rect(center: Vec2, size: Vec2, angle: f32) -> Rect {
    let (sin, cos) = angle.sin_cos();
    let width = size.x * cos.abs() + size.y * sin.abs();
    let height = size.x * sin.abs() + size.y * cos.abs();
    Rect::from_center_size(center, Vec2::new(width, height))
}

/// Whether two rects overlap.
pub fn rects_overlap(a: Rect, b: Rect) -> bool {
    !a.intersect(b).is_empty()
}

/// Melee slash - a short frame-stepped swing toward a target point.
///
/// Hit geometry depends on the currently displayed frame's rotation, so the
/// overlap test re-runs every update tick while active. The per-activation
/// hit set guarantees each enemy is damaged at most once per swing.
#[derive(Component, Debug)]
pub struct Slash {
    pub cooldown: Cooldown,
    pub damage: i32,
    pub duration: f32,
    pub frame_count: u32,
    pub active: bool,
    /// Fractional frame index while active.
    pub animation_frame: f32,
    /// Unit vector from the player toward the aim target.
    pub facing: Vec2,
    /// Enemies already damaged during this activation.
    pub hit: HashSet<Entity>,
}

impl Default for Slash {
    fn default() -> Self {
        Self {
            cooldown: Cooldown::new(SLASH_COOLDOWN),
            damage: SLASH_DAMAGE,
            duration: SLASH_DURATION,
            frame_count: SLASH_FRAME_COUNT,
            active: false,
            animation_frame: 0.0,
            facing: Vec2::X,
            hit: HashSet::new(),
        }
    }
}

impl Slash {
    /// Seconds each animation frame is displayed.
    pub fn frame_time(&self) -> f32 {
        self.duration / self.frame_count.max(1) as f32
    }

    /// Activate toward `target`, failing silently on cooldown.
    pub fn try_use(&mut self, now: f32, origin: Vec2, target: Vec2) -> bool {
        if !self.cooldown.ready(now) {
            return false;
        }
        self.cooldown.trigger(now);
        self.active = true;
        self.animation_frame = 0.0;
        self.hit.clear();
        self.facing = (target - origin).normalize_or(Vec2::X);
        true
    }

    /// Advance the swing animation; deactivates past the final frame.
    pub fn advance(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.animation_frame += dt / self.frame_time();
        if self.animation_frame >= self.frame_count as f32 {
            self.active = false;
        }
    }

    /// The current hit rectangle: the sprite frame rotated to the facing
    /// direction, offset from the player center by half the player size
    /// plus a small pad.
    pub fn hit_rect(&self, player_center: Vec2, player_size: f32) -> Rect {
        let offset = player_size / 2.0 + SLASH_OFFSET_PAD;
        let center = player_center + self.facing * offset;
        let angle = self.facing.y.atan2(self.facing.x);
        rotated_bounding_rect(center, SLASH_FRAME_SIZE, angle)
    }
}

/// Dash - a burst of movement along the last input direction.
///
/// Movement skill: it overwrites the player position directly for its
/// duration and must be the last positional write of the frame, which the
/// pipeline guarantees by running skills after movement.
#[derive(Component, Debug)]
pub struct Dash {
    pub cooldown: Cooldown,
    pub range: f32,
    pub duration: f32,
    pub active: bool,
    pub elapsed: f32,
    pub start: Vec2,
    pub end: Vec2,
}

impl Default for Dash {
    fn default() -> Self {
        Self {
            cooldown: Cooldown::new(DASH_COOLDOWN),
            range: DASH_RANGE,
            duration: DASH_DURATION,
            active: false,
            elapsed: 0.0,
            start: Vec2::ZERO,
            end: Vec2::ZERO,
        }
    }
}

impl Dash {
    /// Ready only when off cooldown and not already mid-dash.
    pub fn ready(&self, now: f32) -> bool {
        self.cooldown.ready(now) && !self.active
    }

    /// Activate from `position` along the last nonzero movement direction;
    /// faces right if the player has never moved.
    pub fn try_use(&mut self, now: f32, position: Vec2, last_move: Vec2) -> bool {
        if !self.ready(now) {
            return false;
        }
        self.cooldown.trigger(now);
        let direction = last_move.normalize_or(Vec2::X);
        self.start = position;
        self.end = position + direction * self.range;
        self.elapsed = 0.0;
        self.active = true;
        true
    }

    /// Advance the dash, returning the interpolated position while active.
    pub fn advance(&mut self, dt: f32) -> Option<Vec2> {
        if !self.active {
            return None;
        }
        self.elapsed += dt;
        let t = (self.elapsed / self.duration).min(1.0);
        let position = self.start.lerp(self.end, t);
        if t >= 1.0 {
            self.active = false;
        }
        Some(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotated_rect_of_square_grows_at_diagonals() {
        let straight = rotated_bounding_rect(Vec2::ZERO, Vec2::splat(64.0), 0.0);
        let diagonal =
            rotated_bounding_rect(Vec2::ZERO, Vec2::splat(64.0), std::f32::consts::FRAC_PI_4);
        assert!((straight.width() - 64.0).abs() < 1e-3);
        assert!(diagonal.width() > straight.width());
    }

    #[test]
    fn cooldown_gates_by_elapsed_time() {
        let mut cooldown = Cooldown::new(0.5);
        assert!(cooldown.ready(0.0));
        cooldown.trigger(1.0);
        assert!(!cooldown.ready(1.4));
        assert!(cooldown.ready(1.5));
    }
}
