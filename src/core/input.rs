//! Input intent - the logical input consumed by the gameplay core.
//!
//! Raw device polling is an external concern; gameplay systems only ever
//! read the `InputIntent` resource. The polling system here fills it from
//! keyboard/mouse state when those resources exist, and tests write the
//! intent directly.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Factor applied to each axis of a diagonal so diagonal speed equals
/// axial speed (1 / sqrt(2)).
pub const DIAGONAL_FACTOR: f32 = 0.7071;

/// Logical input for one frame.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputIntent {
    /// Movement vector with diagonal input normalized. Zero when idle.
    pub movement: Vec2,
    /// Pointer position in arena coordinates, for aimed skills.
    pub pointer: Vec2,
    /// Slash skill pressed this frame.
    pub slash_pressed: bool,
    /// Dash skill pressed this frame.
    pub dash_pressed: bool,
    /// Pause toggle edge event.
    pub pause_pressed: bool,
    /// Confirm/start edge event (menu and game-over screens).
    pub confirm_pressed: bool,
}

/// Build a movement vector from four directional key states, normalizing
/// diagonals by a fixed scalar so diagonal movement is not faster.
pub fn movement_vector(up: bool, down: bool, left: bool, right: bool) -> Vec2 {
    let mut dx = 0.0;
    let mut dy = 0.0;
    if up {
        dy -= 1.0;
    }
    if down {
        dy += 1.0;
    }
    if left {
        dx -= 1.0;
    }
    if right {
        dx += 1.0;
    }
    if dx != 0.0 && dy != 0.0 {
        dx *= DIAGONAL_FACTOR;
        dy *= DIAGONAL_FACTOR;
    }
    Vec2::new(dx, dy)
}

/// Poll keyboard and mouse into the intent resource.
///
/// WASD moves, left mouse slashes, Space dashes, Escape pauses, Enter
/// confirms. All device resources are optional so a headless app without
/// input plugins simply keeps whatever intent was set externally.
pub fn poll_input(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    mouse: Option<Res<ButtonInput<MouseButton>>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut intent: ResMut<InputIntent>,
) {
    let Some(keyboard) = keyboard else {
        return;
    };

    intent.movement = movement_vector(
        keyboard.pressed(KeyCode::KeyW),
        keyboard.pressed(KeyCode::KeyS),
        keyboard.pressed(KeyCode::KeyA),
        keyboard.pressed(KeyCode::KeyD),
    );
    intent.dash_pressed = keyboard.just_pressed(KeyCode::Space);
    intent.pause_pressed = keyboard.just_pressed(KeyCode::Escape);
    intent.confirm_pressed = keyboard.just_pressed(KeyCode::Enter);

    intent.slash_pressed = mouse
        .as_ref()
        .is_some_and(|mouse| mouse.just_pressed(MouseButton::Left));

    if let Ok(window) = windows.get_single() {
        if let Some(cursor) = window.cursor_position() {
            intent.pointer = cursor;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axial_movement_is_unit_length() {
        assert_eq!(movement_vector(true, false, false, false), Vec2::new(0.0, -1.0));
        assert_eq!(movement_vector(false, false, false, true), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn diagonal_movement_is_normalized() {
        let v = movement_vector(true, false, false, true);
        assert_eq!(v, Vec2::new(DIAGONAL_FACTOR, -DIAGONAL_FACTOR));
    }

    #[test]
    fn opposing_keys_cancel() {
        assert_eq!(movement_vector(true, true, true, true), Vec2::ZERO);
    }
}
