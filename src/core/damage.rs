//! Damage event resolution.
//!
//! Skills and enemy attacks only emit DamageEvents; this single system
//! applies them, so the barrier rule, hurt-animation trigger, damage log,
//! and hurt tint all live in one place.

use bevy::prelude::*;

use super::clock::GameClock;
use super::events::DamageEvent;
use crate::enemies::{Enemy, EnemyVitals, HurtOverlay};
use crate::player::{DamageLog, Player, PlayerAnimation, Vitals};

/// Apply all of this frame's damage events to player or enemy vitals.
///
/// Player hits go through the barrier-first rule and request a hurt
/// reaction (suppressed, but still logged and applied, while the hurt lock
/// holds). Enemy hits reduce health and flash the hurt tint; the AI state
/// machine notices depleted health on its next pass.
pub fn apply_damage(
    clock: Res<GameClock>,
    mut damage_events: EventReader<DamageEvent>,
    mut player_query: Query<
        (Entity, &mut Vitals, &mut PlayerAnimation, &mut DamageLog),
        With<Player>,
    >,
    mut enemy_query: Query<(&mut EnemyVitals, &mut HurtOverlay), (With<Enemy>, Without<Player>)>,
) {
    for event in damage_events.read() {
        if let Ok((player_entity, mut vitals, mut animation, mut log)) =
            player_query.get_single_mut()
        {
            if event.target == player_entity {
                if let Some(kind) = vitals.take_damage(event.amount, event.barrier_bypass) {
                    animation.trigger_hurt(kind);
                }
                log.record(event.amount, event.source.clone(), clock.now());
                continue;
            }
        }

        if let Ok((mut vitals, mut overlay)) = enemy_query.get_mut(event.target) {
            vitals.current -= event.amount;
            overlay.flash();
        }
    }
}
