//! Global events used for cross-system communication.
//!
//! Events allow decoupled systems to communicate. Skills and enemy attacks
//! send DamageEvents, and a single damage system applies them to player or
//! enemy vitals. This keeps systems independent and testable.

use bevy::prelude::*;

/// Sent when an entity takes damage.
///
/// The damage system listens for these events and applies the actual
/// health reduction. For the player, the barrier pool absorbs the hit
/// first unless `barrier_bypass` is set.
#[derive(Event)]
pub struct DamageEvent {
    /// Entity receiving damage
    pub target: Entity,
    /// Display name of whatever caused the damage (for the damage log)
    pub source: String,
    /// Damage amount in whole hit points
    pub amount: i32,
    /// Skip the barrier pool and hit health directly
    pub barrier_bypass: bool,
}

/// Sent when an enemy's death animation has fully completed and the
/// entity is about to be removed from the live list.
///
/// Systems can listen for this to award XP, drop loot, etc.
#[derive(Event)]
pub struct EnemyDefeatedEvent {
    /// The defeated enemy entity
    pub entity: Entity,
    /// Archetype name, e.g. "plant"
    pub archetype: String,
}
