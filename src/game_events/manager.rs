//! Timed world events and their manager.
//!
//! Events are globally visible modifiers activated probabilistically once
//! per minute based on the mode's chances. Same-kind events never stack;
//! different kinds run concurrently and their effects compound
//! multiplicatively.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::Rng;

use crate::modes::EventChances;

/// Seconds between activation checks.
pub const EVENT_CHECK_INTERVAL: f32 = 60.0;

/// How long a start notification stays on screen.
pub const NOTIFICATION_DURATION: f32 = 5.0;

/// The closed set of world event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    HealingShrine,
    LootBlessing,
    EnemyWeakness,
    EliteInvasion,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        EventKind::HealingShrine,
        EventKind::LootBlessing,
        EventKind::EnemyWeakness,
        EventKind::EliteInvasion,
    ];

    /// Static catalog entry for this kind.
    pub fn definition(&self) -> EventDefinition {
        match self {
            EventKind::HealingShrine => EventDefinition {
                name: "Healing Shrine",
                description: "A magical shrine appears, restoring health over time",
                duration: 30.0,
                effect: EventEffect::HealOverTime(2),
            },
            EventKind::LootBlessing => EventDefinition {
                name: "Loot Blessing",
                description: "Enemies drop extra loot for a short time",
                duration: 45.0,
                effect: EventEffect::LootMultiplier(2.0),
            },
            EventKind::EnemyWeakness => EventDefinition {
                name: "Enemy Weakness",
                description: "Enemies are weakened and take extra damage",
                duration: 60.0,
                effect: EventEffect::DamageMultiplier(1.5),
            },
            EventKind::EliteInvasion => EventDefinition {
                name: "Elite Invasion",
                description: "Powerful elite enemies spawn more frequently",
                duration: 90.0,
                effect: EventEffect::EliteSpawnRate(3.0),
            },
        }
    }

    /// The mode's per-minute chance for this kind, if configured at all.
    pub fn chance(&self, chances: &EventChances) -> Option<f32> {
        match self {
            EventKind::HealingShrine => Some(chances.healing_shrine),
            EventKind::LootBlessing => Some(chances.loot_blessing),
            EventKind::EnemyWeakness => Some(chances.enemy_weakness),
            EventKind::EliteInvasion => chances.elite_invasion,
        }
    }
}

/// What an active event does each frame it is alive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventEffect {
    /// Flat HP per second applied to the player.
    HealOverTime(i32),
    LootMultiplier(f32),
    /// Multiplier on damage dealt to enemies.
    DamageMultiplier(f32),
    EliteSpawnRate(f32),
}

/// Catalog entry describing an event kind.
#[derive(Debug, Clone, Copy)]
pub struct EventDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub duration: f32,
    pub effect: EventEffect,
}

/// One running world event.
#[derive(Debug, Clone)]
pub struct GameEvent {
    pub kind: EventKind,
    pub name: &'static str,
    pub duration: f32,
    pub effect: EventEffect,
    pub time_remaining: f32,
}

impl GameEvent {
    pub fn new(kind: EventKind) -> Self {
        let definition = kind.definition();
        Self {
            kind,
            name: definition.name,
            duration: definition.duration,
            effect: definition.effect,
            time_remaining: definition.duration,
        }
    }

    /// Age the event; returns false once it has expired.
    pub fn update(&mut self, dt: f32) -> bool {
        self.time_remaining -= dt;
        self.time_remaining > 0.0
    }

    /// HUD text: event name and MM:SS remaining.
    pub fn display_text(&self) -> String {
        let remaining = self.time_remaining.max(0.0);
        let minutes = (remaining / 60.0) as u32;
        let seconds = (remaining % 60.0) as u32;
        format!("{} - {:02}:{:02}", self.name, minutes, seconds)
    }
}

/// Folded effect values of all active events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventMultipliers {
    pub damage_to_enemies: f32,
    pub loot_drop_rate: f32,
    pub elite_spawn_rate: f32,
}

impl Default for EventMultipliers {
    fn default() -> Self {
        Self {
            damage_to_enemies: 1.0,
            loot_drop_rate: 1.0,
            elite_spawn_rate: 1.0,
        }
    }
}

/// Owns the active event list, the periodic activation check, and the
/// notification queue (whose lifetime is independent of the events).
#[derive(Resource, Debug, Default)]
pub struct GameEventManager {
    pub active: Vec<GameEvent>,
    check_timer: f32,
    /// (text, display time left) pairs for the HUD.
    pub notifications: Vec<(String, f32)>,
}

impl GameEventManager {
    /// Clear all state for a fresh run.
    pub fn reset(&mut self) {
        self.active.clear();
        self.check_timer = 0.0;
        self.notifications.clear();
    }

    /// Age events and notifications, and run the periodic activation
    /// check: one Bernoulli trial per configured kind every interval.
    pub fn update(&mut self, dt: f32, chances: &EventChances, rng: &mut StdRng) {
        self.active.retain_mut(|event| event.update(dt));
        self.notifications.retain_mut(|(_, time_left)| {
            *time_left -= dt;
            *time_left > 0.0
        });

        self.check_timer += dt;
        if self.check_timer >= EVENT_CHECK_INTERVAL {
            self.check_timer = 0.0;
            for kind in EventKind::ALL {
                if let Some(chance) = kind.chance(chances) {
                    if rng.gen::<f32>() < chance {
                        self.start(kind);
                    }
                }
            }
        }
    }

    /// Whether an event of this kind is currently running.
    pub fn is_active(&self, kind: EventKind) -> bool {
        self.active.iter().any(|event| event.kind == kind)
    }

    /// Start an event unless one of the same kind is already active.
    pub fn start(&mut self, kind: EventKind) {
        if self.is_active(kind) {
            return;
        }
        let event = GameEvent::new(kind);
        let text = format!("Event Started: {}", event.name);
        info!("{} - {}", text, kind.definition().description);
        self.notifications.push((text, NOTIFICATION_DURATION));
        self.active.push(event);
    }

    /// Fold all active events' effect values into named multipliers;
    /// concurrent events of different kinds compound multiplicatively.
    pub fn multipliers(&self) -> EventMultipliers {
        let mut multipliers = EventMultipliers::default();
        for event in &self.active {
            match event.effect {
                EventEffect::DamageMultiplier(value) => multipliers.damage_to_enemies *= value,
                EventEffect::LootMultiplier(value) => multipliers.loot_drop_rate *= value,
                EventEffect::EliteSpawnRate(value) => multipliers.elite_spawn_rate *= value,
                EventEffect::HealOverTime(_) => {}
            }
        }
        multipliers
    }

    /// HP per second to apply to the player while a shrine is up.
    pub fn healing_shrine(&self) -> Option<i32> {
        self.active.iter().find_map(|event| match event.effect {
            EventEffect::HealOverTime(rate) if event.kind == EventKind::HealingShrine => {
                Some(rate)
            }
            _ => None,
        })
    }

    /// Current notification texts for the HUD.
    pub fn notification_texts(&self) -> Vec<&str> {
        self.notifications
            .iter()
            .map(|(text, _)| text.as_str())
            .collect()
    }
}
