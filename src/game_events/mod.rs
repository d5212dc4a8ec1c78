//! Game events module - timed, mode-dependent world modifiers.

mod manager;
mod plugin;

pub use manager::{
    EventDefinition, EventEffect, EventKind, EventMultipliers, GameEvent, GameEventManager,
    EVENT_CHECK_INTERVAL, NOTIFICATION_DURATION,
};
pub use plugin::{GameEventsPlugin, ShrineHealing};
