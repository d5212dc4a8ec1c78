//! Tests for the world event manager: activation, stacking, and folding.

use rand::rngs::StdRng;
use rand::SeedableRng;

use slime_arena::game_events::{
    EventEffect, EventKind, GameEvent, GameEventManager, NOTIFICATION_DURATION,
};
use slime_arena::modes::EventChances;

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn certain_chances() -> EventChances {
    EventChances {
        healing_shrine: 1.0,
        loot_blessing: 1.0,
        enemy_weakness: 1.0,
        elite_invasion: Some(1.0),
    }
}

fn impossible_chances() -> EventChances {
    EventChances {
        healing_shrine: 0.0,
        loot_blessing: 0.0,
        enemy_weakness: 0.0,
        elite_invasion: None,
    }
}

#[test]
fn no_activation_before_the_check_interval() {
    let mut manager = GameEventManager::default();
    manager.update(59.0, &certain_chances(), &mut rng());
    assert!(manager.active.is_empty());
}

#[test]
fn certain_chances_activate_every_kind_at_the_interval() {
    let mut manager = GameEventManager::default();
    manager.update(60.0, &certain_chances(), &mut rng());
    assert_eq!(manager.active.len(), 4);
    for kind in EventKind::ALL {
        assert!(manager.is_active(kind));
    }
}

#[test]
fn zero_chances_never_activate() {
    let mut manager = GameEventManager::default();
    for _ in 0..10 {
        manager.update(60.0, &impossible_chances(), &mut rng());
    }
    assert!(manager.active.is_empty());
}

#[test]
fn same_kind_never_stacks() {
    let mut manager = GameEventManager::default();
    manager.start(EventKind::HealingShrine);
    manager.start(EventKind::HealingShrine);
    assert_eq!(manager.active.len(), 1);
}

#[test]
fn different_kinds_run_concurrently() {
    let mut manager = GameEventManager::default();
    manager.start(EventKind::HealingShrine);
    manager.start(EventKind::EnemyWeakness);
    assert_eq!(manager.active.len(), 2);
}

#[test]
fn events_expire_after_their_duration() {
    let mut manager = GameEventManager::default();
    manager.start(EventKind::HealingShrine);
    manager.update(29.0, &impossible_chances(), &mut rng());
    assert!(manager.is_active(EventKind::HealingShrine));
    manager.update(1.5, &impossible_chances(), &mut rng());
    assert!(!manager.is_active(EventKind::HealingShrine));
}

#[test]
fn concurrent_damage_multipliers_compound() {
    let mut manager = GameEventManager::default();
    manager.start(EventKind::EnemyWeakness);
    // A second independent damage modifier of 2.0 alongside the 1.5.
    manager.active.push(GameEvent {
        kind: EventKind::EliteInvasion,
        name: "Test Modifier",
        duration: 30.0,
        effect: EventEffect::DamageMultiplier(2.0),
        time_remaining: 30.0,
    });
    let multipliers = manager.multipliers();
    assert!((multipliers.damage_to_enemies - 3.0).abs() < 1e-5);
}

#[test]
fn multipliers_default_to_one_with_no_events() {
    let manager = GameEventManager::default();
    let multipliers = manager.multipliers();
    assert_eq!(multipliers.damage_to_enemies, 1.0);
    assert_eq!(multipliers.loot_drop_rate, 1.0);
    assert_eq!(multipliers.elite_spawn_rate, 1.0);
}

#[test]
fn elite_invasion_raises_the_elite_spawn_rate() {
    let mut manager = GameEventManager::default();
    manager.start(EventKind::EliteInvasion);
    assert!((manager.multipliers().elite_spawn_rate - 3.0).abs() < 1e-5);
}

#[test]
fn healing_shrine_reports_its_rate_only_while_active() {
    let mut manager = GameEventManager::default();
    assert_eq!(manager.healing_shrine(), None);
    manager.start(EventKind::HealingShrine);
    assert_eq!(manager.healing_shrine(), Some(2));
}

#[test]
fn notifications_outlive_their_source_event() {
    let mut manager = GameEventManager::default();
    manager.start(EventKind::HealingShrine);
    assert_eq!(
        manager.notification_texts(),
        vec!["Event Started: Healing Shrine"]
    );
    // The notification fades on its own clock.
    manager.update(NOTIFICATION_DURATION, &impossible_chances(), &mut rng());
    assert!(manager.notification_texts().is_empty());
    assert!(manager.is_active(EventKind::HealingShrine));
}

#[test]
fn display_text_formats_remaining_time() {
    let mut event = GameEvent::new(EventKind::EliteInvasion);
    event.time_remaining = 75.0;
    assert_eq!(event.display_text(), "Elite Invasion - 01:15");
}

#[test]
fn reset_clears_everything() {
    let mut manager = GameEventManager::default();
    manager.start(EventKind::LootBlessing);
    manager.reset();
    assert!(manager.active.is_empty());
    assert!(manager.notification_texts().is_empty());
}
