//! Tests for player vitals: barrier absorption, decay, and the hurt lock.

use slime_arena::player::{DamageLog, HurtKind, PlayerAnimState, PlayerAnimation, Vitals};

#[test]
fn barrier_absorbs_damage_before_health() {
    let mut vitals = Vitals::new(100, 50);
    let kind = vitals.take_damage(20, false);
    assert_eq!(vitals.barrier, 30);
    assert_eq!(vitals.health, 100);
    assert_eq!(kind, Some(HurtKind::Barrier));
}

#[test]
fn overflow_damage_spills_into_health_but_barrier_hurt_wins() {
    let mut vitals = Vitals::new(100, 50);
    vitals.barrier = 30;
    let kind = vitals.take_damage(50, false);
    assert_eq!(vitals.barrier, 0);
    assert_eq!(vitals.health, 80);
    // Absorption occurred, so the barrier reaction takes precedence.
    assert_eq!(kind, Some(HurtKind::Barrier));
}

#[test]
fn barrier_bypass_hits_health_directly() {
    let mut vitals = Vitals::new(100, 50);
    let kind = vitals.take_damage(10, true);
    assert_eq!(vitals.barrier, 50);
    assert_eq!(vitals.health, 90);
    assert_eq!(kind, Some(HurtKind::Health));
}

#[test]
fn health_never_goes_negative() {
    let mut vitals = Vitals::new(100, 0);
    vitals.health = 10;
    vitals.take_damage(50, false);
    assert_eq!(vitals.health, 0);
}

#[test]
fn barrier_never_goes_negative() {
    let mut vitals = Vitals::new(100, 50);
    vitals.take_damage(200, false);
    assert_eq!(vitals.barrier, 0);
    assert!(vitals.health >= 0);
}

#[test]
fn one_second_of_decay_drops_ten_percent() {
    let mut vitals = Vitals::new(100, 50);
    vitals.decay_barrier(1.0);
    assert_eq!(vitals.barrier, 45);
}

#[test]
fn fractional_decay_accumulates_instead_of_rounding_every_frame() {
    let mut vitals = Vitals::new(100, 50);
    // 10 frames at 16 ms each: total decay is 0.8 units, below the
    // whole-unit threshold, so the integer pool must not move.
    for _ in 0..10 {
        vitals.decay_barrier(0.016);
    }
    assert_eq!(vitals.barrier, 50);
    // A few more frames push the accumulator over one unit.
    for _ in 0..10 {
        vitals.decay_barrier(0.016);
    }
    assert_eq!(vitals.barrier, 49);
}

#[test]
fn decay_stops_at_zero_barrier() {
    let mut vitals = Vitals::new(100, 50);
    vitals.barrier = 0;
    vitals.decay_barrier(10.0);
    assert_eq!(vitals.barrier, 0);
}

#[test]
fn heal_clamps_to_max_health() {
    let mut vitals = Vitals::new(100, 0);
    vitals.health = 95;
    vitals.heal(20);
    assert_eq!(vitals.health, 100);
}

#[test]
fn hurt_lock_suppresses_second_reaction_but_not_damage() {
    let mut vitals = Vitals::new(100, 50);
    let mut animation = PlayerAnimation::default();

    let kind = vitals.take_damage(10, false).unwrap();
    animation.trigger_hurt(kind);
    assert_eq!(animation.state, PlayerAnimState::HurtBarrier);
    assert!(animation.lock);

    // Second hit while locked: damage applies, animation unchanged.
    let kind = vitals.take_damage(10, true).unwrap();
    animation.trigger_hurt(kind);
    assert_eq!(animation.state, PlayerAnimState::HurtBarrier);
    assert_eq!(vitals.health, 90);
    assert_eq!(vitals.barrier, 40);
}

#[test]
fn movement_state_changes_are_blocked_while_locked() {
    let mut animation = PlayerAnimation::default();
    animation.trigger_hurt(HurtKind::Health);
    animation.set_movement_state(PlayerAnimState::Walk);
    assert_eq!(animation.state, PlayerAnimState::HurtHp);

    animation.lock = false;
    animation.set_movement_state(PlayerAnimState::Walk);
    assert_eq!(animation.state, PlayerAnimState::Walk);
}

#[test]
fn damage_log_keeps_order_and_serves_recent_entries() {
    let mut log = DamageLog::default();
    log.record(5, "plant".to_string(), 1.0);
    log.record(10, "slash trap".to_string(), 2.5);
    log.record(3, "plant".to_string(), 4.0);

    let recent = log.recent(2);
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].amount, 10);
    assert_eq!(recent[1].amount, 3);
    assert_eq!(recent[1].at, 4.0);

    // Asking for more than exists returns everything.
    assert_eq!(log.recent(10).len(), 3);
}

#[test]
fn zero_damage_requests_no_reaction() {
    let mut vitals = Vitals::new(100, 50);
    assert_eq!(vitals.take_damage(0, false), None);
    assert_eq!(vitals.barrier, 50);
    assert_eq!(vitals.health, 100);
}
