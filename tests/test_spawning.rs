//! Tests for the spawn gate, the weighted roulette, and edge placement.

use rand::rngs::StdRng;
use rand::SeedableRng;

use slime_arena::core::ArenaBounds;
use slime_arena::enemies::{
    choose_archetype, plant_archetype, random_edge_position, EnemyRegistry, EnemySpawner,
    SpawnWeightRule,
};

fn two_archetype_registry() -> EnemyRegistry {
    let mut registry = EnemyRegistry::default();
    registry.archetypes.clear();

    let mut common = plant_archetype();
    common.name = "Common".into();
    common.spawn_weight = 1.0;
    registry.archetypes.insert("a_common".into(), common);

    let mut frequent = plant_archetype();
    frequent.name = "Frequent".into();
    frequent.spawn_weight = 3.0;
    registry.archetypes.insert("b_frequent".into(), frequent);

    registry
}

#[test]
fn gate_opens_only_after_the_interval() {
    let mut spawner = EnemySpawner::default();
    assert!(spawner.can_spawn(0.0, 2.0));
    spawner.last_spawn = 0.0;
    assert!(!spawner.can_spawn(1.9, 2.0));
    assert!(spawner.can_spawn(2.0, 2.0));
}

#[test]
fn gate_refuses_a_second_spawn_within_the_interval() {
    let mut spawner = EnemySpawner::default();
    assert!(spawner.can_spawn(10.0, 2.0));
    spawner.last_spawn = 10.0;
    assert!(!spawner.can_spawn(10.0, 2.0));
}

#[test]
fn weights_drive_the_selection_distribution() {
    let registry = two_archetype_registry();
    let spawner = EnemySpawner::default();
    let mut rng = StdRng::seed_from_u64(1234);

    let draws = 10_000;
    let mut frequent = 0;
    for _ in 0..draws {
        let (id, _) = choose_archetype(&registry, &spawner, 0.0, 1.0, &mut rng)
            .expect("registry is not empty");
        if id == "b_frequent" {
            frequent += 1;
        }
    }

    // 3:1 weights give a 75% expectation; allow a few percent of noise.
    let share = frequent as f32 / draws as f32;
    assert!(
        (share - 0.75).abs() < 0.03,
        "frequent share was {share}, expected about 0.75"
    );
}

#[test]
fn empty_registry_selects_nothing() {
    let mut registry = EnemyRegistry::default();
    registry.archetypes.clear();
    let spawner = EnemySpawner::default();
    let mut rng = StdRng::seed_from_u64(1);
    assert!(choose_archetype(&registry, &spawner, 0.0, 1.0, &mut rng).is_none());
}

#[test]
fn zero_total_weight_falls_back_to_the_first_archetype() {
    let mut registry = two_archetype_registry();
    for archetype in registry.archetypes.values_mut() {
        archetype.spawn_weight = 0.0;
    }
    let spawner = EnemySpawner::default();
    let mut rng = StdRng::seed_from_u64(1);
    let (id, _) =
        choose_archetype(&registry, &spawner, 0.0, 1.0, &mut rng).expect("fallback entry");
    assert_eq!(id, "a_common");
}

#[test]
fn time_rules_apply_only_after_their_threshold() {
    let mut spawner = EnemySpawner::default();
    spawner.weight_rules.push(SpawnWeightRule {
        archetype: "a_common".into(),
        after_secs: 10.0,
        multiplier: 5.0,
    });

    assert_eq!(spawner.effective_weight("a_common", 1.0, 5.0), 1.0);
    assert_eq!(spawner.effective_weight("a_common", 1.0, 11.0), 5.0);
    // Rules for other archetypes never apply.
    assert_eq!(spawner.effective_weight("b_frequent", 1.0, 11.0), 1.0);
}

#[test]
fn elite_multiplier_scales_only_elite_archetypes() {
    let mut registry = two_archetype_registry();
    registry
        .archetypes
        .get_mut("b_frequent")
        .expect("archetype exists")
        .elite = true;
    let spawner = EnemySpawner::default();
    let mut rng = StdRng::seed_from_u64(99);

    // Squashing elite weight to zero leaves only the non-elite choice.
    for _ in 0..100 {
        let (id, _) = choose_archetype(&registry, &spawner, 0.0, 0.0, &mut rng)
            .expect("registry is not empty");
        assert_eq!(id, "a_common");
    }
}

#[test]
fn edge_positions_always_lie_on_the_boundary() {
    let bounds = ArenaBounds::default();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1000 {
        let p = random_edge_position(&bounds, &mut rng);
        let on_edge =
            p.x == 0.0 || p.x == bounds.width || p.y == 0.0 || p.y == bounds.height;
        assert!(on_edge, "spawn position {p:?} is inside the arena");
        assert!(p.x >= 0.0 && p.x <= bounds.width);
        assert!(p.y >= 0.0 && p.y <= bounds.height);
    }
}
