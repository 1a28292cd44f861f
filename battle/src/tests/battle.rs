use crate::battle::*;
use crate::tests::*;
use crate::unit::UnitParams;

fn no_crits() -> BattleOptions {
    BattleOptions {
        crit_chance_bp: 0,
        ..Default::default()
    }
}

#[test]
fn test_empty_allies_lose_immediately() {
    let factory = test_factory();
    let enemies = vec![factory.create_base_unit("soldier", 1).unwrap()];

    let result = simulate_battle(&[], &enemies, &BattleOptions::default(), &mut seeded_rng(1));

    assert_eq!(result.winner, Winner::Enemies);
    assert!(result.ticks <= 1);
    assert!(result.log.is_empty());
    assert_eq!(result.enemies_alive.len(), 1);
}

#[test]
fn test_both_empty_is_draw() {
    let result = simulate_battle(&[], &[], &BattleOptions::default(), &mut seeded_rng(1));
    assert_eq!(result.winner, Winner::Draw);
    assert_eq!(result.ticks, 0);
}

#[test]
fn test_tank_beats_soldier_step_by_step() {
    let factory = test_factory();
    let allies = vec![factory.create_base_unit("tank", 1).unwrap()];
    let enemies = vec![factory.create_base_unit("soldier", 1).unwrap()];

    let result = simulate_battle(&allies, &enemies, &no_crits(), &mut seeded_rng(5));

    assert_eq!(result.winner, Winner::Allies);
    assert_eq!(result.ticks, 2);
    assert_eq!(result.log.len(), 4);

    // The faster soldier swings first each tick
    assert_eq!(result.log[0].attacker_name, "Soldier");
    assert_eq!(result.log[0].target_remaining, 15);
    assert_eq!(result.log[1].attacker_name, "Tank");
    assert_eq!(result.log[1].target_remaining, 3);

    let finisher = &result.log[3];
    assert_eq!(finisher.tick, 2);
    assert_eq!(finisher.attacker_side, Side::Allies);
    assert_eq!(finisher.damage, 7, "overkill is reported in full");
    assert_eq!(finisher.target_remaining, 0);
    assert!(finisher.target_dead);

    assert_eq!(result.allies_alive.len(), 1);
    assert_eq!(result.allies_alive[0].health, 12);
    assert!(result.enemies_alive.is_empty());
    assert_eq!(result.enemies.len(), 1, "dead units stay in the final roster");
    assert!(result.enemies[0].is_dead);
}

#[test]
fn test_inputs_are_not_mutated() {
    let factory = test_factory();
    let allies = vec![factory.create_base_unit("sniper", 1).unwrap()];
    let enemies = vec![factory.create_base_unit("tank", 2).unwrap()];

    let result = simulate_battle(&allies, &enemies, &BattleOptions::default(), &mut seeded_rng(9));

    assert_eq!(allies[0].health(), allies[0].max_health());
    assert_eq!(enemies[0].health(), enemies[0].max_health());
    assert_ne!(result.allies[0].id, Some(allies[0].id()));
    assert_ne!(result.enemies[0].id, Some(enemies[0].id()));
}

#[test]
fn test_targets_lowest_health_enemy() {
    let factory = test_factory();
    let allies = vec![factory.create_base_unit("sniper", 1).unwrap()];
    let enemies = vec![
        factory.create_base_unit("soldier", 1).unwrap(),
        factory.create_base_unit("mage", 1).unwrap(),
    ];

    let result = simulate_battle(&allies, &enemies, &no_crits(), &mut seeded_rng(3));

    let first = &result.log[0];
    assert_eq!(first.attacker_name, "Sniper");
    assert_eq!(first.target_name, "Mage");
}

#[test]
fn test_lowest_health_tie_picks_first() {
    let factory = test_factory();
    let allies = vec![factory.create_base_unit("sniper", 1).unwrap()];
    let enemies = vec![
        factory.create_base_unit("soldier", 1).unwrap(),
        factory.create_base_unit("soldier", 1).unwrap(),
    ];

    let result = simulate_battle(&allies, &enemies, &no_crits(), &mut seeded_rng(3));

    assert_eq!(Some(result.log[0].target_id), result.enemies[0].id);
}

#[test]
fn test_dead_units_do_not_act() {
    let allies = vec![create_unit("Quick", 5, 5, 120)];
    let enemies = vec![create_unit("Glass", 100, 5, 100)];

    let result = simulate_battle(&allies, &enemies, &no_crits(), &mut seeded_rng(11));

    assert_eq!(result.winner, Winner::Allies);
    assert_eq!(result.ticks, 1);
    assert_eq!(result.log.len(), 1, "the killed enemy never swings");
}

#[test]
fn test_equal_speed_higher_attack_acts_first() {
    for strong_is_ally in [false, true] {
        let weak = create_unit("Weak", 1, 10, 100);
        let strong = create_unit("Strong", 9, 10, 100);
        let (allies, enemies) = if strong_is_ally {
            (vec![strong], vec![weak])
        } else {
            (vec![weak], vec![strong])
        };

        let result = simulate_battle(&allies, &enemies, &no_crits(), &mut seeded_rng(6));

        assert_eq!(result.log[0].attacker_name, "Strong");
        assert_eq!(result.log[1].attacker_name, "Weak");
    }
}

#[test]
fn test_guaranteed_crit_rounds_half_up() {
    let factory = test_factory();
    let allies = vec![factory.create_base_unit("soldier", 1).unwrap()];
    let enemies = vec![factory.create_base_unit("tank", 1).unwrap()];
    let options = BattleOptions {
        crit_chance_bp: 10_000,
        ..Default::default()
    };

    let result = simulate_battle(&allies, &enemies, &options, &mut seeded_rng(2));

    let soldier_hit = result
        .log
        .iter()
        .find(|a| a.attacker_name == "Soldier")
        .expect("soldier attacked");
    assert!(soldier_hit.is_crit);
    assert_eq!(soldier_hit.damage, 5, "3 * 1.5 = 4.5 rounds up");
    assert_eq!(result.options_used, options);
}

#[test]
fn test_max_ticks_ends_in_draw() {
    let allies = vec![Unit::new(UnitParams {
        name: "Pacifist".into(),
        attack: 0,
        health: 10,
        ..Default::default()
    })];
    let enemies = vec![Unit::new(UnitParams {
        name: "Pacifist".into(),
        attack: 0,
        health: 10,
        ..Default::default()
    })];
    let options = BattleOptions {
        max_ticks: 5,
        ..no_crits()
    };

    let result = simulate_battle(&allies, &enemies, &options, &mut seeded_rng(4));

    assert_eq!(result.winner, Winner::Draw);
    assert_eq!(result.ticks, 5);
    assert_eq!(result.allies_alive.len(), 1);
    assert_eq!(result.enemies_alive.len(), 1);
    assert_eq!(result.log.len(), 10);
}

#[test]
fn test_zeroed_options_fall_back_to_defaults() {
    let factory = test_factory();
    let allies = vec![factory.create_base_unit("soldier", 1).unwrap()];
    let enemies = vec![factory.create_base_unit("tank", 1).unwrap()];
    let options = BattleOptions {
        max_ticks: 0,
        crit_chance_bp: 10_000,
        crit_multiplier_pct: 0,
    };

    let result = simulate_battle(&allies, &enemies, &options, &mut seeded_rng(2));

    assert!(result.ticks > 0, "zero max_ticks is not an instant draw");
    assert_eq!(result.winner, Winner::Enemies);
    let soldier_hit = result
        .log
        .iter()
        .find(|a| a.attacker_name == "Soldier")
        .expect("soldier attacked");
    assert_eq!(soldier_hit.damage, 5, "crit uses the default x1.5");
    assert_eq!(result.options_used.max_ticks, DEFAULT_MAX_TICKS);
    assert_eq!(result.options_used.crit_multiplier_pct, DEFAULT_CRIT_MULTIPLIER_PCT);
    assert_eq!(result.options_used.crit_chance_bp, 10_000);
}

#[test]
fn test_same_seed_replays_identically() {
    let factory = test_factory();
    let allies = vec![
        factory.create_base_unit("soldier", 1).unwrap(),
        factory.create_base_unit("soldier", 1).unwrap(),
        factory.create_base_unit("mage", 2).unwrap(),
    ];
    let enemies = vec![
        factory.create_base_unit("soldier", 1).unwrap(),
        factory.create_base_unit("tank", 1).unwrap(),
        factory.create_base_unit("sniper", 1).unwrap(),
    ];

    let a = simulate_battle(&allies, &enemies, &BattleOptions::default(), &mut seeded_rng(77));
    let b = simulate_battle(&allies, &enemies, &BattleOptions::default(), &mut seeded_rng(77));

    let shape = |r: &BattleResult| -> Vec<(u32, String, String, i32, bool)> {
        r.log
            .iter()
            .map(|a| (a.tick, a.attacker_name.clone(), a.target_name.clone(), a.damage, a.is_crit))
            .collect()
    };
    assert_eq!(a.winner, b.winner);
    assert_eq!(a.ticks, b.ticks);
    assert_eq!(shape(&a), shape(&b));
}

#[test]
fn test_result_serializes_lowercase_winner() {
    let result = simulate_battle(&[], &[], &BattleOptions::default(), &mut seeded_rng(1));
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["winner"], "draw");
    assert_eq!(value["optionsUsed"]["maxTicks"], 1000);
    assert!(value["alliesAlive"].is_array());
}
