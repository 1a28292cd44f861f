use crate::tests::*;
use mb_battle::XorShiftRng;

use crate::shop::{generate_shop, shop_price};

#[test]
fn test_shop_price_range() {
    let mut rng = XorShiftRng::seed_from_u64(7);
    for _ in 0..200 {
        assert!((8..=10).contains(&shop_price(1, &mut rng)));
        assert!((11..=13).contains(&shop_price(2, &mut rng)));
    }
}

#[test]
fn test_generate_shop_rolls_tier_one_catalog_units() {
    let factory = test_factory();
    let shop = generate_shop(&factory, 5, &mut XorShiftRng::seed_from_u64(3));

    assert_eq!(shop.len(), 5);
    for entry in &shop {
        assert_eq!(entry.unit.tier, 1);
        assert!(factory.catalog().contains(&entry.unit.merge_tag));
        assert!(entry.unit.is_alive());
    }
}

#[test]
fn test_generate_shop_units_are_distinct() {
    let shop = generate_shop(&soldier_only_factory(), 5, &mut XorShiftRng::seed_from_u64(3));
    let mut ids: Vec<_> = shop.iter().map(|e| e.unit.id()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 5);
}

#[test]
fn test_generate_shop_is_seeded() {
    let factory = test_factory();
    let roll = |seed| {
        generate_shop(&factory, 5, &mut XorShiftRng::seed_from_u64(seed))
            .iter()
            .map(|e| (e.unit.name.clone(), e.price))
            .collect::<Vec<_>>()
    };
    assert_eq!(roll(11), roll(11));
}

#[test]
fn test_generate_shop_degenerate_inputs() {
    let mut rng = XorShiftRng::seed_from_u64(1);
    assert!(generate_shop(&UnitFactory::default(), 5, &mut rng).is_empty());
    assert!(generate_shop(&test_factory(), 0, &mut rng).is_empty());
}
