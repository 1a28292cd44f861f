//! Shop generation.

use alloc::vec::Vec;

use mb_battle::{BattleRng, UnitDefinition, UnitFactory};

use crate::config::{SHOP_BASE_PRICE, SHOP_PRICE_JITTER, SHOP_TIER, SHOP_TIER_PRICE};
use crate::state::ShopEntry;

/// `SHOP_BASE_PRICE + tier * SHOP_TIER_PRICE + roll(0..SHOP_PRICE_JITTER)`
pub fn shop_price<R: BattleRng>(tier: u32, rng: &mut R) -> u32 {
    SHOP_BASE_PRICE
        .saturating_add(tier.saturating_mul(SHOP_TIER_PRICE))
        .saturating_add(rng.gen_range(SHOP_PRICE_JITTER as usize) as u32)
}

/// Roll a full shop of `size` entries, each a tier-1 unit of a uniformly
/// random catalog type. An empty catalog yields an empty shop.
pub fn generate_shop<R: BattleRng>(factory: &UnitFactory, size: usize, rng: &mut R) -> Vec<ShopEntry> {
    let definitions: Vec<&UnitDefinition> = factory.catalog().iter().map(|(_, def)| def).collect();
    if definitions.is_empty() {
        return Vec::new();
    }

    (0..size)
        .map(|_| {
            let def = definitions[rng.gen_range(definitions.len())];
            let unit = UnitFactory::create_from_definition(def, SHOP_TIER);
            let price = shop_price(unit.tier, rng);
            ShopEntry { unit, price }
        })
        .collect()
}
