//! Random item generation.

use rand::Rng;

use crate::constants::{ITEM_BONUS_MAX, ITEM_BONUS_MIN, ITEM_NAMES};
use crate::items::types::Item;

/// Generates an item with a name from the fixed vocabulary and both bonuses
/// rolled uniformly in [1, 10]. Independent of any character state.
pub fn generate_item(rng: &mut impl Rng) -> Item {
    let name = ITEM_NAMES[rng.gen_range(0..ITEM_NAMES.len())];
    let attack_bonus = rng.gen_range(ITEM_BONUS_MIN..=ITEM_BONUS_MAX);
    let defense_bonus = rng.gen_range(ITEM_BONUS_MIN..=ITEM_BONUS_MAX);
    Item::new(name, attack_bonus, defense_bonus)
}
