//! Balance constants for characters, combat, and item generation.

// === Archetype base stats ===

pub const WARRIOR_BASE_HP: u32 = 100;
pub const WARRIOR_BASE_ATTACK: u32 = 20;
pub const WARRIOR_BASE_DEFENSE: u32 = 10;

pub const MAGE_BASE_HP: u32 = 80;
pub const MAGE_BASE_ATTACK: u32 = 25;
pub const MAGE_BASE_DEFENSE: u32 = 5;

// === Damage rolls ===

/// Warrior rolls attack + [0, 4].
pub const WARRIOR_DAMAGE_SPREAD: u32 = 5;
/// Mage rolls attack + [0, 9], a wider swing.
pub const MAGE_DAMAGE_SPREAD: u32 = 10;

// === Progression ===

/// Experience awarded to the survivor of a battle.
pub const VICTORY_EXPERIENCE: u32 = 50;

/// Level-up threshold is `level * EXPERIENCE_PER_LEVEL`.
pub const EXPERIENCE_PER_LEVEL: u32 = 100;

pub const LEVEL_UP_HP: u32 = 10;
pub const LEVEL_UP_ATTACK: u32 = 5;
pub const LEVEL_UP_DEFENSE: u32 = 5;

/// Extra attack a Warrior gains on top of the base level-up.
pub const WARRIOR_LEVEL_ATTACK_BONUS: u32 = 5;
/// Extra health a Mage gains on top of the base level-up.
pub const MAGE_LEVEL_HP_BONUS: u32 = 5;

// === Combat loop ===

/// Round cap guarding the zero-damage stalemate where neither side can
/// pierce the other's defense.
pub const MAX_BATTLE_ROUNDS: u32 = 10_000;

// === Item generation ===

pub const ITEM_NAMES: [&str; 4] = ["Sword", "Shield", "Amulet", "Ring"];

pub const ITEM_BONUS_MIN: u32 = 1;
pub const ITEM_BONUS_MAX: u32 = 10;
