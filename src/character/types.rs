use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::items::Item;

/// Error returned when parsing an archetype name that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported character type: {0}")]
pub struct UnsupportedCharacterType(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Archetype {
    Warrior,
    Mage,
}

impl Archetype {
    /// Returns the display name for this archetype.
    pub fn name(&self) -> &'static str {
        match self {
            Archetype::Warrior => "Warrior",
            Archetype::Mage => "Mage",
        }
    }

    /// Base stats at creation. Returns (hp, attack, defense).
    pub fn base_stats(&self) -> (u32, u32, u32) {
        match self {
            Archetype::Warrior => (WARRIOR_BASE_HP, WARRIOR_BASE_ATTACK, WARRIOR_BASE_DEFENSE),
            Archetype::Mage => (MAGE_BASE_HP, MAGE_BASE_ATTACK, MAGE_BASE_DEFENSE),
        }
    }

    /// Exclusive upper bound of the random damage roll added to attack.
    pub fn damage_spread(&self) -> u32 {
        match self {
            Archetype::Warrior => WARRIOR_DAMAGE_SPREAD,
            Archetype::Mage => MAGE_DAMAGE_SPREAD,
        }
    }
}

impl FromStr for Archetype {
    type Err = UnsupportedCharacterType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "warrior" => Ok(Archetype::Warrior),
            "mage" => Ok(Archetype::Mage),
            _ => Err(UnsupportedCharacterType(s.to_string())),
        }
    }
}

/// A battle participant. Stats are mutated in place through combat;
/// health is floored at zero and a character at zero health is dead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub archetype: Archetype,
    pub health: u32,
    pub attack: u32,
    pub defense: u32,
    pub level: u32,
    pub experience: u32,
    pub inventory: Vec<Item>,
}

impl Character {
    pub fn new(archetype: Archetype, name: impl Into<String>) -> Self {
        let (health, attack, defense) = archetype.base_stats();
        Self {
            name: name.into(),
            archetype,
            health,
            attack,
            defense,
            level: 1,
            experience: 0,
            inventory: Vec::new(),
        }
    }

    /// Creates a character from an archetype name, e.g. "warrior" or "Mage".
    pub fn from_kind(
        kind: &str,
        name: impl Into<String>,
    ) -> Result<Self, UnsupportedCharacterType> {
        Ok(Self::new(kind.parse()?, name))
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Equips an item permanently. The inventory is append-only and the
    /// item's bonuses are folded into attack and defense immediately.
    pub fn add_item(&mut self, item: Item) {
        self.attack += item.attack_bonus;
        self.defense += item.defense_bonus;
        self.inventory.push(item);
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    /// Rolls this character's damage output for one attack: attack plus a
    /// uniform archetype-specific bonus. The roll is independent per call.
    pub fn compute_damage(&self, rng: &mut impl Rng) -> u32 {
        self.attack + rng.gen_range(0..self.archetype.damage_spread())
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [HP: {}, ATK: {}, DEF: {}, LVL: {}]",
            self.name, self.health, self.attack, self.defense, self.level
        )
    }
}
