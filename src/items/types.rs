use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A piece of equipment. Immutable once created; its bonuses are folded
/// into a character's stats when equipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub attack_bonus: u32,
    pub defense_bonus: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, attack_bonus: u32, defense_bonus: u32) -> Self {
        Self {
            name: name.into(),
            attack_bonus,
            defense_bonus,
        }
    }

    /// The ordering key: attack and defense bonuses combined.
    pub fn combined_bonus(&self) -> u32 {
        self.attack_bonus + self.defense_bonus
    }
}

// Ordering and equality are on the combined bonus only. Two items with
// different names but the same total compare equal; equal-key items are
// interchangeable.
impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.combined_bonus() == other.combined_bonus()
    }
}

impl Eq for Item {}

impl PartialOrd for Item {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Item {
    fn cmp(&self, other: &Self) -> Ordering {
        self.combined_bonus().cmp(&other.combined_bonus())
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [ATK: {}, DEF: {}]",
            self.name, self.attack_bonus, self.defense_bonus
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_bonus() {
        let item = Item::new("Sword", 7, 5);
        assert_eq!(item.combined_bonus(), 12);
    }

    #[test]
    fn test_ordering_by_combined_bonus() {
        let weak = Item::new("Ring", 1, 2);
        let strong = Item::new("Sword", 9, 8);
        assert!(weak < strong);
        assert!(strong > weak);
    }

    #[test]
    fn test_equal_totals_compare_equal_across_names() {
        let shield = Item::new("Shield", 2, 8);
        let amulet = Item::new("Amulet", 6, 4);
        assert_eq!(shield, amulet);
        assert_eq!(shield.cmp(&amulet), Ordering::Equal);
    }

    #[test]
    fn test_display_format() {
        let item = Item::new("Amulet", 3, 4);
        assert_eq!(item.to_string(), "Amulet [ATK: 3, DEF: 4]");
    }
}
