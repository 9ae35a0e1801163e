//! Experience accumulation and level-up rules.

use crate::character::types::{Archetype, Character};
use crate::constants::*;

impl Character {
    /// Experience required to reach the next level from the current one.
    pub fn experience_threshold(&self) -> u32 {
        self.level * EXPERIENCE_PER_LEVEL
    }

    /// Adds experience and resolves any level-ups it triggers. One large
    /// award can cross several thresholds, so this loops: 350 xp at level 1
    /// spends 100 then 200 and leaves 50 at level 3.
    pub fn gain_experience(&mut self, amount: u32) {
        self.experience += amount;
        while self.experience >= self.experience_threshold() {
            self.experience -= self.experience_threshold();
            self.level_up();
        }
    }

    /// Applies one level-up: base growth for every archetype, then the
    /// archetype's specialty on top (Warrior hits harder, Mage gets bulkier).
    pub fn level_up(&mut self) {
        self.level += 1;
        self.health += LEVEL_UP_HP;
        self.attack += LEVEL_UP_ATTACK;
        self.defense += LEVEL_UP_DEFENSE;

        match self.archetype {
            Archetype::Warrior => self.attack += WARRIOR_LEVEL_ATTACK_BONUS,
            Archetype::Mage => self.health += MAGE_LEVEL_HP_BONUS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gain_below_threshold_does_not_level() {
        let mut warrior = Character::new(Archetype::Warrior, "Hero");
        warrior.gain_experience(50);
        assert_eq!(warrior.level, 1);
        assert_eq!(warrior.experience, 50);
    }

    #[test]
    fn test_single_level_up_carries_remainder() {
        // Scenario B: 250 xp at level 1 -> level 2 with 150 left
        let mut warrior = Character::new(Archetype::Warrior, "Hero");
        warrior.gain_experience(250);
        assert_eq!(warrior.level, 2);
        assert_eq!(warrior.experience, 150);
    }

    #[test]
    fn test_large_award_levels_multiple_times() {
        // 350 xp: 350-100 -> level 2, 250-200 -> level 3, 50 < 300 stop
        let mut warrior = Character::new(Archetype::Warrior, "Hero");
        warrior.gain_experience(350);
        assert_eq!(warrior.level, 3);
        assert_eq!(warrior.experience, 50);
    }

    #[test]
    fn test_experience_invariant_after_gain() {
        let mut mage = Character::new(Archetype::Mage, "Enemy");
        for amount in [0, 99, 100, 101, 250, 1000, 5000] {
            let level_before = mage.level;
            mage.gain_experience(amount);
            assert!(mage.experience < mage.experience_threshold());
            assert!(mage.level >= level_before);
        }
    }

    #[test]
    fn test_warrior_level_up_growth() {
        let mut warrior = Character::new(Archetype::Warrior, "Hero");
        warrior.level_up();
        assert_eq!(warrior.level, 2);
        assert_eq!(warrior.health, 110);
        assert_eq!(warrior.attack, 30); // +10 net attack per level
        assert_eq!(warrior.defense, 15);
    }

    #[test]
    fn test_mage_level_up_growth() {
        let mut mage = Character::new(Archetype::Mage, "Enemy");
        mage.level_up();
        assert_eq!(mage.level, 2);
        assert_eq!(mage.health, 95); // +15 net health per level
        assert_eq!(mage.attack, 30);
        assert_eq!(mage.defense, 10);
    }

    #[test]
    fn test_level_up_minimum_growth_any_archetype() {
        for archetype in [Archetype::Warrior, Archetype::Mage] {
            let mut character = Character::new(archetype, "Test");
            let (attack, defense) = (character.attack, character.defense);
            character.level_up();
            assert!(character.attack >= attack + 5);
            assert!(character.defense >= defense + 5);
        }
    }
}
