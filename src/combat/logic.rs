//! Battle resolution loop.
//!
//! Turn order is asymmetric: the first fighter's hit is applied and can end
//! the battle before the second fighter retaliates, but a surviving second
//! fighter always retaliates within the same round.

use rand::Rng;

use crate::character::Character;
use crate::combat::types::{BattleEvent, BattleOutcome, BattleReport};
use crate::constants::{MAX_BATTLE_ROUNDS, VICTORY_EXPERIENCE};

/// Resolves a battle to completion. Each round the first fighter strikes,
/// then the second if still standing. The survivor is awarded experience.
pub fn resolve_battle(
    first: &mut Character,
    second: &mut Character,
    rng: &mut impl Rng,
) -> BattleReport {
    let mut events = Vec::new();
    let mut rounds = 0;

    while first.is_alive() && second.is_alive() && rounds < MAX_BATTLE_ROUNDS {
        rounds += 1;

        strike(first, second, &mut events, rng);
        if !second.is_alive() {
            events.push(BattleEvent::Defeated {
                name: second.name.clone(),
            });
            first.gain_experience(VICTORY_EXPERIENCE);
            return BattleReport {
                outcome: BattleOutcome::SecondDefeated,
                rounds,
                events,
            };
        }

        strike(second, first, &mut events, rng);
        if !first.is_alive() {
            events.push(BattleEvent::Defeated {
                name: first.name.clone(),
            });
            second.gain_experience(VICTORY_EXPERIENCE);
            return BattleReport {
                outcome: BattleOutcome::FirstDefeated,
                rounds,
                events,
            };
        }
    }

    // Both dead on entry, or the stalemate cap fired.
    BattleReport {
        outcome: BattleOutcome::NoWinner,
        rounds,
        events,
    }
}

/// Applies one attack. Defense is subtracted from the roll before damage
/// lands, clamped at zero rather than validated.
fn strike(
    attacker: &Character,
    defender: &mut Character,
    events: &mut Vec<BattleEvent>,
    rng: &mut impl Rng,
) {
    let damage = attacker.compute_damage(rng).saturating_sub(defender.defense);
    defender.take_damage(damage);
    events.push(BattleEvent::Attack {
        attacker: attacker.name.clone(),
        defender: defender.name.clone(),
        damage,
    });
}
