use std::fmt;

use serde::{Deserialize, Serialize};

/// Terminal state of a resolved battle, named from the perspective of the
/// two fighters in argument order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    /// The first fighter fell; the second survives and takes the experience.
    FirstDefeated,
    /// The second fighter fell; the first survives and takes the experience.
    SecondDefeated,
    /// Degenerate case: no round resolved a winner (both dead on entry, or
    /// the round cap was hit in a zero-damage stalemate).
    NoWinner,
}

/// One observable battle event, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleEvent {
    Attack {
        attacker: String,
        defender: String,
        damage: u32,
    },
    Defeated {
        name: String,
    },
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleEvent::Attack {
                attacker,
                defender,
                damage,
            } => write!(f, "{} deals {} damage to {}", attacker, damage, defender),
            BattleEvent::Defeated { name } => write!(f, "{} is defeated!", name),
        }
    }
}

/// Full record of one resolved battle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleReport {
    pub outcome: BattleOutcome,
    pub rounds: u32,
    pub events: Vec<BattleEvent>,
}

impl BattleReport {
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for event in &self.events {
            out.push_str(&event.to_string());
            out.push('\n');
        }
        out
    }
}
