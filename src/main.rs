//! Arena battle CLI.
//!
//! Pits a Warrior against a Mage, each equipped from a freshly generated
//! loot pile, and prints the battle blow by blow.
//!
//! Usage:
//!   cargo run -- [OPTIONS]
//!
//! Examples:
//!   cargo run                       # Random battle, wall-clock seed
//!   cargo run -- --seed 42          # Reproducible battle
//!   cargo run -- --json             # Also print the report as JSON

use arena::character::{Archetype, Character};
use arena::combat::{resolve_battle, BattleOutcome};
use arena::items::{generate_item, insertion_sort, Item};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;

const LOOT_PILE_SIZE: usize = 4;

fn main() {
    let args: Vec<String> = env::args().collect();
    let seed = parse_seed(&args).unwrap_or_else(|| chrono::Utc::now().timestamp_millis() as u64);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut warrior = Character::new(Archetype::Warrior, "Hero");
    let mut mage = Character::new(Archetype::Mage, "Enemy");

    let mut loot: Vec<Item> = (0..LOOT_PILE_SIZE).map(|_| generate_item(&mut rng)).collect();
    insertion_sort(&mut loot);

    println!("Loot pile (weakest first):");
    for item in &loot {
        println!("  {}", item);
    }
    println!();

    // The two strongest pieces go to the fighters
    if let Some(item) = loot.pop() {
        warrior.add_item(item);
    }
    if let Some(item) = loot.pop() {
        mage.add_item(item);
    }

    println!("Battle starts between {} and {}", warrior, mage);
    let report = resolve_battle(&mut warrior, &mut mage, &mut rng);
    print!("{}", report.to_text());
    println!();

    match report.outcome {
        BattleOutcome::SecondDefeated => println!("Winner after {} rounds: {}", report.rounds, warrior),
        BattleOutcome::FirstDefeated => println!("Winner after {} rounds: {}", report.rounds, mage),
        BattleOutcome::NoWinner => println!("No winner after {} rounds", report.rounds),
    }

    if args.iter().any(|a| a == "--json") {
        let json = serde_json::to_string_pretty(&report).expect("Failed to serialize report");
        println!("{}", json);
    }
}

fn parse_seed(args: &[String]) -> Option<u64> {
    let mut i = 1;
    while i < args.len() {
        if (args[i] == "-s" || args[i] == "--seed") && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
        i += 1;
    }
    None
}
