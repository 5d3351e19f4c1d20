//! Basic example: Read a saved heroStats payload
//!
//! This example shows how to load a `heroStats` JSON file and look at the
//! typed heroes and their derived stats without touching the network.

use dota_heroes::json::read_hero_stats;
use dota_heroes::stats::DerivedStats;
use std::error::Error;
use std::fs;

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <heroStats.json>", args[0]);
        eprintln!("\nExample:");
        eprintln!("  cargo run --example read_hero_stats -- path/to/heroStats.json");
        std::process::exit(1);
    }

    let path = &args[1];
    println!("Reading hero stats: {}", path);

    let data = fs::read_to_string(path)?;
    let heroes = read_hero_stats(&data)?;

    println!("\n=== Heroes ===");
    for hero in &heroes {
        let stats = DerivedStats::of(hero);
        println!(
            "  - {} ({}): {:.0} hp, {:.0}-{:.0} damage, range {}",
            hero.display_name(),
            hero.primary_attr.map(|a| a.title()).unwrap_or("-"),
            stats.health,
            stats.attack_min,
            stats.attack_max,
            hero.attack_range.map(|r| r.to_string()).unwrap_or_else(|| "-".to_string()),
        );
    }

    // Fields the typed record does not model are kept per hero
    let untyped: usize = heroes.iter().map(|h| h.extra.len()).sum();
    println!("\n=== Untyped Fields ===");
    println!("{}", untyped);

    println!("\n✓ Successfully read {} heroes", heroes.len());
    Ok(())
}
